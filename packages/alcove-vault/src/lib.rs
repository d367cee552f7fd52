pub mod activity;
pub mod cache;
pub mod doc;
mod error;
pub mod frontmatter;
pub mod scan;
pub mod write;

pub use error::{Error, Result};
