pub mod keywords;
pub mod related;
pub mod score;
pub mod snippet;
pub mod topics;
