use std::sync::Arc;

use alcove_service::AlcoveService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AlcoveService>,
}
impl AppState {
	pub fn new(config: alcove_config::Config) -> Self {
		Self { service: Arc::new(AlcoveService::new(config)) }
	}
}
