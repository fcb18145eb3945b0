pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::pdf_service::PdfService;

#[derive(Clone)]
pub struct AppState {
    pub pdf_service: PdfService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let pdf_service = PdfService::new(config.chrome_executable.clone());

        Self { pdf_service }
    }
}
