pub mod answer_key_service;
pub mod pdf_service;
pub mod results_service;
