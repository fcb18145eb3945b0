pub mod analysis_dto;
pub mod pdf_dto;
