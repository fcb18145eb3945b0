pub mod question;
pub mod report;
