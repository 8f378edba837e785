pub mod config;
pub mod error;

pub use config::OcrConfig;
pub use error::PassportError;
