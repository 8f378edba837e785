pub mod format;
pub mod upload;

pub use format::FormatValidator;
pub use upload::UploadValidator;
