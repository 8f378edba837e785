pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod passport_extractor;

pub use models::{InvitationData, PassportFields};
pub use passport_extractor::PassportExtractor;
pub use processing::PassportFieldParser;
pub use utils::PassportError;
