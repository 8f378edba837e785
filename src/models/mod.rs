pub mod data;
pub mod rules;

pub use data::{InvitationData, PassportFields, NOT_FOUND};
pub use rules::{file_extension, UploadRule, UploadRules, UploadStage};
