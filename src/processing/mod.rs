pub mod extractors;
pub mod image;
pub mod letter;
pub mod ocr;
pub mod parser;

pub use self::image::ImageProcessor;
pub use letter::{invitation_filename, InvitationLetter};
pub use ocr::{OcrEngine, TesseractOcr};
pub use parser::{LineObserver, PassportFieldParser};
