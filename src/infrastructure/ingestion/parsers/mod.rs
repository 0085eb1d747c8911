//! Document reader implementations

mod json;
mod pdf;

pub use json::JsonRecordDecoder;
pub use pdf::PdfTextExtractor;

#[cfg(test)]
pub use pdf::fixtures;
