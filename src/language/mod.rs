//! Language identification, code handling and the unsupported-language fallback.

mod classifier;
mod code;

pub use classifier::{resolve_language, Classification, FixedClassifier, LanguageClassifier, WhatlangClassifier};
pub use code::LanguageCode;
