//! Text processing: normalization, stopwords and tokenization.

mod normalizer;
mod stopwords;
mod tokenizer;

pub use normalizer::{is_allowed_char, Normalizer};
pub use stopwords::{StopwordList, StopwordRegistry, QUOTE_ARTIFACTS};
pub use tokenizer::{is_number, separate_numbers, Casing, Tokenizer, TokenizerProfile};
