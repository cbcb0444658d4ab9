mod tokenizer;
mod types;

pub use crate::tokenizer::tokenize;
pub use crate::types::Token;
