// src/core.rs
pub mod aggregator;
pub mod matcher;
pub mod tokenizer;

pub use aggregator::count_matches;
pub use matcher::{CompiledPattern, compile_all};
pub use tokenizer::words;
