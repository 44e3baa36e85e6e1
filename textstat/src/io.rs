// src/io.rs
pub mod patterns;
pub mod report;
pub mod text;

pub use patterns::load_patterns;
pub use report::write_report;
pub use text::read_text;
