// src/models.rs
pub mod cell;
pub mod count_table;

pub use cell::Cell;
pub use count_table::CountTable;
