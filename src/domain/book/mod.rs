pub mod entity;
pub mod invariants;

pub use entity::{Book, BookStatus, Prioridade};
pub use invariants::validate_book;
