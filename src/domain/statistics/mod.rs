//! Critical Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived, NEVER primary
//! 2. Statistics can be recalculated at any time
//! 3. Statistics can be deleted without affecting domains
//! 4. Statistics NEVER alter domain state
//! 5. If statistics conflict with domain data, domain wins
//! 6. Empty inputs yield neutral defaults, never a failure

pub mod entity;

pub use entity::{AnoDeOuro, AutorFavorito, ContagemPor, LibraryStatistics, ReadingInsights};
