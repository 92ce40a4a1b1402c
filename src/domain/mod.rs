// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod color;
pub mod statistics;
pub mod taxonomy;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{validate_book, Book, BookStatus, Prioridade};

// Taxonomy Domain
pub use taxonomy::{validate_taxonomy, Taxonomy, TaxonomyClass};

// Color Domain (Derived Data)
pub use color::{CategoryBadge, ClassPalette, Hsl, PaletteEntry};

// Statistics Domain (Derived Data)
pub use statistics::{
    AnoDeOuro, AutorFavorito, ContagemPor, LibraryStatistics, ReadingInsights,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {avaliacao} is outside the 0-5 band")]
    RatingOutOfRange { avaliacao: f64 },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
