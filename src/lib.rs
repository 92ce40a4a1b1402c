// src/lib.rs
// Estante Engine - Scoring & color-assignment engine for a personal library
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Pure computation: services derive scores, colors and statistics
// - Explicit: rules arrive as injected configuration, no implicit behavior
// - Library boundary only: rendering, persistence and networking stay
//   with the caller

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_book,
    validate_taxonomy,
    AnoDeOuro,
    AutorFavorito,
    // Book
    Book,
    BookStatus,
    // Color (Derived Data)
    CategoryBadge,
    ClassPalette,
    ContagemPor,
    Hsl,
    // Statistics (Derived Data)
    LibraryStatistics,
    PaletteEntry,
    Prioridade,
    ReadingInsights,
    // Taxonomy
    Taxonomy,
    TaxonomyClass,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::EngineConfig;

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Color Service
    ColorRules,
    ColorService,
    PesoPrioridade,
    // Scoring Service
    ScoreRules,
    ScoringService,
    // Statistics Service
    StatisticsService,
};

// ============================================================================
// PUBLIC API - Engine
// ============================================================================

pub use engine::Engine;
