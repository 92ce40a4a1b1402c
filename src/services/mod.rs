// src/services/mod.rs
//
// Services Module - Computation Layer

pub mod color_service;
pub mod scoring_service;
pub mod statistics_service;

#[cfg(test)]
mod statistics_service_tests;

// Re-export all services and their rule tables
pub use color_service::{
    ColorRules,
    ColorService,
};

pub use scoring_service::{
    PesoPrioridade,
    ScoreRules,
    ScoringService,
};

pub use statistics_service::{
    StatisticsService,
};
