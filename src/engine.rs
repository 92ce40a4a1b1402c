// src/engine.rs
//
// Engine - The single handle a caller holds
//
// Builds the three services from one configuration value. The engine owns
// nothing mutable: every method delegates to a pure service, so one engine
// can serve any number of concurrent renders.

use crate::config::EngineConfig;
use crate::domain::book::Book;
use crate::domain::statistics::LibraryStatistics;
use crate::services::{ColorService, ScoringService, StatisticsService};

pub struct Engine {
    meta_anual: u32,
    scoring: ScoringService,
    colors: ColorService,
    statistics: StatisticsService,
}

impl Engine {
    /// Build the services from one configuration value
    pub fn new(config: EngineConfig) -> Self {
        let scoring = ScoringService::new(config.formula);
        let statistics = StatisticsService::new(scoring.clone());
        Self {
            meta_anual: config.meta_anual,
            scoring,
            colors: ColorService::new(config.cores),
            statistics,
        }
    }

    /// The configured yearly reading goal
    pub fn meta_anual(&self) -> u32 {
        self.meta_anual
    }

    /// Reading-priority scoring
    pub fn scoring(&self) -> &ScoringService {
        &self.scoring
    }

    /// Class colors and category badges
    pub fn colors(&self) -> &ColorService {
        &self.colors
    }

    /// Collection analytics
    pub fn statistics(&self) -> &StatisticsService {
        &self.statistics
    }

    /// Aggregate statistics for the current UTC year under the configured
    /// goal; the per-render call an insight widget makes
    pub fn aggregate_now(&self, livros: &[Book]) -> LibraryStatistics {
        self.statistics.aggregate_now(livros, self.meta_anual)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
