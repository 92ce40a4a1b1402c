// src/config/mod.rs
//
// Engine Configuration
//
// The whole configuration surface of the engine as one serde-backed value:
// the yearly goal, the scoring formula and the color constants. Every field
// carries a default, so an empty JSON object is a valid configuration and a
// partial one replaces only what it names.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::{ColorRules, ScoreRules};

/// Injected configuration for the whole engine.
/// Stored by callers as user-preference JSON; unknown fields are ignored
/// so older engines read newer files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Yearly reading goal, in books (default: 20)
    #[serde(default = "default_meta_anual")]
    pub meta_anual: u32,

    /// Reading-priority formula weights
    #[serde(default)]
    pub formula: ScoreRules,

    /// Color derivation constants
    #[serde(default)]
    pub cores: ColorRules,
}

impl EngineConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let conteudo = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&conteudo)?;
        info!("Engine configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration back to pretty JSON
    pub fn to_json_string(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            meta_anual: default_meta_anual(),
            formula: ScoreRules::default(),
            cores: ColorRules::default(),
        }
    }
}

fn default_meta_anual() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_carries_the_documented_values() {
        let config = EngineConfig::default();

        assert_eq!(config.meta_anual, 20);
        assert_eq!(config.formula.ano_minimo_lancamento, 2022);
        assert_eq!(config.formula.peso_prioridade.alta, 10.0);
        assert_eq!(config.cores.passo_tonal, 6.0);
        assert!(config.cores.paleta_fixa.is_empty());
    }

    #[test]
    fn test_empty_json_object_is_the_default() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_json_replaces_only_what_it_names() {
        let config = EngineConfig::from_json_str(
            r#"{"meta_anual": 12, "formula": {"ano_minimo_recente": 2006}}"#,
        )
        .unwrap();

        assert_eq!(config.meta_anual, 12);
        assert_eq!(config.formula.ano_minimo_recente, 2006);
        assert_eq!(config.formula.ano_minimo_lancamento, 2022);
        assert_eq!(config.cores, ColorRules::default());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let config =
            EngineConfig::from_json_str(r#"{"meta_anual": 30, "tema_escuro": true}"#).unwrap();
        assert_eq!(config.meta_anual, 30);
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let erro = EngineConfig::from_json_str("{meta_anual").unwrap_err();
        assert!(matches!(erro, crate::error::AppError::Serialization(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let config = EngineConfig::from_json_str(r#"{"meta_anual": 24}"#).unwrap();

        let mut arquivo = tempfile::NamedTempFile::new().unwrap();
        arquivo
            .write_all(config.to_json_string().unwrap().as_bytes())
            .unwrap();

        let relido = EngineConfig::from_json_file(arquivo.path()).unwrap();
        assert_eq!(relido, config);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let erro = EngineConfig::from_json_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(erro, crate::error::AppError::Io(_)));
    }
}
