// src/services/scoring_service.rs
//
// Scoring Service - Reading Priority
//
// Computes the reading-priority score of a book from four independent rule
// stages: status filter, base weight, priority weight and context weight.
//
// CRITICAL RULES:
// - A read book scores 0, always. Hard override, not an additive term.
// - The remaining stages are additive and never read each other's output.
// - Total over any structurally valid book: unknown labels fall into
//   documented buckets instead of raising.
// - Deterministic: same book + same rules → same score.
// - Weights are injected configuration, never hard-coded in the algorithm.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::book::{Book, Prioridade};

// ============================================================================
// SCORING SERVICE
// ============================================================================

/// Applies a `ScoreRules` table to books. Pure and cheap to clone;
/// holds nothing but the rules value.
#[derive(Debug, Clone)]
pub struct ScoringService {
    rules: ScoreRules,
}

impl ScoringService {
    pub fn new(rules: ScoreRules) -> Self {
        Self { rules }
    }

    /// The rules this service was built with
    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// Reading-priority score of one book
    pub fn score(&self, livro: &Book) -> f64 {
        // Stage 1: status filter. Read books have no remaining priority.
        if livro.is_lido() {
            return 0.0;
        }

        // Stage 2: base weight from class membership
        let base = self.peso_base(&livro.classe);

        // Stage 3: priority weight from the user-assigned tier
        let prioridade = self.peso_prioridade(&livro.prioridade);

        // Stage 4: context weight from publication recency
        let contexto = self.peso_contexto(livro.ano_publicacao);

        base + prioridade + contexto
    }

    /// Recompute and store the score of every book in the collection.
    /// Run after the formula configuration changes or books are imported.
    pub fn apply(&self, livros: &mut [Book]) {
        for livro in livros.iter_mut() {
            livro.score = Some(self.score(livro));
        }
    }

    /// Books in reading order: descending score, ties keeping input order.
    /// Read books score 0 and sink to the bottom on their own.
    pub fn ranked<'a>(&self, livros: &'a [Book]) -> Vec<&'a Book> {
        let mut pontuados: Vec<(f64, &Book)> =
            livros.iter().map(|livro| (self.score(livro), livro)).collect();
        pontuados.sort_by(|a, b| b.0.total_cmp(&a.0));
        pontuados.into_iter().map(|(_, livro)| livro).collect()
    }

    // ========================================================================
    // INTERNAL RULE STAGES
    // ========================================================================

    fn peso_base(&self, classe: &str) -> f64 {
        if self.rules.classes_tecnicas.contains(classe) {
            self.rules.peso_base_tecnico
        } else {
            self.rules.peso_base_outros
        }
    }

    fn peso_prioridade(&self, prioridade: &Prioridade) -> f64 {
        match prioridade {
            Prioridade::Baixa => self.rules.peso_prioridade.baixa,
            Prioridade::Media => self.rules.peso_prioridade.media,
            Prioridade::Alta => self.rules.peso_prioridade.alta,
            Prioridade::Outra(rotulo) => {
                debug!("Unrecognized priority '{}' weighs 0", rotulo);
                0.0
            }
        }
    }

    fn peso_contexto(&self, ano: Option<i32>) -> f64 {
        match ano {
            Some(a) if a >= self.rules.ano_minimo_lancamento => self.rules.peso_lancamento,
            Some(a) if a >= self.rules.ano_minimo_recente => self.rules.peso_recente,
            // Missing years fall into the old band by policy
            _ => self.rules.peso_antigo,
        }
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(ScoreRules::default())
    }
}

// ============================================================================
// SCORE RULES (INJECTED CONFIGURATION)
// ============================================================================

/// Weight table for the reading-priority formula.
/// Every field has a serde default, so a partial JSON object deserializes
/// into the documented formula with only the listed fields replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Classes that take the technical base weight; everything else
    /// falls into the "other" bucket
    #[serde(default = "default_classes_tecnicas")]
    pub classes_tecnicas: BTreeSet<String>,

    /// Base weight for technical classes (default: +4)
    #[serde(default = "default_peso_base_tecnico")]
    pub peso_base_tecnico: f64,

    /// Base weight for every other class (default: +2)
    #[serde(default = "default_peso_base_outros")]
    pub peso_base_outros: f64,

    /// Weight per priority tier
    #[serde(default)]
    pub peso_prioridade: PesoPrioridade,

    /// Years at or past this threshold count as new releases (default: 2022)
    #[serde(default = "default_ano_minimo_lancamento")]
    pub ano_minimo_lancamento: i32,

    /// Years at or past this threshold (but before the release threshold)
    /// count as recent (default: 2012)
    #[serde(default = "default_ano_minimo_recente")]
    pub ano_minimo_recente: i32,

    /// Context weight for new releases (default: +9)
    #[serde(default = "default_peso_lancamento")]
    pub peso_lancamento: f64,

    /// Context weight for the recent band (default: +6)
    #[serde(default = "default_peso_recente")]
    pub peso_recente: f64,

    /// Context weight for everything older, including unknown years
    /// (default: +4)
    #[serde(default = "default_peso_antigo")]
    pub peso_antigo: f64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            classes_tecnicas: default_classes_tecnicas(),
            peso_base_tecnico: default_peso_base_tecnico(),
            peso_base_outros: default_peso_base_outros(),
            peso_prioridade: PesoPrioridade::default(),
            ano_minimo_lancamento: default_ano_minimo_lancamento(),
            ano_minimo_recente: default_ano_minimo_recente(),
            peso_lancamento: default_peso_lancamento(),
            peso_recente: default_peso_recente(),
            peso_antigo: default_peso_antigo(),
        }
    }
}

/// Weight of each priority tier (default: Baixa +1, Média +4, Alta +10).
/// Unrecognized tiers contribute 0 and are not configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PesoPrioridade {
    #[serde(default = "default_peso_baixa")]
    pub baixa: f64,

    #[serde(default = "default_peso_media")]
    pub media: f64,

    #[serde(default = "default_peso_alta")]
    pub alta: f64,
}

impl Default for PesoPrioridade {
    fn default() -> Self {
        Self {
            baixa: default_peso_baixa(),
            media: default_peso_media(),
            alta: default_peso_alta(),
        }
    }
}

fn default_classes_tecnicas() -> BTreeSet<String> {
    // The legacy type label plus the technical classes of the stock taxonomy
    ["Técnico", "Tecnologia & IA", "Engenharia & Arquitetura"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_peso_base_tecnico() -> f64 {
    4.0
}
fn default_peso_base_outros() -> f64 {
    2.0
}
fn default_ano_minimo_lancamento() -> i32 {
    2022
}
fn default_ano_minimo_recente() -> i32 {
    2012
}
fn default_peso_lancamento() -> f64 {
    9.0
}
fn default_peso_recente() -> f64 {
    6.0
}
fn default_peso_antigo() -> f64 {
    4.0
}
fn default_peso_baixa() -> f64 {
    1.0
}
fn default_peso_media() -> f64 {
    4.0
}
fn default_peso_alta() -> f64 {
    10.0
}
