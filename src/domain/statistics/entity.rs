use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate reading statistics over the whole collection
/// Statistics are NEVER a source of truth and can be recalculated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStatistics {
    /// Book count, read or not
    pub total_livros: u32,

    /// Books with status Lido
    pub livros_lidos: u32,

    /// Books currently being read
    pub livros_lendo: u32,

    /// Everything not yet read (any status other than Lido)
    pub livros_nao_lidos: u32,

    /// Mean rating over books that carry one; 0 when none do
    pub media_avaliacao: f64,

    /// Mean priority score over all books; read books contribute 0
    pub media_score: f64,

    /// Books read within the reference calendar year
    pub lidos_no_ano: u32,

    /// Yearly-goal completion in percent, clamped to [0, 100]
    pub progresso_meta: f64,

    /// Year of the earliest read book; None when nothing was read.
    /// The None/Some split is what lets a caller render "Início" vs "Desde"
    pub primeiro_ano_leitura: Option<i32>,
}

/// Historical highlights of the reading journey, all tie-aware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingInsights {
    /// Author(s) with the most read books
    pub autor_favorito: Option<AutorFavorito>,

    /// Calendar year(s) with the most read books
    pub ano_de_ouro: Option<AnoDeOuro>,

    /// Date of the earliest read book
    pub primeira_leitura: Option<NaiveDate>,

    /// Date of the latest read book
    pub ultima_leitura: Option<NaiveDate>,
}

/// The most-read author(s); ties share the podium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutorFavorito {
    /// Tied author names, ascending
    pub nomes: Vec<String>,

    /// Read books per tied author
    pub livros: u32,
}

/// The busiest reading year(s); ties share the podium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnoDeOuro {
    /// Tied calendar years, ascending
    pub anos: Vec<i32>,

    /// Read books per tied year
    pub livros: u32,
}

/// One row of a distribution chart: a label and how many books carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContagemPor {
    pub nome: String,
    pub total: u32,
}

impl ContagemPor {
    pub fn new(nome: String, total: u32) -> Self {
        Self { nome, total }
    }
}

impl std::fmt::Display for ContagemPor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.nome, self.total)
    }
}
