// src/services/statistics_service.rs
//
// Statistics Service - Collection Analytics
//
// Sweeps the book collection into the aggregates the insight widgets
// render: status counts, averages, yearly-goal progress, historical
// highlights, distributions and the reading timeline.
//
// CRITICAL RULES:
// - Statistics are derived data, recomputed fully on every call.
// - Empty collections yield neutral defaults, never a failure.
// - Goal progress stays inside [0, 100], whatever the inputs.
// - "No read book" is None, never zero; the caller renders the two
//   states differently.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};

use crate::domain::book::{Book, BookStatus};
use crate::domain::statistics::{
    AnoDeOuro, AutorFavorito, ContagemPor, LibraryStatistics, ReadingInsights,
};
use crate::services::scoring_service::ScoringService;

/// Distribution bucket for rows with a blank field value
const NAO_DEFINIDO: &str = "Não definido";

// ============================================================================
// STATISTICS SERVICE
// ============================================================================

/// Derives collection-level analytics. Holds the scoring service so the
/// score average always reflects the active formula.
#[derive(Debug, Clone)]
pub struct StatisticsService {
    scoring: ScoringService,
}

impl StatisticsService {
    pub fn new(scoring: ScoringService) -> Self {
        Self { scoring }
    }

    /// Aggregate statistics against an explicit reference year.
    /// The year is an argument so the computation stays pure.
    pub fn aggregate(
        &self,
        livros: &[Book],
        meta_anual: u32,
        ano_referencia: i32,
    ) -> LibraryStatistics {
        let mut livros_lidos = 0u32;
        let mut livros_lendo = 0u32;
        let mut lidos_no_ano = 0u32;
        let mut soma_avaliacao = 0.0;
        let mut com_avaliacao = 0u32;
        let mut soma_score = 0.0;
        let mut primeiro_ano_leitura: Option<i32> = None;

        for livro in livros {
            match livro.status {
                BookStatus::Lido => livros_lidos += 1,
                BookStatus::Lendo => livros_lendo += 1,
                _ => {}
            }

            if let Some(nota) = livro.avaliacao {
                soma_avaliacao += nota;
                com_avaliacao += 1;
            }

            // Read books contribute 0 through the scoring override
            soma_score += self.scoring.score(livro);

            if livro.is_lido() {
                if let Some(ano) = livro.ano_leitura() {
                    if ano == ano_referencia {
                        lidos_no_ano += 1;
                    }
                    primeiro_ano_leitura = Some(match primeiro_ano_leitura {
                        Some(atual) => atual.min(ano),
                        None => ano,
                    });
                }
            }
        }

        let total_livros = livros.len() as u32;

        let media_avaliacao = if com_avaliacao > 0 {
            soma_avaliacao / f64::from(com_avaliacao)
        } else {
            0.0
        };

        let media_score = if total_livros > 0 {
            soma_score / f64::from(total_livros)
        } else {
            0.0
        };

        // A zero goal reports no progress rather than dividing
        let progresso_meta = if meta_anual > 0 {
            (f64::from(lidos_no_ano) / f64::from(meta_anual) * 100.0).min(100.0)
        } else {
            0.0
        };

        LibraryStatistics {
            total_livros,
            livros_lidos,
            livros_lendo,
            livros_nao_lidos: total_livros - livros_lidos,
            media_avaliacao,
            media_score,
            lidos_no_ano,
            progresso_meta,
            primeiro_ano_leitura,
        }
    }

    /// Aggregate statistics against the current UTC calendar year
    pub fn aggregate_now(&self, livros: &[Book], meta_anual: u32) -> LibraryStatistics {
        self.aggregate(livros, meta_anual, Utc::now().year())
    }

    /// Historical highlights of the reading journey.
    /// Every highlight is tie-aware: tied authors and tied years all make
    /// the podium, carrying the shared count.
    pub fn insights(&self, livros: &[Book]) -> ReadingInsights {
        let mut por_autor: BTreeMap<&str, u32> = BTreeMap::new();
        let mut por_ano: BTreeMap<i32, u32> = BTreeMap::new();
        let mut primeira_leitura = None;
        let mut ultima_leitura = None;

        for livro in livros.iter().filter(|l| l.is_lido()) {
            *por_autor.entry(livro.autor.as_str()).or_insert(0) += 1;

            if let Some(data) = livro.data_leitura {
                *por_ano.entry(data.year()).or_insert(0) += 1;

                primeira_leitura = Some(match primeira_leitura {
                    Some(atual) => data.min(atual),
                    None => data,
                });
                ultima_leitura = Some(match ultima_leitura {
                    Some(atual) => data.max(atual),
                    None => data,
                });
            }
        }

        let autor_favorito = por_autor.values().max().copied().map(|maior| AutorFavorito {
            nomes: por_autor
                .iter()
                .filter(|(_, total)| **total == maior)
                .map(|(nome, _)| nome.to_string())
                .collect(),
            livros: maior,
        });

        let ano_de_ouro = por_ano.values().max().copied().map(|maior| AnoDeOuro {
            anos: por_ano
                .iter()
                .filter(|(_, total)| **total == maior)
                .map(|(ano, _)| *ano)
                .collect(),
            livros: maior,
        });

        ReadingInsights {
            autor_favorito,
            ano_de_ouro,
            primeira_leitura,
            ultima_leitura,
        }
    }

    /// Book counts per taxonomy class, descending
    pub fn distribution_por_classe(&self, livros: &[Book]) -> Vec<ContagemPor> {
        distribution(livros, |livro| livro.classe.as_str())
    }

    /// Book counts per category, descending
    pub fn distribution_por_categoria(&self, livros: &[Book]) -> Vec<ContagemPor> {
        distribution(livros, |livro| livro.categoria.as_str())
    }

    /// Book counts per reading status, descending
    pub fn distribution_por_status(&self, livros: &[Book]) -> Vec<ContagemPor> {
        let rotulos: Vec<String> = livros.iter().map(|l| l.status.to_string()).collect();
        let mut contagens: BTreeMap<&str, u32> = BTreeMap::new();
        for rotulo in &rotulos {
            let chave = if rotulo.trim().is_empty() {
                NAO_DEFINIDO
            } else {
                rotulo.as_str()
            };
            *contagens.entry(chave).or_insert(0) += 1;
        }
        sorted_rows(contagens)
    }

    /// Read-book counts keyed by read year, ascending.
    /// The yearly timeline series; years with no reads are simply absent.
    pub fn reads_per_year(&self, livros: &[Book]) -> BTreeMap<i32, u32> {
        let mut por_ano = BTreeMap::new();
        for livro in livros.iter().filter(|l| l.is_lido()) {
            if let Some(ano) = livro.ano_leitura() {
                *por_ano.entry(ano).or_insert(0) += 1;
            }
        }
        por_ano
    }
}

impl Default for StatisticsService {
    fn default() -> Self {
        Self::new(ScoringService::default())
    }
}

// ============================================================================
// INTERNAL HELPERS
// ============================================================================

/// Count books per label; blank labels fall into the undefined bucket
fn distribution<'a, F>(livros: &'a [Book], rotulo: F) -> Vec<ContagemPor>
where
    F: Fn(&'a Book) -> &'a str,
{
    let mut contagens: BTreeMap<&str, u32> = BTreeMap::new();
    for livro in livros {
        let valor = rotulo(livro);
        let chave = if valor.trim().is_empty() {
            NAO_DEFINIDO
        } else {
            valor
        };
        *contagens.entry(chave).or_insert(0) += 1;
    }
    sorted_rows(contagens)
}

/// Rows sorted by descending count; ties fall back to the name, which the
/// BTreeMap already yields in ascending order
fn sorted_rows(contagens: BTreeMap<&str, u32>) -> Vec<ContagemPor> {
    let mut linhas: Vec<ContagemPor> = contagens
        .into_iter()
        .map(|(nome, total)| ContagemPor::new(nome.to_string(), total))
        .collect();
    linhas.sort_by(|a, b| b.total.cmp(&a.total));
    linhas
}
