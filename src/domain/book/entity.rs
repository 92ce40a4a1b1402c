use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one book in the personal library
/// This is the root entity all scoring and statistics derive from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Book title
    pub titulo: String,

    /// Author name
    pub autor: String,

    /// Reading status
    pub status: BookStatus,

    /// Taxonomy class name (string key into color and weight tables)
    pub classe: String,

    /// Category within the class
    pub categoria: String,

    /// Reading priority assigned by the user
    pub prioridade: Prioridade,

    /// Publication year (if known)
    pub ano_publicacao: Option<i32>,

    /// Date the book was finished; only meaningful when status is Lido
    pub data_leitura: Option<NaiveDate>,

    /// User rating, 0.0 to 5.0 (if rated)
    pub avaliacao: Option<f64>,

    /// Derived reading-priority score
    /// Recomputed by the scoring service, never supplied as input
    pub score: Option<f64>,

    /// Creation timestamp
    pub criado_em: DateTime<Utc>,

    /// Last update timestamp
    pub atualizado_em: DateTime<Utc>,
}

/// Reading status of a book
/// Unrecognized labels are preserved in the catch-all variant so that
/// external records always deserialize; scoring treats them as unread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
    Lido,
    NaEstante,
    ALer,
    Lendo,
    Outro(String),
}

/// Reading priority tier assigned by the user
/// Unrecognized labels fall into the catch-all variant and weigh 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prioridade {
    Baixa,
    Media,
    Alta,
    Outra(String),
}

impl Book {
    /// Create a new Book entity
    /// New books start unread ("A Ler") with low priority
    pub fn new(titulo: String, autor: String, classe: String, categoria: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            titulo,
            autor,
            status: BookStatus::ALer,
            classe,
            categoria,
            prioridade: Prioridade::Baixa,
            ano_publicacao: None,
            data_leitura: None,
            avaliacao: None,
            score: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    /// Update metadata
    /// This preserves the creation timestamp and updates the modification timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn update_metadata(
        &mut self,
        titulo: Option<String>,
        autor: Option<String>,
        classe: Option<String>,
        categoria: Option<String>,
        prioridade: Option<Prioridade>,
        ano_publicacao: Option<Option<i32>>,
        avaliacao: Option<Option<f64>>,
    ) {
        if let Some(t) = titulo {
            self.titulo = t;
        }
        if let Some(a) = autor {
            self.autor = a;
        }
        if let Some(c) = classe {
            self.classe = c;
        }
        if let Some(c) = categoria {
            self.categoria = c;
        }
        if let Some(p) = prioridade {
            self.prioridade = p;
        }
        if let Some(ano) = ano_publicacao {
            self.ano_publicacao = ano;
        }
        if let Some(nota) = avaliacao {
            self.avaliacao = nota;
        }

        self.atualizado_em = Utc::now();
    }

    /// Mark the book as read on the given date
    /// The stored score becomes stale until the scoring service runs again
    pub fn marcar_lido(&mut self, data: NaiveDate) {
        self.status = BookStatus::Lido;
        self.data_leitura = Some(data);
        self.atualizado_em = Utc::now();
    }

    /// True when the book has been finished
    pub fn is_lido(&self) -> bool {
        self.status == BookStatus::Lido
    }

    /// Calendar year the book was read, when known
    pub fn ano_leitura(&self) -> Option<i32> {
        self.data_leitura.map(|d| d.year())
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.trim() {
            "Lido" => BookStatus::Lido,
            "Na estante" => BookStatus::NaEstante,
            "A Ler" => BookStatus::ALer,
            "Lendo" => BookStatus::Lendo,
            _ => BookStatus::Outro(s),
        }
    }
}

impl From<&str> for BookStatus {
    fn from(s: &str) -> Self {
        BookStatus::from(s.to_string())
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Lido => write!(f, "Lido"),
            BookStatus::NaEstante => write!(f, "Na estante"),
            BookStatus::ALer => write!(f, "A Ler"),
            BookStatus::Lendo => write!(f, "Lendo"),
            BookStatus::Outro(label) => write!(f, "{}", label),
        }
    }
}

impl From<String> for Prioridade {
    fn from(s: String) -> Self {
        // Legacy rows carry numbered labels ("1 - Baixa", "2 - Média",
        // "4 - Alta"); only the tier name decides the variant.
        let label = s.trim();
        let label = label.rsplit(" - ").next().unwrap_or(label);
        match label {
            "Baixa" => Prioridade::Baixa,
            "Média" | "Media" => Prioridade::Media,
            "Alta" => Prioridade::Alta,
            _ => Prioridade::Outra(s),
        }
    }
}

impl From<&str> for Prioridade {
    fn from(s: &str) -> Self {
        Prioridade::from(s.to_string())
    }
}

impl From<Prioridade> for String {
    fn from(prioridade: Prioridade) -> Self {
        prioridade.to_string()
    }
}

impl std::fmt::Display for Prioridade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prioridade::Baixa => write!(f, "Baixa"),
            Prioridade::Media => write!(f, "Média"),
            Prioridade::Alta => write!(f, "Alta"),
            Prioridade::Outra(label) => write!(f, "{}", label),
        }
    }
}
