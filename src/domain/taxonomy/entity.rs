use serde::{Deserialize, Serialize};

/// Hierarchical classification for the library: classes and their categories
/// Order is significant on both levels; category position drives the tonal
/// offset of its badge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub classes: Vec<TaxonomyClass>,
}

/// One class and its ordered list of categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyClass {
    /// Class name (e.g. "Tecnologia & IA")
    pub nome: String,

    /// Ordered category names; never empty in a valid taxonomy
    pub categorias: Vec<String>,
}

impl Taxonomy {
    /// Create a taxonomy from an ordered list of classes
    pub fn new(classes: Vec<TaxonomyClass>) -> Self {
        Self { classes }
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up a class by name
    pub fn class(&self, nome: &str) -> Option<&TaxonomyClass> {
        self.classes.iter().find(|c| c.nome == nome)
    }

    /// Ordered categories of a class, when the class exists
    pub fn categories_of(&self, classe: &str) -> Option<&[String]> {
        self.class(classe).map(|c| c.categorias.as_slice())
    }

    /// Reverse lookup: the class a category belongs to
    /// Tries an exact match first, then a trimmed case-insensitive match,
    /// since stored rows and configured names drift apart over time
    pub fn class_of_category(&self, categoria: &str) -> Option<&str> {
        for class in &self.classes {
            if class.categorias.iter().any(|c| c == categoria) {
                return Some(class.nome.as_str());
            }
        }

        let alvo = normalize(categoria);
        for class in &self.classes {
            if class.categorias.iter().any(|c| normalize(c) == alvo) {
                return Some(class.nome.as_str());
            }
        }
        None
    }

    /// Badge slot of a category: its zero-based index within the class and
    /// the class's category count
    pub fn badge_slot(&self, classe: &str, categoria: &str) -> Option<(usize, usize)> {
        let class = self.class(classe)?;
        let indice = class.categorias.iter().position(|c| c == categoria)?;
        Some((indice, class.categorias.len()))
    }
}

impl Default for Taxonomy {
    /// The stock classification shipped with the library app
    fn default() -> Self {
        let classes = [
            (
                "Tecnologia & IA",
                vec![
                    "Análise de Dados",
                    "Ciência de Dados",
                    "IA",
                    "Visão Computacional",
                    "Machine Learning",
                    "Programação",
                    "Sistemas de IA & LLMs",
                ],
            ),
            (
                "Engenharia & Arquitetura",
                vec!["Arquitetura de Software", "Engenharia de Dados", "MLOps"],
            ),
            (
                "Conhecimento & Ciências",
                vec!["Conhecimento Geral", "Estatística", "Cosmologia"],
            ),
            (
                "Negócios & Finanças",
                vec!["Finanças Pessoais", "Negócios", "Liberdade Econômica"],
            ),
            (
                "Literatura & Cultura",
                vec![
                    "Diversidade e Inclusão",
                    "História/Ficção",
                    "Literatura Brasileira",
                ],
            ),
            (
                "Desenvolvimento Pessoal",
                vec![
                    "Bem-estar",
                    "Comunicação",
                    "Criatividade",
                    "Inteligência Emocional",
                    "Liderança",
                    "Produtividade",
                    "Biohacking & Existência",
                ],
            ),
        ];

        Self::new(
            classes
                .into_iter()
                .map(|(nome, categorias)| {
                    TaxonomyClass::new(
                        nome.to_string(),
                        categorias.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        )
    }
}

impl TaxonomyClass {
    /// Create a new class with its categories
    pub fn new(nome: String, categorias: Vec<String>) -> Self {
        Self { nome, categorias }
    }
}

impl std::fmt::Display for TaxonomyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nome)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
