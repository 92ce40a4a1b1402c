// src/services/color_service.rs
//
// Color Service - Class Colors & Category Badges
//
// Derives a stable base color per taxonomy class and tonal badge pairs per
// category, so rendering never needs a hand-maintained color table.
//
// CRITICAL RULES:
// - Same class name → same base color, in every call and every session.
// - Category offsets spread symmetrically around the base lightness; a
//   single category sits exactly on it.
// - Badge fills stay inside the light band, badge text inside the dark
//   band, whatever the class's own lightness.
// - Total over any non-empty class name; no lookups can fail.
// - Constants are injected configuration, never hard-coded in the algorithm.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::color::{CategoryBadge, ClassPalette, Hsl, PaletteEntry};
use crate::domain::taxonomy::Taxonomy;

/// Lightness band for chart series variants
const SERIE_MINIMO: f64 = 20.0;
const SERIE_MAXIMO: f64 = 90.0;

// ============================================================================
// COLOR SERVICE
// ============================================================================

/// Applies a `ColorRules` table to class and category names.
/// Pure and cheap to clone; holds nothing but the rules value.
#[derive(Debug, Clone)]
pub struct ColorService {
    rules: ColorRules,
}

impl ColorService {
    pub fn new(rules: ColorRules) -> Self {
        Self { rules }
    }

    /// The rules this service was built with
    pub fn rules(&self) -> &ColorRules {
        &self.rules
    }

    /// Stable base color of a class.
    ///
    /// A configured fixed palette wins when it names the class; otherwise
    /// the hue comes from a 31-based rolling hash of the class name in
    /// wrapping 32-bit arithmetic, folded into the hue circle. Saturation
    /// and lightness are the configured base values.
    pub fn base_color(&self, classe: &str) -> Hsl {
        if let Some(cor) = self.rules.paleta_fixa.get(classe) {
            debug!("Class '{}' uses the fixed palette: {}", classe, cor);
            return *cor;
        }

        let mut hash: i32 = 0;
        for ch in classe.chars() {
            hash = (ch as i32).wrapping_add(hash.wrapping_mul(31));
        }
        let matiz = (hash % 360).abs() as u16;

        Hsl::new(matiz, self.rules.saturacao_base, self.rules.luminosidade_base)
    }

    /// Lightness offset of the category at `indice` among `total` siblings:
    /// `(indice - (total - 1) / 2) * passo_tonal`. Symmetric around 0 and
    /// monotonic in the index; exactly 0 for a lone category.
    pub fn tonal_offset(&self, indice: usize, total: usize) -> f64 {
        (indice as f64 - (total as f64 - 1.0) / 2.0) * self.rules.passo_tonal
    }

    /// Badge pair of the category at `indice` among `total` siblings.
    ///
    /// The fill sits at the configured badge center shifted by a quarter of
    /// the tonal offset, clamped to the light band; the text is the base
    /// lightness discounted and clamped to the dark band. The caller
    /// guarantees at least one category per class.
    pub fn category_badge(&self, classe: &str, indice: usize, total: usize) -> CategoryBadge {
        debug_assert!(total > 0, "badge derivation requires a non-empty class");

        let base = self.base_color(classe);
        let offset = self.tonal_offset(indice, total);

        let luz_fundo = (self.rules.luminosidade_fundo + offset / 4.0)
            .clamp(self.rules.fundo_minimo, self.rules.fundo_maximo);
        let fundo = base
            .with_saturation(self.rules.saturacao_fundo)
            .with_lightness(luz_fundo);

        let luz_texto = (f64::from(base.l) - self.rules.desconto_texto)
            .clamp(self.rules.texto_minimo, self.rules.texto_maximo);
        let texto = base
            .with_saturation(self.rules.saturacao_texto)
            .with_lightness(luz_texto);

        CategoryBadge::new(fundo, texto)
    }

    /// Chart-series variant of the category at `indice` among `total`
    /// siblings: the symmetric offset applied directly to the base
    /// lightness with the series step, saturation unchanged.
    pub fn series_color(&self, classe: &str, indice: usize, total: usize) -> Hsl {
        debug_assert!(total > 0, "series derivation requires a non-empty class");

        let base = self.base_color(classe);
        let offset =
            (indice as f64 - (total as f64 - 1.0) / 2.0) * self.rules.passo_serie;
        let luz = (f64::from(base.l) + offset).clamp(SERIE_MINIMO, SERIE_MAXIMO);

        base.with_lightness(luz)
    }

    /// Full render bundle for a taxonomy: one palette per class, in
    /// declaration order, each carrying the base color and every category
    /// badge.
    pub fn class_palette(&self, taxonomia: &Taxonomy) -> Vec<ClassPalette> {
        taxonomia
            .classes
            .iter()
            .map(|class| {
                let total = class.categorias.len();
                let categorias = class
                    .categorias
                    .iter()
                    .enumerate()
                    .map(|(indice, categoria)| {
                        PaletteEntry::new(
                            categoria.clone(),
                            self.category_badge(&class.nome, indice, total),
                        )
                    })
                    .collect();

                ClassPalette::new(class.nome.clone(), self.base_color(&class.nome), categorias)
            })
            .collect()
    }
}

impl Default for ColorService {
    fn default() -> Self {
        Self::new(ColorRules::default())
    }
}

// ============================================================================
// COLOR RULES (INJECTED CONFIGURATION)
// ============================================================================

/// Constant table for color derivation.
/// Every field has a serde default, so a partial JSON object deserializes
/// into the documented palette with only the listed fields replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRules {
    /// Saturation of hashed base colors (default: 65)
    #[serde(default = "default_saturacao_base")]
    pub saturacao_base: u8,

    /// Lightness of hashed base colors (default: 75)
    #[serde(default = "default_luminosidade_base")]
    pub luminosidade_base: u8,

    /// Lightness step between adjacent category badges (default: 6)
    #[serde(default = "default_passo_tonal")]
    pub passo_tonal: f64,

    /// Lightness step between adjacent chart-series entries (default: 5)
    #[serde(default = "default_passo_serie")]
    pub passo_serie: f64,

    /// Badge-fill lightness center (default: 96)
    #[serde(default = "default_luminosidade_fundo")]
    pub luminosidade_fundo: f64,

    /// Lower edge of the badge-fill band (default: 92)
    #[serde(default = "default_fundo_minimo")]
    pub fundo_minimo: f64,

    /// Upper edge of the badge-fill band (default: 99)
    #[serde(default = "default_fundo_maximo")]
    pub fundo_maximo: f64,

    /// Badge-fill saturation (default: 70)
    #[serde(default = "default_saturacao_fundo")]
    pub saturacao_fundo: u8,

    /// Lightness discount from base to badge text (default: 40)
    #[serde(default = "default_desconto_texto")]
    pub desconto_texto: f64,

    /// Lower edge of the badge-text band (default: 25)
    #[serde(default = "default_texto_minimo")]
    pub texto_minimo: f64,

    /// Upper edge of the badge-text band (default: 45)
    #[serde(default = "default_texto_maximo")]
    pub texto_maximo: f64,

    /// Badge-text saturation (default: 50)
    #[serde(default = "default_saturacao_texto")]
    pub saturacao_texto: u8,

    /// Curated colors that override the hash per class name
    /// (default: empty, hash-only)
    #[serde(default)]
    pub paleta_fixa: BTreeMap<String, Hsl>,
}

impl Default for ColorRules {
    fn default() -> Self {
        Self {
            saturacao_base: default_saturacao_base(),
            luminosidade_base: default_luminosidade_base(),
            passo_tonal: default_passo_tonal(),
            passo_serie: default_passo_serie(),
            luminosidade_fundo: default_luminosidade_fundo(),
            fundo_minimo: default_fundo_minimo(),
            fundo_maximo: default_fundo_maximo(),
            saturacao_fundo: default_saturacao_fundo(),
            desconto_texto: default_desconto_texto(),
            texto_minimo: default_texto_minimo(),
            texto_maximo: default_texto_maximo(),
            saturacao_texto: default_saturacao_texto(),
            paleta_fixa: BTreeMap::new(),
        }
    }
}

fn default_saturacao_base() -> u8 {
    65
}
fn default_luminosidade_base() -> u8 {
    75
}
fn default_passo_tonal() -> f64 {
    6.0
}
fn default_passo_serie() -> f64 {
    5.0
}
fn default_luminosidade_fundo() -> f64 {
    96.0
}
fn default_fundo_minimo() -> f64 {
    92.0
}
fn default_fundo_maximo() -> f64 {
    99.0
}
fn default_saturacao_fundo() -> u8 {
    70
}
fn default_desconto_texto() -> f64 {
    40.0
}
fn default_texto_minimo() -> f64 {
    25.0
}
fn default_texto_maximo() -> f64 {
    45.0
}
fn default_saturacao_texto() -> u8 {
    50
}
