// src/domain/color/value_objects.rs
//
// Color Value Objects
//
// Pure, immutable data structures for class colors and category badges.
// These carry what rendering collaborators need and nothing else.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects
// - Deterministic construction
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

// ============================================================================
// HSL COLOR
// ============================================================================

/// A color in hue/saturation/lightness space.
/// Hue is in degrees (0-359); saturation and lightness are percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0-359
    pub h: u16,

    /// Saturation percent, 0-100
    pub s: u8,

    /// Lightness percent, 0-100
    pub l: u8,
}

impl Hsl {
    /// Creates a color; hue wraps around the circle, bands are clamped
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Same hue and lightness at a different saturation
    pub fn with_saturation(&self, s: u8) -> Self {
        Self {
            s: s.min(100),
            ..*self
        }
    }

    /// Tonal variant: same hue and saturation at the given lightness.
    /// Fractional lightness is rounded to the nearest percent point.
    pub fn with_lightness(&self, l: f64) -> Self {
        Self {
            l: l.round().clamp(0.0, 100.0) as u8,
            ..*self
        }
    }
}

impl std::fmt::Display for Hsl {
    /// CSS color function form, ready for a style attribute
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ============================================================================
// CATEGORY BADGE
// ============================================================================

/// The color pair of one category badge: a light fill and a dark text color.
/// The two are always produced together so the pair stays readable
/// regardless of the class's own lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadge {
    /// Background fill, kept inside the light band
    pub fundo: Hsl,

    /// Text and border color, kept inside the dark band
    pub texto: Hsl,
}

impl CategoryBadge {
    pub fn new(fundo: Hsl, texto: Hsl) -> Self {
        Self { fundo, texto }
    }
}

// ============================================================================
// CLASS PALETTE
// ============================================================================

/// One category inside a class palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Category name as declared in the taxonomy
    pub categoria: String,

    /// Badge pair derived from the category's position in its class
    pub badge: CategoryBadge,
}

impl PaletteEntry {
    pub fn new(categoria: String, badge: CategoryBadge) -> Self {
        Self { categoria, badge }
    }
}

/// Render bundle for one class: the base color plus the badge of every
/// category, in declaration order. One of these per settings-screen row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPalette {
    /// Class name as declared in the taxonomy
    pub classe: String,

    /// Stable base color of the class
    pub base: Hsl,

    /// Ordered category badges
    pub categorias: Vec<PaletteEntry>,
}

impl ClassPalette {
    pub fn new(classe: String, base: Hsl, categorias: Vec<PaletteEntry>) -> Self {
        Self {
            classe,
            base,
            categorias,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
