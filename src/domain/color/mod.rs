//! Critical Color Invariants:
//!
//! 1. Colors are ALWAYS derived, NEVER stored
//! 2. The same class name yields the same base color, in every session
//! 3. Badge pairs keep the fill light and the text dark, whatever the hue
//! 4. Tonal offsets are symmetric around the base lightness
//! 5. Deleting a derived color loses nothing; it can be recomputed

pub mod value_objects;

pub use value_objects::{CategoryBadge, ClassPalette, Hsl, PaletteEntry};
