pub mod entity;
pub mod invariants;

pub use entity::{Taxonomy, TaxonomyClass};
pub use invariants::validate_taxonomy;
