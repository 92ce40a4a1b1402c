use super::entity::Taxonomy;
use crate::domain::{DomainError, DomainResult};

/// Validates all Taxonomy invariants
/// Badge derivation assumes these rules were enforced upstream
pub fn validate_taxonomy(taxonomia: &Taxonomy) -> DomainResult<()> {
    validate_class_names(taxonomia)?;
    validate_category_lists(taxonomia)?;
    validate_unique_classes(taxonomia)?;
    Ok(())
}

/// Class names cannot be empty
fn validate_class_names(taxonomia: &Taxonomy) -> DomainResult<()> {
    for class in &taxonomia.classes {
        if class.nome.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Taxonomy class name cannot be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Every class carries at least one category, and no category is blank
fn validate_category_lists(taxonomia: &Taxonomy) -> DomainResult<()> {
    for class in &taxonomia.classes {
        if class.categorias.is_empty() {
            return Err(DomainError::InvariantViolation(format!(
                "Class '{}' has no categories",
                class.nome
            )));
        }
        if class.categorias.iter().any(|c| c.trim().is_empty()) {
            return Err(DomainError::InvariantViolation(format!(
                "Class '{}' has a blank category name",
                class.nome
            )));
        }
    }
    Ok(())
}

/// Class names are unique within a taxonomy
fn validate_unique_classes(taxonomia: &Taxonomy) -> DomainResult<()> {
    for (posicao, class) in taxonomia.classes.iter().enumerate() {
        let repetida = taxonomia.classes[posicao + 1..]
            .iter()
            .any(|outra| outra.nome == class.nome);
        if repetida {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate class name '{}'",
                class.nome
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Taxonomy domain:
///
/// 1. Class names are non-empty and unique
/// 2. Every class has at least one category
/// 3. Category names are non-empty
/// 4. Order is significant on both levels and is preserved as declared
/// 5. Category position within its class drives the badge tonal offset
