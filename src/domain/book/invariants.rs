use super::entity::{Book, BookStatus};
use crate::domain::{DomainError, DomainResult};

/// Validates all Book invariants
/// These are the absolute rules that must hold for a Book to be valid
pub fn validate_book(livro: &Book) -> DomainResult<()> {
    validate_titulo(&livro.titulo)?;
    validate_avaliacao(livro)?;
    validate_data_leitura(livro)?;
    Ok(())
}

/// Title cannot be empty
fn validate_titulo(titulo: &str) -> DomainResult<()> {
    if titulo.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Rating, when present, must sit inside the 0-5 band
fn validate_avaliacao(livro: &Book) -> DomainResult<()> {
    if let Some(nota) = livro.avaliacao {
        if !(0.0..=5.0).contains(&nota) {
            return Err(DomainError::RatingOutOfRange { avaliacao: nota });
        }
    }
    Ok(())
}

/// A read date only makes sense on a book that was actually read
fn validate_data_leitura(livro: &Book) -> DomainResult<()> {
    if livro.data_leitura.is_some() && livro.status != BookStatus::Lido {
        return Err(DomainError::InvariantViolation(format!(
            "Book '{}' has a read date but status '{}'",
            livro.titulo, livro.status
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Book domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Title cannot be empty
/// 3. Rating, when present, is within [0, 5]
/// 4. A read date requires status Lido
/// 5. Score is derived data: recomputed, never authored
/// 6. A read book always scores 0, regardless of other fields
/// 7. Unknown status/priority labels are preserved, never rejected
/// 8. Created timestamp never changes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Prioridade;
    use chrono::NaiveDate;

    fn livro() -> Book {
        Book::new(
            "O Poder do Hábito".to_string(),
            "Charles Duhigg".to_string(),
            "Desenvolvimento Pessoal".to_string(),
            "Produtividade".to_string(),
        )
    }

    #[test]
    fn test_valid_book() {
        assert!(validate_book(&livro()).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut b = livro();
        b.titulo = "   ".to_string();
        assert!(validate_book(&b).is_err());
    }

    #[test]
    fn test_rating_above_band_fails() {
        let mut b = livro();
        b.avaliacao = Some(5.5);
        assert!(matches!(
            validate_book(&b),
            Err(DomainError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_read_date_requires_lido() {
        let mut b = livro();
        b.data_leitura = NaiveDate::from_ymd_opt(2024, 3, 10);
        assert!(validate_book(&b).is_err());

        b.marcar_lido(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(validate_book(&b).is_ok());
    }

    #[test]
    fn test_unknown_labels_are_preserved() {
        let mut b = livro();
        b.status = BookStatus::from("Emprestado");
        b.prioridade = Prioridade::from("Urgentíssima");
        assert_eq!(b.status, BookStatus::Outro("Emprestado".to_string()));
        assert_eq!(b.prioridade, Prioridade::Outra("Urgentíssima".to_string()));
        assert!(validate_book(&b).is_ok());
    }
}
