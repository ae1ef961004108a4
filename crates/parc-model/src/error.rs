use chrono::NaiveDate;
use thiserror::Error;

use crate::ids::RecordId;

#[derive(Debug, Error)]
pub enum ParcError {
    #[error("champ obligatoire manquant: {field}")]
    MissingField { field: &'static str },
    #[error("{label}: {end} est antérieure à {start}")]
    InvalidDateOrder {
        label: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("date hors limites")]
    DateOutOfRange,
    #[error("identifiant déjà présent: {0}")]
    DuplicateId(RecordId),
    #[error("colonne de tri inconnue: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ParcError>;

/// Unwrap a draft field or reject the draft, naming the missing field.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ParcError::MissingField { field })
}
