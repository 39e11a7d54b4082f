//! Document - identity document of a profile holder
//!
//! Each document type fixes the exact length of its number, except `Otro`
//! which accepts anything non-blank.

use crate::error::{DomainError, DomainResult};

/// Kinds of identity documents, with their wire codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentType {
    Otro,
    Dni,
    CarnetExtranjeria,
    Ruc,
    Pasaporte,
    Ptp,
}

impl DocumentType {
    pub const DNI_LENGTH: usize = 8;
    pub const CARNET_EXTRANJERIA_LENGTH: usize = 12;
    pub const RUC_LENGTH: usize = 11;
    pub const PASAPORTE_LENGTH: usize = 10;
    pub const PTP_LENGTH: usize = 12;

    pub const ALL: [DocumentType; 6] = [
        DocumentType::Otro,
        DocumentType::Dni,
        DocumentType::CarnetExtranjeria,
        DocumentType::Ruc,
        DocumentType::Pasaporte,
        DocumentType::Ptp,
    ];

    /// Numeric code used on the wire and in storage
    pub fn code(&self) -> i32 {
        match self {
            DocumentType::Otro => 0,
            DocumentType::Dni => 1,
            DocumentType::CarnetExtranjeria => 4,
            DocumentType::Ruc => 6,
            DocumentType::Pasaporte => 7,
            DocumentType::Ptp => 15,
        }
    }

    pub fn from_code(code: i32) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| {
                DomainError::validation(format!("Invalid value for DocumentType: {}", code))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Otro => "OTRO",
            DocumentType::Dni => "DNI",
            DocumentType::CarnetExtranjeria => "CARNET_EXTRANJERIA",
            DocumentType::Ruc => "RUC",
            DocumentType::Pasaporte => "PASAPORTE",
            DocumentType::Ptp => "PTP",
        }
    }

    /// Required number length, `None` when unchecked
    pub fn expected_length(&self) -> Option<usize> {
        match self {
            DocumentType::Otro => None,
            DocumentType::Dni => Some(Self::DNI_LENGTH),
            DocumentType::CarnetExtranjeria => Some(Self::CARNET_EXTRANJERIA_LENGTH),
            DocumentType::Ruc => Some(Self::RUC_LENGTH),
            DocumentType::Pasaporte => Some(Self::PASAPORTE_LENGTH),
            DocumentType::Ptp => Some(Self::PTP_LENGTH),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocumentType::Otro => "Otro",
            DocumentType::Dni => "DNI",
            DocumentType::CarnetExtranjeria => "Carnet Extranjero",
            DocumentType::Ruc => "RUC",
            DocumentType::Pasaporte => "Pasaporte",
            DocumentType::Ptp => "PTP",
        }
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: a typed document number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    document_type: DocumentType,
    number: String,
}

impl Document {
    pub fn new(document_type: DocumentType, number: impl Into<String>) -> DomainResult<Self> {
        let number = number.into();

        if number.trim().is_empty() {
            return Err(DomainError::validation(
                "Document number cannot be null or blank",
            ));
        }

        if let Some(expected) = document_type.expected_length() {
            if number.chars().count() != expected {
                return Err(DomainError::validation(format!(
                    "{} must have exactly {} digits",
                    document_type.label(),
                    expected
                )));
            }
        }

        Ok(Self {
            document_type,
            number,
        })
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// "TYPE: number"
    pub fn full_document(&self) -> String {
        format!("{}: {}", self.document_type, self.number)
    }
}

impl core::fmt::Display for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.document_type, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dni_requires_eight_characters() {
        assert!(Document::new(DocumentType::Dni, "12345678").is_ok());

        for bad in ["1234567", "123456789", "1"] {
            let err = Document::new(DocumentType::Dni, bad).unwrap_err();
            assert_eq!(
                err,
                DomainError::Validation("DNI must have exactly 8 digits".to_string())
            );
        }
    }

    #[test]
    fn test_length_per_document_type() {
        assert!(Document::new(DocumentType::CarnetExtranjeria, "123456789012").is_ok());
        assert!(Document::new(DocumentType::Ruc, "20123456789").is_ok());
        assert!(Document::new(DocumentType::Pasaporte, "AB12345678").is_ok());
        assert!(Document::new(DocumentType::Ptp, "PTP123456789").is_ok());

        assert!(Document::new(DocumentType::Ruc, "2012345678").is_err());
        assert!(Document::new(DocumentType::Pasaporte, "AB1234567").is_err());
        assert!(Document::new(DocumentType::Ptp, "PTP12345678").is_err());
    }

    #[test]
    fn test_otro_accepts_any_length() {
        assert!(Document::new(DocumentType::Otro, "X").is_ok());
        assert!(Document::new(DocumentType::Otro, "a-very-long-reference").is_ok());
    }

    #[test]
    fn test_blank_number_rejected() {
        assert!(Document::new(DocumentType::Otro, "  ").is_err());
    }

    #[test]
    fn test_document_type_codes() {
        for t in DocumentType::ALL {
            assert_eq!(DocumentType::from_code(t.code()).unwrap(), t);
        }
        assert_eq!(DocumentType::from_code(15).unwrap(), DocumentType::Ptp);
        assert!(DocumentType::from_code(2).is_err());
    }

    #[test]
    fn test_full_document() {
        let doc = Document::new(DocumentType::Dni, "12345678").unwrap();
        assert_eq!(doc.full_document(), "DNI: 12345678");
    }
}
