use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReceiptError>;

/// The specific validation rule a submitted receipt failed.
///
/// Checks run in a fixed order and the first failure is reported; the HTTP
/// boundary collapses all of these into a uniform "invalid receipt" response.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid retailer format")]
    InvalidRetailer,
    #[error("invalid date format")]
    InvalidDate,
    #[error("invalid time format")]
    InvalidTime,
    #[error("invalid total format")]
    InvalidTotal,
    #[error("at least one item required")]
    NoItems,
    #[error("invalid item description format")]
    InvalidItemDescription,
    #[error("invalid item price format")]
    InvalidItemPrice,
}

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("receipt validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("no receipt found for that ID")]
    NotFound,
    #[error("malformed receipt payload: {0}")]
    MalformedInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_into_receipt_error() {
        let err: ReceiptError = ValidationError::InvalidRetailer.into();
        assert!(matches!(
            err,
            ReceiptError::Validation(ValidationError::InvalidRetailer)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::NoItems.to_string(),
            "at least one item required"
        );
        assert_eq!(
            ReceiptError::NotFound.to_string(),
            "no receipt found for that ID"
        );
    }
}
