//! Item validation error types.

/// Errors that can occur while validating item input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemError {
    /// Item text was empty after trimming
    #[error("Item text must not be empty")]
    EmptyText,

    /// Measurement unit is not one of the supported kinds
    #[error("Unknown measurement unit: {0}")]
    UnknownUnit(String),

    /// Quantity was NaN or infinite
    #[error("Quantity must be a finite number, got {0}")]
    NonFiniteQuantity(f64),

    /// Mass quantity was below zero
    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        let error = ItemError::EmptyText;
        assert!(error.to_string().contains("must not be empty"));

        let error = ItemError::UnknownUnit("litre".to_string());
        assert!(error.to_string().contains("Unknown measurement unit"));
        assert!(error.to_string().contains("litre"));

        let error = ItemError::NonFiniteQuantity(f64::INFINITY);
        assert!(error.to_string().contains("finite"));

        let error = ItemError::NegativeQuantity(-2.5);
        assert!(error.to_string().contains("-2.5"));
    }
}
