//! # Error Types
//!
//! Domain-specific error types for emporium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  emporium-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog, cart and checkout failures            │
//! │  ├── ValidationError  - Console input that breaks a rule               │
//! │  └── RecordError      - A flat text record that cannot be decoded      │
//! │                                                                         │
//! │  emporium-store errors (separate crate)                                │
//! │  └── StoreError       - File and journal failures                      │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── AppError         - What the controller loop sees                  │
//! │                                                                         │
//! │  Flow: ValidationError → re-prompt (never escapes the console)         │
//! │        RecordError → partition load stops, "no more records"           │
//! │        CoreError → Notice shown to the operator                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::catalog::CommodityId;
use crate::commodity::Variant;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A flattened position does not address any entry.
    ///
    /// ## When This Occurs
    /// - Deleting catalog entry #N when the catalog holds fewer than N entries
    /// - Removing cart line #N from a shorter cart
    ///
    /// The console bounds every prompt by the collection size, so seeing
    /// this error means a caller skipped that check.
    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cart handle no longer resolves to a catalog entry.
    #[error("Commodity {0} is no longer in the catalog")]
    CommodityNotFound(CommodityId),

    /// A cart line would exceed the per-line quantity cap.
    #[error("Quantity of {name} cannot exceed {max}")]
    QuantityTooLarge { name: String, max: u32 },

    /// Checkout was requested with nothing in the cart.
    #[error("Shopping cart is empty, nothing can checkout")]
    EmptyCart,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These never leave the console layer: every one of them turns into a
/// re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input contains something other than ASCII digits.
    #[error("{field} must be a whole number, got '{input}'")]
    NotANumber { field: String, input: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Numeric value is outside the accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: usize,
        max: usize,
    },
}

// =============================================================================
// Record Error
// =============================================================================

/// Failures while decoding a flat text record.
///
/// ## Loader Contract
/// The storage layer treats every variant as "no more records" for the
/// partition being read. They are still typed so the loader can log
/// what stopped it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The data ended part-way through a record.
    #[error("{variant} record ended before field '{field}'")]
    Truncated { variant: Variant, field: &'static str },

    /// A numeric field did not parse.
    #[error("{variant} record has invalid {field}: '{value}'")]
    InvalidNumber {
        variant: Variant,
        field: &'static str,
        value: String,
    },

    /// The laptop RGB flag was neither `1` nor `2`.
    #[error("{variant} record has invalid {field} flag: '{value}'")]
    InvalidFlag {
        variant: Variant,
        field: &'static str,
        value: String,
    },

    /// The name line was blank.
    #[error("{variant} record has an empty name")]
    EmptyName { variant: Variant },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "Index 4 is out of range for 3 entries");

        let err = CoreError::QuantityTooLarge {
            name: "Pixel".to_string(),
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity of Pixel cannot exceed 999");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotANumber {
            field: "price".to_string(),
            input: "12a".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a whole number, got '12a'");

        let err = ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 0,
            max: 3,
        };
        assert_eq!(err.to_string(), "choice must be between 0 and 3");
    }

    #[test]
    fn test_record_error_names_the_variant() {
        let err = RecordError::Truncated {
            variant: Variant::Laptop,
            field: "gpu",
        };
        assert_eq!(err.to_string(), "Laptop record ended before field 'gpu'");
    }
}
