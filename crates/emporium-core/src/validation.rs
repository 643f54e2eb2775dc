//! # Validation Module
//!
//! Input validation rules for everything the operator types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/console)                                │
//! │  ├── Reads one line                                                    │
//! │  └── Re-prompts until THIS MODULE accepts it                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Positive whole numbers (prices, specs)                            │
//! │  ├── Menu choices bounded to [0|1, max]                                │
//! │  └── Non-empty commodity names                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / Cart                                               │
//! │  └── Range checks on flattened indices (IndexOutOfRange)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use emporium_core::validation::{parse_menu_choice, parse_positive_number};
//!
//! assert_eq!(parse_positive_number("price", "120").unwrap(), 120);
//! assert!(parse_positive_number("price", "0").is_err());
//!
//! assert_eq!(parse_menu_choice("2", 3, false).unwrap(), 2);
//! assert!(parse_menu_choice("4", 3, false).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a strictly positive whole number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Must contain only ASCII digits (no sign, no decimal point)
/// - Must be greater than zero
/// - Must fit in a `u32`
pub fn parse_positive_number(field: &str, input: &str) -> ValidationResult<u32> {
    let digits = digits_only(field, input)?;

    let value: u32 = digits.parse().map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: u32::MAX as usize,
    })?;

    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Returns true when `input` would be accepted by [`parse_positive_number`].
pub fn is_valid_number(input: &str) -> bool {
    parse_positive_number("value", input).is_ok()
}

/// Parses a numbered menu selection.
///
/// ## Rules
/// - Range is `[0, max]`, or `[1, max]` when `allow_zero` is false
/// - Zero conventionally means "back" / "regret" / "exit"
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shopping: catalog has 3 entries                                        │
/// │                                                                         │
/// │  "Or input 0 to exit shopping"                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_menu_choice(input, 3, true) ← THIS FUNCTION                     │
/// │       │                                                                 │
/// │       ├── "x"  → NotANumber  → re-prompt                                │
/// │       ├── "4"  → OutOfRange  → re-prompt                                │
/// │       ├── "0"  → Ok(0)       → leave shopping                           │
/// │       └── "2"  → Ok(2)       → purchase flattened index 1               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_menu_choice(input: &str, max: usize, allow_zero: bool) -> ValidationResult<usize> {
    let digits = digits_only("choice", input)?;
    let min = if allow_zero { 0 } else { 1 };

    let out_of_range = || ValidationError::OutOfRange {
        field: "choice".to_string(),
        min,
        max,
    };

    let choice: usize = digits.parse().map_err(|_| out_of_range())?;
    if choice < min || choice > max {
        return Err(out_of_range());
    }

    Ok(choice)
}

fn digits_only<'a>(field: &str, input: &'a str) -> ValidationResult<&'a str> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
            input: trimmed.to_string(),
        });
    }

    Ok(trimmed)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a commodity name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// The name is the identity key of a commodity, so stray whitespace would
/// otherwise make "Pixel" and "Pixel " two different products.
pub fn validate_commodity_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
