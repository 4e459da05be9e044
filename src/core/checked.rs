//! Overflow-checked `usize` arithmetic.
//!
//! Every operation either returns the exact result or an
//! [`ArithmeticError`]; nothing wraps, saturates, or truncates. Sizes in
//! this crate come from untrusted files, so any sum or product of sizes
//! that could plausibly leave the `usize` range goes through here.
//!
//! # Examples
//!
//! ```
//! use lev_bounds::core::checked;
//!
//! assert_eq!(checked::add(2, 3).unwrap(), 5);
//! assert!(checked::add(usize::MAX, 1).is_err());
//! assert_eq!(checked::parse_size("000").unwrap(), 0);
//! ```

use crate::error::{ArithmeticError, ParseSizeError};

/// Checked addition.
pub const fn add(lhs: usize, rhs: usize) -> Result<usize, ArithmeticError> {
    match lhs.checked_add(rhs) {
        Some(value) => Ok(value),
        None => Err(ArithmeticError::Overflow {
            operation: "add",
            lhs,
            rhs,
        }),
    }
}

/// Checked subtraction; fails when `lhs < rhs`.
pub const fn sub(lhs: usize, rhs: usize) -> Result<usize, ArithmeticError> {
    match lhs.checked_sub(rhs) {
        Some(value) => Ok(value),
        None => Err(ArithmeticError::Overflow {
            operation: "sub",
            lhs,
            rhs,
        }),
    }
}

/// Checked multiplication.
pub const fn mul(lhs: usize, rhs: usize) -> Result<usize, ArithmeticError> {
    match lhs.checked_mul(rhs) {
        Some(value) => Ok(value),
        None => Err(ArithmeticError::Overflow {
            operation: "mul",
            lhs,
            rhs,
        }),
    }
}

/// Checked division; fails on a zero divisor.
pub const fn div(lhs: usize, rhs: usize) -> Result<usize, ArithmeticError> {
    match lhs.checked_div(rhs) {
        Some(value) => Ok(value),
        None => Err(ArithmeticError::DivisionByZero {
            operation: "div",
            dividend: lhs,
        }),
    }
}

/// Checked remainder; fails on a zero divisor.
pub const fn rem(lhs: usize, rhs: usize) -> Result<usize, ArithmeticError> {
    match lhs.checked_rem(rhs) {
        Some(value) => Ok(value),
        None => Err(ArithmeticError::DivisionByZero {
            operation: "rem",
            dividend: lhs,
        }),
    }
}

/// Increments `value` in place. On failure `value` is left unchanged.
pub const fn inc(value: &mut usize) -> Result<(), ArithmeticError> {
    match add(*value, 1) {
        Ok(next) => {
            *value = next;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Decrements `value` in place. On failure `value` is left unchanged.
pub const fn dec(value: &mut usize) -> Result<(), ArithmeticError> {
    match sub(*value, 1) {
        Ok(next) => {
            *value = next;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Parses a non-empty, unsigned decimal string into a `usize`.
///
/// Leading `+` or `-`, any non-digit character, and values above
/// `usize::MAX` are rejected. Leading zeros are allowed, and a string made
/// only of `'0'` is zero.
///
/// # Errors
///
/// Returns the [`ParseSizeError`] describing the first problem found.
pub fn parse_size(input: &str) -> Result<usize, ParseSizeError> {
    match input.as_bytes().first() {
        None => return Err(ParseSizeError::Empty),
        Some(b'+' | b'-') => return Err(ParseSizeError::Signed),
        Some(_) => {}
    }

    if let Some((offset, character)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(ParseSizeError::InvalidDigit { character, offset });
    }

    if input.bytes().all(|b| b == b'0') {
        return Ok(0);
    }

    input.bytes().try_fold(0usize, |acc, digit| {
        let shifted = mul(acc, 10).map_err(|_| ParseSizeError::OutOfRange)?;
        add(shifted, usize::from(digit - b'0')).map_err(|_| ParseSizeError::OutOfRange)
    })
}
