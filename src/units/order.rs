//! Rational exponents for derived-unit dimensions.
//!
//! Grounded in `original_source/include/OpenSpaceToolkit/Physics/Unit/Derived.hpp`'s
//! `Derived::Order`: a reduced rational (numerator, denominator) used as the
//! exponent of one base dimension inside a [`crate::units::Derived`] unit.

use std::fmt;

use crate::error::{PhysicsError, Result};

/// A rational exponent, e.g. the `-1` in `meter^-1` or the `1/2` in `m^(1/2)`.
///
/// Construction does not reduce the fraction (the original does not
/// either — see `spec.md` §8 "Quantified invariants"): `Order::new(2, 4)`
/// and `Order::new(1, 2)` compare unequal even though they're numerically
/// the same value.
#[derive(Debug, Clone, Copy)]
pub struct Order {
    numerator: i16,
    denominator: i16,
}

impl Order {
    /// Construct an integer order (denominator 1).
    pub fn integer(numerator: i16) -> Self {
        Order {
            numerator,
            denominator: 1,
        }
    }

    /// Construct a fractional order.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidInput`] if `denominator` is zero.
    pub fn new(numerator: i16, denominator: i16) -> Result<Self> {
        if denominator == 0 {
            return Err(PhysicsError::InvalidInput(
                "Order denominator must not be zero".to_string(),
            ));
        }
        Ok(Order {
            numerator,
            denominator,
        })
    }

    /// The zero order (dimension absent).
    pub fn zero() -> Self {
        Order::integer(0)
    }

    pub fn numerator(&self) -> i16 {
        self.numerator
    }

    pub fn denominator(&self) -> i16 {
        self.denominator
    }

    /// The order as a real number (`numerator / denominator`).
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_unity(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl PartialEq for Order {
    /// Literal (numerator, denominator) comparison — not reduced.
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else if self.numerator == 1 {
            write!(f, "-{}", self.denominator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_invalid() {
        assert!(matches!(
            Order::new(1, 0),
            Err(PhysicsError::InvalidInput(_))
        ));
    }

    #[test]
    fn literal_equality_is_not_reduced() {
        let a = Order::new(2, 4).unwrap();
        let b = Order::new(1, 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn display_matches_spec_forms() {
        assert_eq!(Order::integer(3).to_string(), "3");
        assert_eq!(Order::new(1, 2).unwrap().to_string(), "-2");
        assert_eq!(Order::new(2, 3).unwrap().to_string(), "2/3");
    }

    #[test]
    fn is_zero_and_unity() {
        assert!(Order::zero().is_zero());
        assert!(Order::integer(1).is_unity());
        assert!(!Order::integer(2).is_unity());
    }
}
