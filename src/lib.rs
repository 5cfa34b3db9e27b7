//! Dimension-checked physical quantities for setting up FDTD simulations.
//!
//! Values are "typed" by multiplying them with a unit, and turned back into
//! plain numbers by dividing by a unit of the same dimension:
//!
//! ```
//! use fdtd_units::prelude::*;
//! use fdtd_units::si;
//!
//! let height = si::meter().multiply(1.6).unwrap();
//! let feet = height.divide(si::foot()).unwrap();
//! assert!((feet.as_scalar().unwrap() - 5.246).abs() < 1e-3);
//! ```
//!
//! Mismatched dimensions are reported as errors instead of silently producing
//! wrong physics. To get started, refer to the `demos` directory.

mod options;
mod quantity;
mod unit;

pub mod constants;
pub mod dimension;
pub mod parse;
pub mod prelude;
pub mod si;

pub use dimension::{DimensionVector, UnitType};
pub use options::{ArithmeticOptions, ZeroPolicy};
pub use parse::{parse_dimensions, ParseError};
pub use quantity::{Operand, Quantity};
pub use unit::{new_unit, Unit};

/// The arithmetic operation that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Divide,
    Add,
    Subtract,
    Power,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Multiply => "multiplied",
            Operation::Divide => "divided",
            Operation::Add => "added",
            Operation::Subtract => "subtracted",
            Operation::Power => "exponentiated",
        };
        f.write_str(name)
    }
}

/// Represents an error in dimensioned arithmetic.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("({lhs}) and ({rhs}) cannot be {operation}: units don't match")]
    DimensionMismatch {
        operation: Operation,
        lhs: String,
        rhs: String,
    },
    #[error("Can only raise units to non-negative integral powers (got {0})")]
    InvalidExponent(f64),
    #[error("Division of a unit by zero")]
    DivideByZero,
    #[error("Exponent of {0} does not fit in 32 bits")]
    ExponentOverflow(UnitType),
    #[error("Element-wise operation on incompatible shapes \
        ( left shape: {lhs:?}, right shape: {rhs:?} )")]
    ShapeMismatch {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Whether this error was raised by an arithmetic operation, as opposed
    /// to parsing.
    pub fn is_arithmetic(&self) -> bool {
        !matches!(self, Error::Parse(_))
    }
}

/// Dimension-propagating arithmetic.
///
/// Every operation returns a [`Quantity`], since results may collapse to a
/// bare number when all dimensions cancel. The `_with` methods take explicit
/// [`ArithmeticOptions`]; the others use the default (legacy) options.
pub trait Arithmetic {
    fn multiply_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error>;

    fn divide_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error>;

    fn add_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error>;

    fn subtract_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error>;

    fn power_with(&self, n: i32, options: ArithmeticOptions) -> Result<Quantity, Error>;

    #[inline]
    fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity, Error> {
        self.multiply_with(rhs, ArithmeticOptions::default())
    }

    #[inline]
    fn divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity, Error> {
        self.divide_with(rhs, ArithmeticOptions::default())
    }

    #[inline]
    fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity, Error> {
        self.add_with(rhs, ArithmeticOptions::default())
    }

    #[inline]
    fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity, Error> {
        self.subtract_with(rhs, ArithmeticOptions::default())
    }

    /// Raises to an integral power by repeated multiplication.
    ///
    /// `power(0)` yields the bare number 1 rather than returning the operand
    /// unchanged, and negative exponents fail with
    /// [`Error::InvalidExponent`].
    #[inline]
    fn power(&self, n: i32) -> Result<Quantity, Error> {
        self.power_with(n, ArithmeticOptions::default())
    }
}
