//! Includes commonly used library components.

pub use crate::{
    Arithmetic,
    ArithmeticOptions,
    DimensionVector,
    Error,
    Quantity,
    Unit,
    UnitType,
    ZeroPolicy,
};
pub use crate::parse::{parse_dimensions, parse_dimensions_with};
