use std::fmt;
use std::ops::Neg;

use crate::quantity::try_map;
use crate::{
    Arithmetic, ArithmeticOptions, DimensionVector, Error, Operand, Operation, Quantity, UnitType,
};

/// A numeric value tagged with a dimension vector.
///
/// Units are immutable; every operation produces a new value. Two units are
/// equal when both their dimensions and their values match exactly, so a
/// meter and a foot compare unequal even though both measure length.
#[derive(Clone, Debug)]
pub struct Unit {
    value: f64,
    dimensions: DimensionVector,
    name: String,
    symbol: String,
}

/// Creates a unit with a name and symbol derived from `dimensions`.
#[inline]
pub fn new_unit(value: f64, dimensions: DimensionVector) -> Unit {
    Unit::new(value, dimensions)
}

impl Unit {
    #[inline]
    pub fn new(value: f64, dimensions: DimensionVector) -> Self {
        Self {
            value,
            name: dimensions.name(),
            symbol: dimensions.symbol(),
            dimensions,
        }
    }

    /// The SI base unit of a category, with a value of 1.
    #[inline]
    pub fn base(unit_type: UnitType) -> Self {
        Self::new(1.0, DimensionVector::base(unit_type))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn dimensions(&self) -> &DimensionVector {
        &self.dimensions
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Same dimensions, negated value.
    #[inline]
    pub fn negate(&self) -> Unit {
        self.with_value(-self.value)
    }

    /// Negated exponents, inverted value.
    ///
    /// A zero-valued unit has no reciprocal and fails with
    /// [`Error::DivideByZero`].
    pub fn reciprocal(&self) -> Result<Unit, Error> {
        if self.value == 0.0 {
            return Err(Error::DivideByZero);
        }
        Ok(Unit::new(self.value.recip(), self.dimensions.reciprocal()?))
    }

    /// Raises to a power given as a float, which must be integral.
    pub fn powf(&self, exponent: f64) -> Result<Quantity, Error> {
        if !exponent.is_finite()
            || exponent.fract() != 0.0
            || exponent < 0.0
            || exponent > i32::MAX as f64
        {
            return Err(Error::InvalidExponent(exponent));
        }
        self.power(exponent as i32)
    }

    /// The value of `self` expressed in multiples of `unit`.
    ///
    /// Fails unless `unit` has exactly the same dimensions.
    pub fn value_in<'a>(&self, unit: impl Into<Operand<'a>>) -> Result<f64, Error> {
        let unit = unit.into();
        match self.divide(unit.clone())? {
            Quantity::Scalar(value) => Ok(value),
            _ => Err(self.mismatch(Operation::Divide, unit.describe())),
        }
    }

    /// Applies this unit to every element of a numeric array.
    ///
    /// Zero elements still become units here; no dimension is discarded.
    pub fn scale_array<S, D>(&self, array: &ndarray::ArrayBase<S, D>) -> ndarray::Array<Unit, D>
    where
        S: ndarray::Data<Elem = f64>,
        D: ndarray::Dimension,
    {
        log::trace!("applying {} to array of shape {:?}", self.symbol, array.shape());
        array.map(|&x| self.with_value(self.value * x))
    }

    #[inline]
    pub(crate) fn with_value(&self, value: f64) -> Unit {
        Unit {
            value,
            dimensions: self.dimensions.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }

    pub(crate) fn mismatch(&self, operation: Operation, rhs: String) -> Error {
        Error::DimensionMismatch {
            operation,
            lhs: self.to_string(),
            rhs,
        }
    }

    fn scale(&self, factor: f64, options: ArithmeticOptions) -> Quantity {
        if factor == 0.0 && options.collapses_zero() {
            log::debug!("multiplication by zero erased dimensions [{}]", self.symbol);
            return Quantity::Scalar(0.0);
        }
        Quantity::Unit(self.with_value(self.value * factor))
    }

    fn combine(&self, other: &Unit) -> Result<Quantity, Error> {
        let dimensions = self.dimensions.merge(&other.dimensions)?;
        let value = self.value * other.value;

        // everything cancelled
        if dimensions.is_dimensionless() {
            return Ok(Quantity::Scalar(value));
        }

        Ok(Quantity::Unit(Unit::new(value, dimensions)))
    }

    fn apply_numbers(&self, numbers: ndarray::ArrayViewD<f64>) -> ndarray::ArrayD<Quantity> {
        log::trace!("applying {} to array of shape {:?}", self.symbol, numbers.shape());

        #[cfg(feature = "rayon")]
        {
            ndarray::Zip::from(&numbers)
                .par_map_collect(|&x| Quantity::Unit(self.with_value(self.value * x)))
        }
        #[cfg(not(feature = "rayon"))]
        {
            numbers.map(|&x| Quantity::Unit(self.with_value(self.value * x)))
        }
    }
}

impl Arithmetic for Unit {
    fn multiply_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        match rhs.into() {
            Operand::Scalar(factor) => Ok(self.scale(factor, options)),
            Operand::Unit(other) => self.combine(other),
            Operand::Numbers(numbers) => Ok(Quantity::Array(self.apply_numbers(numbers))),
            Operand::Quantities(elements) => {
                try_map(elements, |q| self.multiply_with(q, options)).map(Quantity::Array)
            }
            Operand::Unsupported(description) => {
                Err(self.mismatch(Operation::Multiply, description))
            }
        }
    }

    fn divide_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        match rhs.into() {
            Operand::Scalar(divisor) if divisor == 0.0 => Err(Error::DivideByZero),
            Operand::Scalar(divisor) => self.multiply_with(divisor.recip(), options),
            Operand::Unit(other) => self.combine(&other.reciprocal()?),
            other => Err(self.mismatch(Operation::Divide, other.describe())),
        }
    }

    fn add_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        match rhs.into() {
            Operand::Unit(other) if other.dimensions == self.dimensions => {
                let sum = self.value + other.value;
                if sum == 0.0 && options.collapses_zero() {
                    log::debug!("sum to zero erased dimensions [{}]", self.symbol);
                    return Ok(Quantity::Scalar(0.0));
                }
                Ok(Quantity::Unit(self.with_value(sum)))
            }
            other => Err(self.mismatch(Operation::Add, other.describe())),
        }
    }

    fn subtract_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        match rhs.into() {
            Operand::Unit(other) if other.dimensions == self.dimensions => {
                self.add_with(&other.negate(), options)
            }
            other => Err(self.mismatch(Operation::Subtract, other.describe())),
        }
    }

    fn power_with(&self, n: i32, options: ArithmeticOptions) -> Result<Quantity, Error> {
        if n < 0 {
            return Err(Error::InvalidExponent(n as f64));
        }
        if n == 0 {
            return Ok(Quantity::Scalar(1.0));
        }

        let mut result = Quantity::Unit(self.clone());
        for _ in 1..n {
            result = result.multiply_with(self, options)?;
        }

        Ok(result)
    }
}

impl PartialEq for Unit {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.value == other.value
    }
}

/// Formats as `"<value> * <symbol>"`.
///
/// The value uses the shortest `f64` form that round-trips, so integral
/// values carry no trailing `.0`: newton prints as `1 * kg * m * s^-2`,
/// not `1.0 * kg * m * s^-2`.
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.value, self.symbol)
    }
}

impl Neg for Unit {
    type Output = Unit;

    #[inline]
    fn neg(self) -> Unit {
        self.negate()
    }
}

impl Neg for &Unit {
    type Output = Unit;

    #[inline]
    fn neg(self) -> Unit {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::base(UnitType::Length)
    }

    fn second() -> Unit {
        Unit::base(UnitType::Time)
    }

    #[test]
    fn multiply_by_scalar_keeps_dimensions() {
        let q = meter().multiply(2.5).unwrap();
        let unit = q.as_unit().unwrap();
        assert_eq!(unit.value(), 2.5);
        assert_eq!(unit.dimensions(), meter().dimensions());
        assert_eq!(unit.symbol(), "m");
    }

    #[test]
    fn multiply_by_zero_collapses_by_default() {
        assert_eq!(meter().multiply(0).unwrap(), Quantity::Scalar(0.0));
        assert_eq!(meter().multiply(0.0).unwrap(), 0.0);
    }

    #[test]
    fn multiply_by_zero_preserves_under_strict_options() {
        let q = meter().multiply_with(0.0, ArithmeticOptions::strict()).unwrap();
        assert_eq!(q, new_unit(0.0, DimensionVector::base(UnitType::Length)));
    }

    #[test]
    fn sum_to_zero_respects_policy() {
        let m = meter();
        assert_eq!(m.subtract(&m).unwrap(), 0.0);

        let strict = m.subtract_with(&m, ArithmeticOptions::strict()).unwrap();
        let unit = strict.into_unit().unwrap();
        assert_eq!(unit.value(), 0.0);
        assert_eq!(unit.dimensions(), m.dimensions());
    }

    #[test]
    fn strict_options_do_not_prevent_cancellation() {
        let q = meter()
            .divide_with(&meter(), ArithmeticOptions::strict())
            .unwrap();
        assert_eq!(q, 1.0);
    }

    #[test]
    fn unsupported_operands_are_rejected() {
        let err = meter().multiply("hey").unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { operation: Operation::Multiply, .. }));
        assert!(err.is_arithmetic());

        assert!(meter().add(2).is_err());
        assert!(second().subtract(1).is_err());
    }

    #[test]
    fn dividing_by_zero_fails() {
        assert!(matches!(meter().divide(0).unwrap_err(), Error::DivideByZero));
        assert!(matches!(meter().divide(0.0).unwrap_err(), Error::DivideByZero));
    }

    #[test]
    fn dividing_by_zero_valued_unit_fails() {
        let zero = new_unit(0.0, DimensionVector::base(UnitType::Length));
        assert!(matches!(meter().divide(&zero).unwrap_err(), Error::DivideByZero));
        assert!(matches!(zero.reciprocal().unwrap_err(), Error::DivideByZero));

        let strict = ArithmeticOptions::strict();
        let none = meter().multiply_with(0, strict).unwrap();
        assert!(matches!(second().divide_with(&none, strict).unwrap_err(), Error::DivideByZero));

        let parsed = crate::parse::parse_dimensions_with("0 meter", strict).unwrap();
        assert!(matches!(meter().divide(&parsed).unwrap_err(), Error::DivideByZero));
    }

    #[test]
    fn exponent_overflow_is_reported() {
        let huge = DimensionVector::from_pairs([(i32::MAX, UnitType::Length)]).unwrap();
        let unit = new_unit(1.0, huge);
        assert!(matches!(
            unit.multiply(&meter()).unwrap_err(),
            Error::ExponentOverflow(UnitType::Length)
        ));
        assert!(meter().divide(&unit).is_ok());

        let tiny = DimensionVector::from_pairs([(i32::MIN, UnitType::Time)]).unwrap();
        assert!(matches!(
            second().divide(&new_unit(1.0, tiny)).unwrap_err(),
            Error::ExponentOverflow(UnitType::Time)
        ));
    }

    #[test]
    fn dividing_by_array_is_unsupported() {
        let numbers = ndarray::arr1(&[1.0, 2.0]);
        assert!(matches!(
            meter().divide(&numbers).unwrap_err(),
            Error::DimensionMismatch { operation: Operation::Divide, .. }
        ));
    }

    #[test]
    fn reciprocal_inverts_value_and_exponents() {
        let r = meter().multiply(4.0).unwrap().into_unit().unwrap().reciprocal().unwrap();
        assert_eq!(r.value(), 0.25);
        assert_eq!(r.dimensions().exponent(UnitType::Length), -1);
        assert_eq!(r.symbol(), "m^-1");
    }

    #[test]
    fn power_edge_cases() {
        assert_eq!(meter().power(1).unwrap(), meter());
        assert_eq!(meter().power(0).unwrap(), 1.0);
        assert!(matches!(meter().power(-1).unwrap_err(), Error::InvalidExponent(_)));
        assert!(matches!(meter().powf(2.2).unwrap_err(), Error::InvalidExponent(_)));
        assert!(matches!(meter().powf(f64::NAN).unwrap_err(), Error::InvalidExponent(_)));
        assert!(matches!(
            meter().powf(-1e12).unwrap_err(),
            Error::InvalidExponent(e) if e == -1e12
        ));
        assert!(matches!(meter().powf(-2.0).unwrap_err(), Error::InvalidExponent(e) if e == -2.0));

        let cubed = meter().powf(3.0).unwrap().into_unit().unwrap();
        assert_eq!(cubed.dimensions().exponent(UnitType::Length), 3);
    }

    #[test]
    fn value_in_requires_matching_dimensions() {
        let span = meter().multiply(3.0).unwrap().into_unit().unwrap();
        assert_eq!(span.value_in(&meter()).unwrap(), 3.0);
        assert!(span.value_in(&second()).is_err());
    }

    #[test]
    fn negation() {
        let m = meter();
        assert_eq!((-&m).value(), -1.0);
        assert_eq!((-m.clone()).dimensions(), m.dimensions());
        assert_eq!(m.negate(), -m);
    }

    #[test]
    fn scale_array_keeps_zero_elements_typed() {
        let numbers = ndarray::arr1(&[0.0, 2.0]);
        let units = meter().scale_array(&numbers);
        assert_eq!(units[0], new_unit(0.0, DimensionVector::base(UnitType::Length)));
        assert_eq!(units[1].value(), 2.0);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(meter().to_string(), "1 * m");
        assert_eq!(Unit::new(2.5, DimensionVector::new()).to_string(), "2.5 * ");
        assert_eq!(meter().name(), "meter");

        let newton = new_unit(
            1.0,
            DimensionVector::from_pairs([
                (1, UnitType::Mass),
                (1, UnitType::Length),
                (-2, UnitType::Time),
            ])
            .unwrap(),
        );
        assert_eq!(newton.to_string(), "1 * kg * m * s^-2");
    }
}
