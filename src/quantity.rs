use std::fmt;

use crate::{Arithmetic, ArithmeticOptions, Error, Operation, Unit};

/// The right-hand side of an arithmetic operation.
///
/// Anything that can take part in dimensioned arithmetic converts into one
/// of these variants; operations match on them exhaustively.
#[derive(Clone, Debug)]
pub enum Operand<'a> {
    Scalar(f64),
    Unit(&'a Unit),
    /// An array of plain numbers.
    Numbers(ndarray::ArrayViewD<'a, f64>),
    /// An array whose elements are already quantities.
    Quantities(ndarray::ArrayViewD<'a, Quantity>),
    /// Any other kind of value, e.g. a string.
    Unsupported(String),
}

impl Operand<'_> {
    /// Human readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Operand::Scalar(value) => format!("number {}", value),
            Operand::Unit(unit) => unit.to_string(),
            Operand::Numbers(numbers) => format!("numeric array of shape {:?}", numbers.shape()),
            Operand::Quantities(elements) => {
                format!("quantity array of shape {:?}", elements.shape())
            }
            Operand::Unsupported(description) => description.clone(),
        }
    }
}

impl From<f64> for Operand<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand<'_> {
    #[inline]
    fn from(value: i32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl<'a> From<&'a Unit> for Operand<'a> {
    #[inline]
    fn from(unit: &'a Unit) -> Self {
        Operand::Unit(unit)
    }
}

impl<'a> From<&'a Quantity> for Operand<'a> {
    #[inline]
    fn from(quantity: &'a Quantity) -> Self {
        match quantity {
            Quantity::Scalar(value) => Operand::Scalar(*value),
            Quantity::Unit(unit) => Operand::Unit(unit),
            Quantity::Array(elements) => Operand::Quantities(elements.view()),
        }
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Operand::Unsupported(format!("string {:?}", text))
    }
}

impl<'a, D: ndarray::Dimension> From<&'a ndarray::Array<f64, D>> for Operand<'a> {
    #[inline]
    fn from(numbers: &'a ndarray::Array<f64, D>) -> Self {
        Operand::Numbers(numbers.view().into_dyn())
    }
}

impl<'a, D: ndarray::Dimension> From<ndarray::ArrayView<'a, f64, D>> for Operand<'a> {
    #[inline]
    fn from(numbers: ndarray::ArrayView<'a, f64, D>) -> Self {
        Operand::Numbers(numbers.into_dyn())
    }
}

impl<'a, D: ndarray::Dimension> From<&'a ndarray::Array<Quantity, D>> for Operand<'a> {
    #[inline]
    fn from(elements: &'a ndarray::Array<Quantity, D>) -> Self {
        Operand::Quantities(elements.view().into_dyn())
    }
}

/// The result of dimensioned arithmetic.
///
/// Dimensions that cancel completely leave a bare [`Quantity::Scalar`];
/// operations involving arrays produce a [`Quantity::Array`].
#[derive(Clone, Debug, PartialEq)]
pub enum Quantity {
    Scalar(f64),
    Unit(Unit),
    Array(ndarray::ArrayD<Quantity>),
}

impl Quantity {
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Quantity::Scalar(_))
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Quantity::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Quantity::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    #[inline]
    pub fn into_unit(self) -> Option<Unit> {
        match self {
            Quantity::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    #[inline]
    pub fn into_array(self) -> Option<ndarray::ArrayD<Quantity>> {
        match self {
            Quantity::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Divides by `unit` and returns the bare number left over.
    ///
    /// Fails unless the dimensions cancel completely.
    pub fn value_in<'a>(&self, unit: impl Into<Operand<'a>>) -> Result<f64, Error> {
        let unit = unit.into();
        match self.divide(unit.clone())? {
            Quantity::Scalar(value) => Ok(value),
            _ => Err(self.mismatch(Operation::Divide, &unit)),
        }
    }

    fn mismatch(&self, operation: Operation, rhs: &Operand<'_>) -> Error {
        Error::DimensionMismatch {
            operation,
            lhs: self.to_string(),
            rhs: rhs.describe(),
        }
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Quantity::Scalar(value)
    }
}

impl From<Unit> for Quantity {
    #[inline]
    fn from(unit: Unit) -> Self {
        Quantity::Unit(unit)
    }
}

impl PartialEq<f64> for Quantity {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Quantity::Scalar(value) if value == other)
    }
}

impl PartialEq<Unit> for Quantity {
    #[inline]
    fn eq(&self, other: &Unit) -> bool {
        matches!(self, Quantity::Unit(unit) if unit == other)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Scalar(value) => write!(f, "{}", value),
            Quantity::Unit(unit) => write!(f, "{}", unit),
            Quantity::Array(elements) => write!(f, "{}", elements),
        }
    }
}

/// Maps a fallible function over an array, stopping at the first error.
pub(crate) fn try_map<F>(
    elements: ndarray::ArrayViewD<Quantity>,
    mut f: F,
) -> Result<ndarray::ArrayD<Quantity>, Error>
where
    F: FnMut(&Quantity) -> Result<Quantity, Error>,
{
    let results = elements.iter().map(&mut f).collect::<Result<Vec<_>, _>>()?;
    assemble(elements.shape(), results)
}

fn assemble(shape: &[usize], results: Vec<Quantity>) -> Result<ndarray::ArrayD<Quantity>, Error> {
    let len = results.len();
    ndarray::ArrayD::from_shape_vec(ndarray::IxDyn(shape), results).map_err(|_| {
        Error::ShapeMismatch {
            lhs: shape.to_vec(),
            rhs: vec![len],
        }
    })
}

/// Applies `f` position-wise, broadcasting array operands to the shape of
/// `elements`.
fn elementwise<F>(
    elements: &ndarray::ArrayD<Quantity>,
    rhs: Operand<'_>,
    mut f: F,
) -> Result<ndarray::ArrayD<Quantity>, Error>
where
    F: FnMut(&Quantity, Operand<'_>) -> Result<Quantity, Error>,
{
    log::trace!("element-wise operation over shape {:?}", elements.shape());

    let shape_mismatch = |rhs: &[usize]| Error::ShapeMismatch {
        lhs: elements.shape().to_vec(),
        rhs: rhs.to_vec(),
    };

    let results = match rhs {
        Operand::Numbers(numbers) => {
            let numbers = numbers
                .broadcast(elements.shape())
                .ok_or_else(|| shape_mismatch(numbers.shape()))?;
            elements
                .iter()
                .zip(numbers.iter())
                .map(|(q, &x)| f(q, Operand::Scalar(x)))
                .collect::<Result<Vec<_>, _>>()?
        }
        Operand::Quantities(others) => {
            let others = others
                .broadcast(elements.shape())
                .ok_or_else(|| shape_mismatch(others.shape()))?;
            elements
                .iter()
                .zip(others.iter())
                .map(|(q, other)| f(q, Operand::from(other)))
                .collect::<Result<Vec<_>, _>>()?
        }
        other => elements
            .iter()
            .map(|q| f(q, other.clone()))
            .collect::<Result<Vec<_>, _>>()?,
    };

    assemble(elements.shape(), results)
}

impl Arithmetic for Quantity {
    fn multiply_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        let rhs = rhs.into();
        match self {
            Quantity::Unit(unit) => unit.multiply_with(rhs, options),
            Quantity::Scalar(value) => match rhs {
                Operand::Scalar(other) => Ok(Quantity::Scalar(value * other)),
                Operand::Unit(unit) => unit.multiply_with(*value, options),
                Operand::Numbers(numbers) => {
                    Ok(Quantity::Array(numbers.map(|x| Quantity::Scalar(value * x))))
                }
                Operand::Quantities(elements) => {
                    try_map(elements, |q| q.multiply_with(*value, options)).map(Quantity::Array)
                }
                Operand::Unsupported(_) => Err(self.mismatch(Operation::Multiply, &rhs)),
            },
            Quantity::Array(elements) => {
                elementwise(elements, rhs, |q, r| q.multiply_with(r, options)).map(Quantity::Array)
            }
        }
    }

    fn divide_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        let rhs = rhs.into();
        match self {
            Quantity::Unit(unit) => unit.divide_with(rhs, options),
            Quantity::Scalar(value) => match rhs {
                Operand::Scalar(other) if other == 0.0 => Err(Error::DivideByZero),
                Operand::Scalar(other) => Ok(Quantity::Scalar(value / other)),
                Operand::Unit(unit) => unit.reciprocal()?.multiply_with(*value, options),
                _ => Err(self.mismatch(Operation::Divide, &rhs)),
            },
            Quantity::Array(elements) => {
                elementwise(elements, rhs, |q, r| q.divide_with(r, options)).map(Quantity::Array)
            }
        }
    }

    fn add_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        let rhs = rhs.into();
        match self {
            Quantity::Unit(unit) => unit.add_with(rhs, options),
            Quantity::Scalar(value) => match rhs {
                Operand::Scalar(other) => Ok(Quantity::Scalar(value + other)),
                _ => Err(self.mismatch(Operation::Add, &rhs)),
            },
            Quantity::Array(elements) => {
                elementwise(elements, rhs, |q, r| q.add_with(r, options)).map(Quantity::Array)
            }
        }
    }

    fn subtract_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        options: ArithmeticOptions,
    ) -> Result<Quantity, Error> {
        let rhs = rhs.into();
        match self {
            Quantity::Unit(unit) => unit.subtract_with(rhs, options),
            Quantity::Scalar(value) => match rhs {
                Operand::Scalar(other) => Ok(Quantity::Scalar(value - other)),
                _ => Err(self.mismatch(Operation::Subtract, &rhs)),
            },
            Quantity::Array(elements) => {
                elementwise(elements, rhs, |q, r| q.subtract_with(r, options)).map(Quantity::Array)
            }
        }
    }

    fn power_with(&self, n: i32, options: ArithmeticOptions) -> Result<Quantity, Error> {
        match self {
            Quantity::Unit(unit) => unit.power_with(n, options),
            Quantity::Scalar(value) => Ok(Quantity::Scalar(value.powi(n))),
            Quantity::Array(elements) => {
                try_map(elements.view(), |q| q.power_with(n, options)).map(Quantity::Array)
            }
        }
    }
}
