//! Base dimension categories and the exponent vectors built from them.

use std::collections::BTreeMap;
use std::fmt;

use crate::Error;

/// Base SI unit categories.
///
/// The derived ordering is arbitrary but fixed; it only serves to make
/// dimension vectors iterate deterministically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitType {
    Charge,
    Length,
    Mass,
    Time,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Charge,
        UnitType::Length,
        UnitType::Mass,
        UnitType::Time,
    ];

    /// Name of the SI base unit measuring this category.
    #[inline]
    pub fn unit_name(self) -> &'static str {
        match self {
            UnitType::Charge => "coulomb",
            UnitType::Length => "meter",
            UnitType::Mass => "kilogram",
            UnitType::Time => "second",
        }
    }

    /// Symbol of the SI base unit measuring this category.
    #[inline]
    pub fn unit_symbol(self) -> &'static str {
        match self {
            UnitType::Charge => "C",
            UnitType::Length => "m",
            UnitType::Mass => "kg",
            UnitType::Time => "s",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self {
            UnitType::Charge => "charge",
            UnitType::Length => "length",
            UnitType::Mass => "mass",
            UnitType::Time => "time",
        };
        f.write_str(category)
    }
}

/// A mapping from base category to a non-zero integer exponent.
///
/// No entry ever holds an exponent of 0, so two vectors describing the same
/// physical kind always compare equal. The empty vector is dimensionless.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector {
    exponents: BTreeMap<UnitType, i32>,
}

impl DimensionVector {
    /// The dimensionless vector.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single base category raised to the first power.
    #[inline]
    pub fn base(unit_type: UnitType) -> Self {
        Self {
            exponents: BTreeMap::from([(unit_type, 1)]),
        }
    }

    /// Builds a canonical vector from a multiset of `(exponent, category)`
    /// pairs. Exponents of repeated categories are summed and categories that
    /// sum to 0 are dropped.
    ///
    /// Fails with [`Error::ExponentOverflow`] if a sum leaves the `i32` range.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (i32, UnitType)>,
    {
        let mut exponents = BTreeMap::new();
        for (power, unit_type) in pairs {
            let total: &mut i32 = exponents.entry(unit_type).or_insert(0);
            *total = total
                .checked_add(power)
                .ok_or(Error::ExponentOverflow(unit_type))?;
        }
        exponents.retain(|_, power| *power != 0);

        Ok(Self { exponents })
    }

    /// Combines two vectors under multiplication.
    #[inline]
    pub fn merge(&self, other: &DimensionVector) -> Result<DimensionVector, Error> {
        Self::from_pairs(self.pairs().chain(other.pairs()))
    }

    /// Negates every exponent.
    pub fn reciprocal(&self) -> Result<DimensionVector, Error> {
        let exponents = self
            .pairs()
            .map(|(power, unit_type)| {
                power
                    .checked_neg()
                    .map(|negated| (unit_type, negated))
                    .ok_or(Error::ExponentOverflow(unit_type))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self { exponents })
    }

    /// The exponent of `unit_type`, 0 when absent.
    #[inline]
    pub fn exponent(&self, unit_type: UnitType) -> i32 {
        self.exponents.get(&unit_type).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Iterates over `(exponent, category)` pairs in category order.
    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (i32, UnitType)> + '_ {
        self.exponents.iter().map(|(&unit_type, &power)| (power, unit_type))
    }

    /// Long form, e.g. `"kilogram * meter * second^-2"`.
    pub fn name(&self) -> String {
        self.describe(UnitType::unit_name)
    }

    /// Short form, e.g. `"kg * m * s^-2"`.
    pub fn symbol(&self) -> String {
        self.describe(UnitType::unit_symbol)
    }

    fn describe(&self, label: fn(UnitType) -> &'static str) -> String {
        let mut fragments = self
            .pairs()
            .map(|(power, unit_type)| format_fragment(label(unit_type), power))
            .collect::<Vec<_>>();
        fragments.sort();
        fragments.join(" * ")
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

fn format_fragment(label: &str, power: i32) -> String {
    if power == 1 {
        label.to_string()
    } else {
        format!("{}^{}", label, power)
    }
}
