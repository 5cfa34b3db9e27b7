//! Parsing of human readable lengths such as `"5 micrometer"`.

use std::num::ParseFloatError;

use crate::si::{inch, meter};
use crate::{Arithmetic, ArithmeticOptions, Error, Quantity};

/// Represents a malformed quantity string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected a number followed by a unit ( input: {0:?} )")]
    MissingToken(String),
    #[error("Could not read {token:?} as a number")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Unrecognized unit {0:?}")]
    UnknownUnit(String),
}

/// Metric prefixes, from yotta down to yocto.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetricPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    None,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 21] = [
        MetricPrefix::Yotta,
        MetricPrefix::Zetta,
        MetricPrefix::Exa,
        MetricPrefix::Peta,
        MetricPrefix::Tera,
        MetricPrefix::Giga,
        MetricPrefix::Mega,
        MetricPrefix::Kilo,
        MetricPrefix::Hecto,
        MetricPrefix::Deca,
        MetricPrefix::None,
        MetricPrefix::Deci,
        MetricPrefix::Centi,
        MetricPrefix::Milli,
        MetricPrefix::Micro,
        MetricPrefix::Nano,
        MetricPrefix::Pico,
        MetricPrefix::Femto,
        MetricPrefix::Atto,
        MetricPrefix::Zepto,
        MetricPrefix::Yocto,
    ];

    /// Full lowercase name; empty for `None`.
    pub fn name(self) -> &'static str {
        match self {
            MetricPrefix::Yotta => "yotta",
            MetricPrefix::Zetta => "zetta",
            MetricPrefix::Exa => "exa",
            MetricPrefix::Peta => "peta",
            MetricPrefix::Tera => "tera",
            MetricPrefix::Giga => "giga",
            MetricPrefix::Mega => "mega",
            MetricPrefix::Kilo => "kilo",
            MetricPrefix::Hecto => "hecto",
            MetricPrefix::Deca => "deca",
            MetricPrefix::None => "",
            MetricPrefix::Deci => "deci",
            MetricPrefix::Centi => "centi",
            MetricPrefix::Milli => "milli",
            MetricPrefix::Micro => "micro",
            MetricPrefix::Nano => "nano",
            MetricPrefix::Pico => "pico",
            MetricPrefix::Femto => "femto",
            MetricPrefix::Atto => "atto",
            MetricPrefix::Zepto => "zepto",
            MetricPrefix::Yocto => "yocto",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            MetricPrefix::Yotta => 1e24,
            MetricPrefix::Zetta => 1e21,
            MetricPrefix::Exa => 1e18,
            MetricPrefix::Peta => 1e15,
            MetricPrefix::Tera => 1e12,
            MetricPrefix::Giga => 1e9,
            MetricPrefix::Mega => 1e6,
            MetricPrefix::Kilo => 1e3,
            MetricPrefix::Hecto => 1e2,
            MetricPrefix::Deca => 1e1,
            MetricPrefix::None => 1.0,
            MetricPrefix::Deci => 1e-1,
            MetricPrefix::Centi => 1e-2,
            MetricPrefix::Milli => 1e-3,
            MetricPrefix::Micro => 1e-6,
            MetricPrefix::Nano => 1e-9,
            MetricPrefix::Pico => 1e-12,
            MetricPrefix::Femto => 1e-15,
            MetricPrefix::Atto => 1e-18,
            MetricPrefix::Zepto => 1e-21,
            MetricPrefix::Yocto => 1e-24,
        }
    }

    /// Looks up a prefix by its full name, ignoring case.
    ///
    /// Abbreviations such as `"k"` are not recognized.
    pub fn from_name(name: &str) -> Option<MetricPrefix> {
        let name = name.to_lowercase();
        MetricPrefix::ALL.into_iter().find(|prefix| prefix.name() == name)
    }
}

/// The multiplier of a metric prefix name, 1 for anything unrecognized.
#[inline]
pub fn convert_metric_prefix(name: &str) -> f64 {
    MetricPrefix::from_name(name).map_or(1.0, MetricPrefix::factor)
}

/// Reads a string such as `"1.6 meter"` or `"5 micrometer"`.
#[inline]
pub fn parse_dimensions(text: &str) -> Result<Quantity, Error> {
    parse_dimensions_with(text, ArithmeticOptions::default())
}

/// Reads a quantity string, applying `options` to the resulting arithmetic.
///
/// Lengths in meters accept a full metric prefix; inches take none. Only the
/// first two whitespace-separated tokens are read.
pub fn parse_dimensions_with(text: &str, options: ArithmeticOptions) -> Result<Quantity, Error> {
    let mut tokens = text.split_whitespace();
    let (number, unit_token) = match (tokens.next(), tokens.next()) {
        (Some(number), Some(unit_token)) => (number, unit_token),
        _ => return Err(ParseError::MissingToken(text.to_string()).into()),
    };

    let value = number.parse::<f64>().map_err(|source| {
        log::debug!("rejected quantity {:?}: bad number {:?}", text, number);
        ParseError::InvalidNumber {
            token: number.to_string(),
            source,
        }
    })?;

    if let Some(position) = unit_token.find("meter") {
        let factor = convert_metric_prefix(&unit_token[..position]);
        meter()
            .multiply_with(value, options)?
            .multiply_with(factor, options)
    } else if unit_token.contains("inch") {
        inch().multiply_with(value, options)
    } else {
        log::debug!("rejected quantity {:?}: unknown unit {:?}", text, unit_token);
        Err(ParseError::UnknownUnit(unit_token.to_string()).into())
    }
}
