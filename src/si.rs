//! SI base units and the units derived from them.
//!
//! Every unit here is built once, on first access, from the four base units
//! using ordinary unit arithmetic.

use once_cell::sync::Lazy;

use crate::{Arithmetic, Error, Quantity, Unit, UnitType};

static METER: Lazy<Unit> = Lazy::new(|| Unit::base(UnitType::Length));
static COULOMB: Lazy<Unit> = Lazy::new(|| Unit::base(UnitType::Charge));
static KILOGRAM: Lazy<Unit> = Lazy::new(|| Unit::base(UnitType::Mass));
static SECOND: Lazy<Unit> = Lazy::new(|| Unit::base(UnitType::Time));

static NEWTON: Lazy<Unit> = Lazy::new(|| {
    derived("newton", || {
        kilogram()
            .multiply(meter())?
            .divide(&second().power(2)?)
    })
});
static FARAD: Lazy<Unit> = Lazy::new(|| {
    derived("farad", || coul().power(2)?.divide(&newton().multiply(meter())?))
});
static AMPERE: Lazy<Unit> = Lazy::new(|| derived("ampere", || coul().divide(second())));
static HENRY: Lazy<Unit> = Lazy::new(|| {
    derived("henry", || {
        kilogram()
            .multiply(meter())?
            .multiply(meter())?
            .divide(&coul().multiply(coul())?)
    })
});
static FOOT: Lazy<Unit> = Lazy::new(|| derived("foot", || meter().multiply(0.305)));
static INCH: Lazy<Unit> = Lazy::new(|| derived("inch", || foot().divide(12)));
static POUND: Lazy<Unit> = Lazy::new(|| derived("pound", || newton().multiply(4.448222)));

/// Unwraps a table entry built by unit arithmetic.
///
/// Panics if the arithmetic fails or cancels to a bare number; entries are
/// fixed at compile time, so this only happens on a broken table.
pub(crate) fn derived<F>(name: &str, build: F) -> Unit
where
    F: FnOnce() -> Result<Quantity, Error>,
{
    match build() {
        Ok(Quantity::Unit(unit)) => {
            log::debug!("initialised {} = {}", name, unit);
            unit
        }
        Ok(other) => panic!("{} did not produce a dimensioned unit (got {})", name, other),
        Err(err) => panic!("failed to build {}: {}", name, err),
    }
}

/// SI unit of length.
#[inline]
pub fn meter() -> &'static Unit {
    &METER
}

/// SI unit of charge.
#[inline]
pub fn coul() -> &'static Unit {
    &COULOMB
}

/// SI unit of charge.
#[inline]
pub fn coulomb() -> &'static Unit {
    &COULOMB
}

/// SI unit of mass.
#[inline]
pub fn kilogram() -> &'static Unit {
    &KILOGRAM
}

/// SI unit of time.
#[inline]
pub fn second() -> &'static Unit {
    &SECOND
}

/// SI unit of force, `kg * m * s^-2`.
#[inline]
pub fn newton() -> &'static Unit {
    &NEWTON
}

/// SI unit of capacitance.
#[inline]
pub fn farad() -> &'static Unit {
    &FARAD
}

/// SI unit of current.
#[inline]
pub fn ampere() -> &'static Unit {
    &AMPERE
}

/// SI unit of inductance.
#[inline]
pub fn henry() -> &'static Unit {
    &HENRY
}

/// Imperial unit of length.
#[inline]
pub fn foot() -> &'static Unit {
    &FOOT
}

/// Imperial unit of length, a twelfth of a foot.
#[inline]
pub fn inch() -> &'static Unit {
    &INCH
}

/// Imperial unit of force.
#[inline]
pub fn pound() -> &'static Unit {
    &POUND
}
