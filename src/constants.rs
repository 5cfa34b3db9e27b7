//! Physical constants used to set up electromagnetic simulations.

use once_cell::sync::Lazy;

use crate::si::{derived, farad, henry, meter, second};
use crate::{Arithmetic, Unit};

static EPSILON0: Lazy<Unit> = Lazy::new(|| {
    derived("epsilon0", || farad().multiply(8.854187817e-12)?.divide(meter()))
});
static MU0: Lazy<Unit> = Lazy::new(|| {
    derived("mu0", || henry().multiply(1.2566370614e-6)?.divide(meter()))
});
static C: Lazy<Unit> = Lazy::new(|| {
    derived("c", || meter().multiply(299_792_458.0)?.divide(second()))
});

/// Vacuum permittivity, `F / m`.
#[inline]
pub fn epsilon0() -> &'static Unit {
    &EPSILON0
}

/// Vacuum permeability, `H / m`.
#[inline]
pub fn mu0() -> &'static Unit {
    &MU0
}

/// Speed of light in vacuum.
#[inline]
pub fn c() -> &'static Unit {
    &C
}
