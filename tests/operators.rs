//! Operator behavior of `Unit`, checked on locally built base units.

use fdtd_units::prelude::*;
use fdtd_units::{new_unit, si, Operation};

struct Fixture {
    meter: Unit,
    meter2: Unit,
    second: Unit,
    kgram: Unit,
    imeter: Unit,
    isecond: Unit,
    ikgram: Unit,
}

fn fixture() -> Fixture {
    let dims = |pairs: &[(i32, UnitType)]| {
        DimensionVector::from_pairs(pairs.iter().copied()).unwrap()
    };
    Fixture {
        meter: new_unit(1.0, dims(&[(1, UnitType::Length)])),
        meter2: new_unit(1.0, dims(&[(2, UnitType::Length)])),
        second: new_unit(1.0, dims(&[(1, UnitType::Time)])),
        kgram: new_unit(1.0, dims(&[(1, UnitType::Mass)])),
        imeter: new_unit(1.0, dims(&[(-1, UnitType::Length)])),
        isecond: new_unit(1.0, dims(&[(-1, UnitType::Time)])),
        ikgram: new_unit(1.0, dims(&[(-1, UnitType::Mass)])),
    }
}

fn newton(f: &Fixture) -> Quantity {
    f.kgram
        .multiply(&f.meter)
        .and_then(|q| q.divide(&f.second.power(2)?))
        .unwrap()
}

#[test]
fn add_and_subtract() {
    let f = fixture();
    assert_eq!(f.meter.add(&f.meter).unwrap(), f.meter.multiply(2).unwrap());
    assert!(matches!(
        f.meter.add(&f.second).unwrap_err(),
        Error::DimensionMismatch { operation: Operation::Add, .. }
    ));
    assert!(f.meter.add(2).is_err());

    assert_eq!(f.meter.subtract(&f.meter).unwrap(), 0.0);
    assert!(f.meter.subtract(&f.meter).unwrap().is_scalar());
    assert_eq!(f.meter.multiply(2).unwrap().subtract(&f.meter).unwrap(), f.meter);

    assert!(f.meter.subtract(&f.second).is_err());
    assert!(f.second.subtract(1).is_err());
}

#[test]
fn equality() {
    let f = fixture();
    assert_ne!(f.meter, f.second);
    assert_ne!(f.meter2, f.meter);
    assert_ne!(Quantity::Unit(f.meter.clone()), 1.0);

    assert_eq!(si::second(), si::second());
    assert_ne!(si::second(), si::foot());
    assert_ne!(si::meter(), si::foot());
}

#[test]
fn multiplication() {
    let f = fixture();
    let met_sec = new_unit(
        1.0,
        DimensionVector::from_pairs([(1, UnitType::Length), (1, UnitType::Time)]).unwrap(),
    );
    assert_eq!(f.meter.multiply(&f.meter).unwrap(), f.meter2);
    assert_eq!(f.meter.multiply(&f.second).unwrap(), met_sec);
    assert_ne!(f.meter.multiply(&f.meter).unwrap(), f.meter);

    assert_eq!(Quantity::Scalar(1.0).multiply(&f.meter).unwrap(), f.meter);
    assert_ne!(Quantity::Scalar(2.0).multiply(&f.meter).unwrap(), f.meter);
    assert_eq!(f.meter.multiply(1).unwrap(), f.meter);
    assert_ne!(f.meter.multiply(2).unwrap(), f.meter);
    assert_eq!(f.meter.multiply(1.0).unwrap(), f.meter);
    assert_ne!(f.meter.multiply(1.1).unwrap(), f.meter);

    assert_eq!(f.meter.multiply(0).unwrap(), 0.0);
    assert_eq!(f.meter.multiply(0.0).unwrap(), 0.0);

    assert!(f.meter.multiply("hey").unwrap_err().is_arithmetic());
}

#[test]
fn power() {
    let f = fixture();
    assert_eq!(f.meter.power(2).unwrap(), f.meter2);
    assert_ne!(f.meter.power(2).unwrap(), f.meter);
    assert!(matches!(f.meter.powf(2.2).unwrap_err(), Error::InvalidExponent(_)));
}

#[test]
fn string_form() {
    let f = fixture();
    assert_eq!(f.meter.to_string(), "1 * m");
    assert_eq!(newton(&f).to_string(), "1 * kg * m * s^-2");
    assert_eq!(newton(&f).as_unit().unwrap().name(), "kilogram * meter * second^-2");
}

#[test]
fn division() {
    let f = fixture();
    let length = f.meter.multiply(2.2).unwrap();
    assert_eq!(length.divide(&f.meter).unwrap(), 2.2);
    assert_ne!(length.divide(&f.second).unwrap(), 2.2);

    let newton = newton(&f);
    assert_eq!(
        newton.divide(&f.kgram).unwrap(),
        f.meter.divide(&f.second.power(2).unwrap()).unwrap()
    );
    assert_ne!(
        newton.divide(&f.kgram).unwrap(),
        f.meter.divide(&f.second.power(1).unwrap()).unwrap()
    );

    assert_eq!(f.meter.divide(1).unwrap(), f.meter);
    assert_eq!(f.meter.divide(1.0).unwrap(), f.meter);
    assert_ne!(f.meter.divide(2).unwrap(), f.meter);
    assert_ne!(f.meter.divide(2.0).unwrap(), f.meter);
    assert_eq!(f.meter.divide(2).unwrap(), f.meter.multiply(1.0 / 2.0).unwrap());

    assert!(matches!(f.meter.divide(0).unwrap_err(), Error::DivideByZero));

    let nothing = new_unit(0.0, f.meter.dimensions().clone());
    assert!(matches!(f.second.divide(&nothing).unwrap_err(), Error::DivideByZero));
}

#[test]
fn cancellations() {
    let f = fixture();
    assert_eq!(f.meter.multiply(&f.imeter).unwrap(), 1.0);
    assert_eq!(f.second.multiply(&f.isecond).unwrap(), 1.0);
    assert_eq!(f.kgram.multiply(&f.ikgram).unwrap(), 1.0);
}

#[test]
fn self_consistency() {
    let f = fixture();
    for unit in [&f.meter, &f.meter2, &f.second, &f.imeter] {
        assert_eq!(unit, unit);
        assert_eq!(unit.add(unit).unwrap(), unit.multiply(2).unwrap());
        assert_eq!(unit.subtract(unit).unwrap(), 0.0);
    }
}
