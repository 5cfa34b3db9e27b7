use fdtd_units::prelude::*;
use fdtd_units::{constants, si};

fn main() -> Result<(), Error> {
    env_logger::init();

    // a person, with height and weight given in different unit systems
    let height = parse_dimensions("1.6 meter")?;
    let weight = si::pound().multiply(150)?;
    let accel = si::meter()
        .multiply(9.8)?
        .divide(&si::second().power(2)?)?;
    let mass = weight.divide(&accel)?;

    println!(
        "\n-- Conversions --\n\
        height:  {:<8.3} ft\n\
        height:  {:<8.3} in\n\
        mass:    {:<8.3} kg\n\
        weight:  {}\n",
        height.value_in(si::foot())?,
        height.value_in(si::inch())?,
        mass.value_in(si::kilogram())?,
        weight,
    );

    // dimensions are checked
    if let Err(err) = height.add(&mass) {
        println!("height + mass: {}", err);
    }

    println!(
        "\n-- Constants --\n\
        ε0:  {}\n\
        μ0:  {}\n\
        c:   {}\n",
        constants::epsilon0(),
        constants::mu0(),
        constants::c(),
    );

    Ok(())
}
