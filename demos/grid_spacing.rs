use fdtd_units::prelude::*;
use fdtd_units::{constants, si};

fn main() -> Result<(), Error> {
    env_logger::init();

    let max_grid_points = 200;
    let background_eps = 2.25;

    // user input, as typed into a parameter dialog
    let x_dim = parse_dimensions("15 micrometer")?;
    let y_dim = parse_dimensions("9.5 micrometer")?;

    // plain numbers in micrometers for array sizing
    let micrometer = si::meter().multiply(1e-6)?;
    let x_um = x_dim.value_in(&micrometer)?;
    let y_um = y_dim.value_in(&micrometer)?;

    let (long_side, short_side) = if x_um > y_um { (x_um, y_um) } else { (y_um, x_um) };
    let delta = long_side / (max_grid_points - 1) as f64;
    let short_points = (short_side / delta).floor() as usize + 3;

    let permittivity = constants::epsilon0()
        .multiply(background_eps)?
        .into_unit()
        .unwrap();
    let eps_grid = permittivity.scale_array(&ndarray::Array2::<f64>::ones((
        short_points,
        max_grid_points,
    )));

    println!(
        "\n-- Grid Info --\n\
        size:         {} x {} µm\n\
        Δ:            {:<9.3e} µm\n\
        points:       {} x {}\n\
        ε(0, 0):      {}\n",
        x_um,
        y_um,
        delta,
        eps_grid.nrows(),
        eps_grid.ncols(),
        eps_grid[[0, 0]],
    );

    Ok(())
}
