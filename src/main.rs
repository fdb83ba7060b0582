use std::env;
use std::error::Error;
use std::fs;
use std::process;

use modnewt_rs::discretization::{geometry, gmsh};
use modnewt_rs::physics::flow::{FlowConditions, FlowState};
use modnewt_rs::physics::{forces, newtonian};
use modnewt_rs::processing::summary::RunSummary;
use modnewt_rs::processing::{nodal, tecplot};

fn main() {
    let mut args = env::args().skip(1);
    let mesh_path = args.next().unwrap_or_else(|| "geometry.msh".to_string());
    let config_path = args.next();

    if let Err(e) = run(&mesh_path, config_path.as_deref()) {
        eprintln!("Run failed: {e}");
        process::exit(1);
    }
}

fn run(mesh_path: &str, config_path: Option<&str>) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all("output")?;

    let conditions = load_conditions(config_path)?;

    println!("Reading mesh from {mesh_path}...");
    let mesh = gmsh::read_msh(mesh_path)?;
    println!(
        "  {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    // Configuration errors surface before any per-triangle work.
    let flow = FlowState::new(conditions)?;

    let geometry = geometry::compute_geometry(&mesh)?;
    let mut summary = RunSummary::from_problem(&mesh, &geometry, &flow);

    let pressures = newtonian::solve_surface(&flow, &geometry);
    summary.add_pressure_results(&pressures);

    let report = forces::integrate(&flow, &geometry, &pressures);
    summary.add_force_results(&report);

    let nodal_pressure = nodal::interpolate_to_nodes(&mesh, &geometry, &pressures);
    summary.add_nodal_results(&nodal_pressure);

    tecplot::write_surface(
        "output/surface_pressure.dat",
        "Modified Newtonian surface pressure",
        &mesh,
        &nodal_pressure,
    )?;
    println!("Surface field saved to output/surface_pressure.dat");

    summary.write_to_file("output/run_summary.txt")?;
    summary.print_to_console();
    println!("Summary saved to output/run_summary.txt");

    Ok(())
}

fn load_conditions(config_path: Option<&str>) -> Result<FlowConditions, Box<dyn Error>> {
    match config_path {
        Some(path) => {
            println!("Loading flow conditions from {path}...");
            let text = fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => {
            println!("No config given, using default flow conditions.");
            Ok(FlowConditions::default())
        }
    }
}
