use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use glam::DVec3;

use crate::discretization::geometry::TriangleGeometry;
use crate::discretization::mesh::SurfaceMesh;
use crate::physics::flow::FlowState;
use crate::physics::forces::ForceReport;
use crate::physics::newtonian::PanelPressure;

/// Plain-text report of one run: mesh statistics, flow constants, and the
/// integrated results once they are available.
pub struct RunSummary {
    // Mesh info
    pub num_vertices: usize,
    pub num_triangles: usize,
    pub wetted_area: f64,
    pub bbox_min: DVec3,
    pub bbox_max: DVec3,

    // Flow info
    pub mach: f64,
    pub gamma: f64,
    pub static_pressure: f64,
    pub static_temperature: f64,
    pub speed: f64,
    pub cp_max: f64,
    pub reference_area: f64,

    // Results
    pub num_shadowed: Option<usize>,
    pub drag_coefficient: Option<f64>,
    pub lift_coefficient: Option<f64>,
    pub side_force_coefficient: Option<f64>,
    pub nodal_pressure_min: Option<f64>,
    pub nodal_pressure_max: Option<f64>,
}

impl RunSummary {
    pub fn from_problem(mesh: &SurfaceMesh, geometry: &[TriangleGeometry], flow: &FlowState) -> Self {
        let wetted_area: f64 = geometry.iter().map(|g| g.area).sum();

        let mut bbox_min = DVec3::splat(f64::INFINITY);
        let mut bbox_max = DVec3::splat(f64::NEG_INFINITY);
        for v in &mesh.vertices {
            bbox_min = bbox_min.min(*v);
            bbox_max = bbox_max.max(*v);
        }

        Self {
            num_vertices: mesh.num_vertices(),
            num_triangles: mesh.num_triangles(),
            wetted_area,
            bbox_min,
            bbox_max,
            mach: flow.conditions.mach,
            gamma: flow.conditions.gamma,
            static_pressure: flow.conditions.pressure,
            static_temperature: flow.conditions.temperature,
            speed: flow.velocity.length(),
            cp_max: flow.cp_max,
            reference_area: flow.conditions.reference_area,
            num_shadowed: None,
            drag_coefficient: None,
            lift_coefficient: None,
            side_force_coefficient: None,
            nodal_pressure_min: None,
            nodal_pressure_max: None,
        }
    }

    pub fn add_pressure_results(&mut self, pressures: &[PanelPressure]) {
        self.num_shadowed = Some(pressures.iter().filter(|p| p.is_shadowed()).count());
    }

    pub fn add_force_results(&mut self, report: &ForceReport) {
        self.drag_coefficient = Some(report.drag_coefficient);
        self.lift_coefficient = Some(report.lift_coefficient);
        self.side_force_coefficient = Some(report.side_force_coefficient);
    }

    pub fn add_nodal_results(&mut self, nodal_pressure: &[f64]) {
        self.nodal_pressure_min = Some(nodal_pressure.iter().cloned().fold(f64::INFINITY, f64::min));
        self.nodal_pressure_max =
            Some(nodal_pressure.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;

        writeln!(file, "{}", "=".repeat(60))?;
        writeln!(file, "NEWTONIAN SURFACE PRESSURE SUMMARY")?;
        writeln!(file, "{}", "=".repeat(60))?;
        writeln!(file)?;

        writeln!(file, "MESH STATISTICS")?;
        writeln!(file, "{}", "-".repeat(60))?;
        writeln!(file, "Number of vertices:  {}", self.num_vertices)?;
        writeln!(file, "Number of triangles: {}", self.num_triangles)?;
        writeln!(file, "Wetted area:         {:.6e} m^2", self.wetted_area)?;
        writeln!(
            file,
            "Bounding box:        ({:.4}, {:.4}, {:.4}) to ({:.4}, {:.4}, {:.4})",
            self.bbox_min.x,
            self.bbox_min.y,
            self.bbox_min.z,
            self.bbox_max.x,
            self.bbox_max.y,
            self.bbox_max.z
        )?;
        writeln!(file)?;

        writeln!(file, "FREE-STREAM CONDITIONS")?;
        writeln!(file, "{}", "-".repeat(60))?;
        writeln!(file, "Mach number:         {:.4}", self.mach)?;
        writeln!(file, "Gamma:               {:.4}", self.gamma)?;
        writeln!(file, "Static pressure:     {:.6e} Pa", self.static_pressure)?;
        writeln!(file, "Static temperature:  {:.2} K", self.static_temperature)?;
        writeln!(file, "Velocity magnitude:  {:.2} m/s", self.speed)?;
        writeln!(file, "Cp_max:              {:.6}", self.cp_max)?;
        writeln!(file, "Reference area:      {:.6e} m^2", self.reference_area)?;
        writeln!(file)?;

        if let Some(shadowed) = self.num_shadowed {
            writeln!(file, "PRESSURE FIELD")?;
            writeln!(file, "{}", "-".repeat(60))?;
            writeln!(
                file,
                "Shadowed panels:     {} of {}",
                shadowed, self.num_triangles
            )?;
            if let (Some(lo), Some(hi)) = (self.nodal_pressure_min, self.nodal_pressure_max) {
                writeln!(file, "Nodal pressure min:  {:.6e} Pa", lo)?;
                writeln!(file, "Nodal pressure max:  {:.6e} Pa", hi)?;
            }
            writeln!(file)?;
        }

        if let (Some(cd), Some(cl), Some(cs)) = (
            self.drag_coefficient,
            self.lift_coefficient,
            self.side_force_coefficient,
        ) {
            writeln!(file, "FORCE COEFFICIENTS")?;
            writeln!(file, "{}", "-".repeat(60))?;
            writeln!(file, "Drag coefficient:    {:.6}", cd)?;
            writeln!(file, "Lift coefficient:    {:.6}", cl)?;
            writeln!(file, "Side-force coeff.:   {:.6}", cs)?;
            writeln!(file)?;
        }

        writeln!(file, "{}", "=".repeat(60))?;

        Ok(())
    }

    pub fn print_to_console(&self) {
        println!("\n{}", "=".repeat(60));
        println!("RUN SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "Mesh:          {} triangles, {} vertices",
            self.num_triangles, self.num_vertices
        );
        println!(
            "Free stream:   Mach {:.2}, p_inf {:.4e} Pa, Cp_max {:.4}",
            self.mach, self.static_pressure, self.cp_max
        );
        if let (Some(cd), Some(cl), Some(cs)) = (
            self.drag_coefficient,
            self.lift_coefficient,
            self.side_force_coefficient,
        ) {
            println!("Coefficients:  CD={:.5}, CL={:.5}, CS={:.5}", cd, cl, cs);
        }
        if let Some(shadowed) = self.num_shadowed {
            println!("Shadowed:      {} of {} panels", shadowed, self.num_triangles);
        }
        println!("{}\n", "=".repeat(60));
    }
}
