use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use modnewt_rs::discretization::generator::sphere_mesh;
use modnewt_rs::discretization::geometry::compute_geometry;
use modnewt_rs::physics::flow::{FlowConditions, FlowState};
use modnewt_rs::physics::{forces, newtonian};
use modnewt_rs::processing::nodal;

fn mesh_sizes() -> Vec<(usize, usize)> {
    vec![(24, 48), (64, 128)]
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for &(n_lat, n_lon) in &mesh_sizes() {
        let mesh = sphere_mesh(1.0, n_lat, n_lon);
        let triangles = mesh.num_triangles();
        group.bench_with_input(
            BenchmarkId::from_parameter(triangles),
            &triangles,
            |b, &_| {
                b.iter(|| {
                    let geo = compute_geometry(&mesh).unwrap();
                    std::hint::black_box(geo);
                });
            },
        );
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &(n_lat, n_lon) in &mesh_sizes() {
        let mesh = sphere_mesh(1.0, n_lat, n_lon);
        let flow = FlowState::new(FlowConditions::default()).unwrap();
        let triangles = mesh.num_triangles();
        group.bench_with_input(
            BenchmarkId::from_parameter(triangles),
            &triangles,
            |b, &_| {
                b.iter(|| {
                    let geometry = compute_geometry(&mesh).unwrap();
                    let pressures = newtonian::solve_surface(&flow, &geometry);
                    let report = forces::integrate(&flow, &geometry, &pressures);
                    let nodal_pressure = nodal::interpolate_to_nodes(&mesh, &geometry, &pressures);
                    std::hint::black_box((report, nodal_pressure));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_full_pipeline);
criterion_main!(benches);
