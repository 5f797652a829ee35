use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use kagome_mesh::algs::dedup::deduplicate_nodes;
use kagome_mesh::algs::rewire::rewire_elements;
use kagome_mesh::mesh::{GridSize, KagomeMesh};
use kagome_mesh::mesh_generation::pool_stars;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("kagome_construction");

    for &side in &[10usize, 40usize] {
        let grid = GridSize::try_new(side, side).expect("positive grid");
        let pool = pool_stars(grid);

        group.bench_with_input(BenchmarkId::new("dedup_nodes", side), &side, |b, _| {
            b.iter(|| {
                let dedup = deduplicate_nodes(&pool);
                black_box(dedup);
            });
        });

        group.bench_with_input(BenchmarkId::new("dedup_and_rewire", side), &side, |b, _| {
            b.iter(|| {
                let dedup = deduplicate_nodes(&pool);
                let elements = rewire_elements(&pool, &dedup).expect("rewire");
                black_box(elements);
            });
        });

        group.bench_with_input(BenchmarkId::new("build_and_crack", side), &side, |b, &side| {
            b.iter(|| {
                let mut mesh = KagomeMesh::new(side, side, 2.0).expect("mesh");
                let cracked = mesh.create_crack(side / 2).expect("crack").len();
                black_box(cracked);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction);
criterion_main!(benches);
