use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geo::Point;
use hashbrown::HashMap;
use roadgraph_core::OsmNodeId;
use roadgraph_core::model::{RoadGraph, StreetNames};

/// Synthetic square street grid of `side` x `side` nodes.
fn grid(side: i64) -> (Vec<(OsmNodeId, OsmNodeId)>, HashMap<OsmNodeId, Point<f64>>) {
    let mut pairs = Vec::new();
    let mut coordinates = HashMap::new();

    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            coordinates.insert(id, Point::new(x as f64 * 0.001, y as f64 * 0.001));
            if x + 1 < side {
                pairs.push((id, id + 1));
            }
            if y + 1 < side {
                pairs.push((id, id + side));
            }
        }
    }

    (pairs, coordinates)
}

fn assembly_benchmark(c: &mut Criterion) {
    let (pairs, coordinates) = grid(100);

    c.bench_function("assemble 100x100 grid", |b| {
        b.iter(|| {
            RoadGraph::from_parts(
                black_box(pairs.clone()),
                black_box(coordinates.clone()),
                StreetNames::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, assembly_benchmark);
criterion_main!(benches);
