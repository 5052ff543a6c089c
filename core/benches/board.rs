use canvasweeper_core::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const CONFIGS: [(&str, Coord2, CellCount); 3] = [
    ("6x6-7", (6, 6), 7),
    ("16x16-40", (16, 16), 40),
    ("255x255-8000", (255, 255), 8000),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in CONFIGS {
        let config = GameConfig::new(size, mines).expect("valid bench config");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomBoardGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (name, size) in [("16x16", (16, 16)), ("255x255", (255, 255))] {
        // a single mine in the far corner leaves one huge zero region
        let board = Board::from_mine_coords(size, &[(size.0 - 1, size.1 - 1)])
            .expect("valid bench board");
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| {
                let mut game = Game::new(board.clone());
                black_box(game.reveal((0, 0)).expect("in bounds"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
