use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tactik::board::Grid;
use tactik::rules::Rules;
use tactik::search::{HeuristicMinimax, Minimax, Strategy};

fn bench_winner_scan(c: &mut Criterion) {
    let rules = Rules::new(3);
    let grid = Grid::from_rows(&["xo.x", ".xo.", "o.x.", "..ox"]);
    c.bench_function("winner_scan_4x4", |b| {
        b.iter(|| rules.winner(black_box(&grid)))
    });
}

fn bench_exhaustive_3x3(c: &mut Criterion) {
    let rules = Rules::new(3);
    let grid = Grid::new(3, 3);
    c.bench_function("exhaustive_minimax_empty_3x3", |b| {
        let mut search = Minimax::new(rules);
        b.iter(|| search.next_move(black_box(&grid)).unwrap())
    });
}

fn bench_heuristic_4x4(c: &mut Criterion) {
    let rules = Rules::new(3);
    let grid = Grid::from_rows(&["x...", ".o..", "....", "...."]);
    c.bench_function("heuristic_minimax_depth4_4x4", |b| {
        let mut search = HeuristicMinimax::new(rules, 4);
        b.iter(|| search.next_move(black_box(&grid)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_winner_scan,
    bench_exhaustive_3x3,
    bench_heuristic_4x4
);
criterion_main!(benches);
