use criterion::{black_box, criterion_group, criterion_main, Criterion};

use noughts::board::Player;
use noughts::graph::generate;
use noughts::protocol::parse_position;
use noughts::selfplay::{run_self_play, SelfPlayConfig};
use noughts::solve::{best_move, solve, SolverConfig};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_from_empty", |b| {
        b.iter(|| generate(black_box(Player::X)))
    });
}

fn bench_solve_sequential(c: &mut Criterion) {
    let space = generate(Player::X);
    let config = SolverConfig::default();
    c.bench_function("solve_sequential", |b| {
        b.iter(|| solve(black_box(&space), &config, &mut std::io::sink()).unwrap())
    });
}

fn bench_solve_parallel(c: &mut Criterion) {
    let space = generate(Player::X);
    let config = SolverConfig {
        threads: 4,
        ..SolverConfig::default()
    };
    c.bench_function("solve_4_threads", |b| {
        b.iter(|| solve(black_box(&space), &config, &mut std::io::sink()).unwrap())
    });
}

fn bench_best_move(c: &mut Criterion) {
    let space = generate(Player::X);
    let solution = solve(&space, &SolverConfig::default(), &mut std::io::sink()).unwrap();
    let state = parse_position("X../.O./... X").unwrap();
    let id = space.id_of(&state).unwrap();
    c.bench_function("best_move_midgame", |b| {
        b.iter(|| best_move(&space, solution.values(), black_box(id)))
    });
}

fn bench_self_play(c: &mut Criterion) {
    let space = generate(Player::X);
    let solution = solve(&space, &SolverConfig::default(), &mut std::io::sink()).unwrap();
    let config = SelfPlayConfig {
        games: 100,
        seed: 1,
        threads: 1,
    };
    c.bench_function("self_play_100_games", |b| {
        b.iter(|| run_self_play(&space, &solution, black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_solve_sequential,
    bench_solve_parallel,
    bench_best_move,
    bench_self_play
);
criterion_main!(benches);
