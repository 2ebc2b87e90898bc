use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{Direction, GamePhase, SnakeGame, SnakeGameSettings};

const TURNS: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

fn play_ticks(ticks: usize) -> u32 {
    let mut game = SnakeGame::new(SnakeGameSettings::default(), SessionRng::new(17));
    game.submit_start();
    let mut turn = 0;

    for tick in 0..ticks {
        if game.phase() == GamePhase::Ended {
            game.submit_reset();
        }
        if tick % 7 == 0 {
            game.submit_direction(TURNS[turn % TURNS.len()]);
            turn += 1;
        }
        game.on_tick();
    }

    game.high_score()
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");
    group.bench_function("10k ticks", |b| b.iter(|| black_box(play_ticks(10_000))));
    group.bench_function("snapshot", |b| {
        let mut game = SnakeGame::new(SnakeGameSettings::default(), SessionRng::new(3));
        game.submit_start();
        b.iter(|| black_box(game.snapshot()))
    });
    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
