use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{has_won, winning_run, Board, GameSettings, GameState};
use tui_tictactoe::term::{FrameBuffer, GameView, Viewport};
use tui_tictactoe::types::{Mark, Position};

fn bench_classic_win(c: &mut Criterion) {
    let mut board = Board::new(3, 3);
    for i in 0..3 {
        board.set(i, i, Some(Mark::X));
    }

    c.bench_function("has_won_3x3_diagonal", |b| {
        b.iter(|| has_won(black_box(&board), 2, 2, Mark::X, black_box(3)))
    });
}

fn bench_large_board_miss(c: &mut Criterion) {
    // Checkerboard: every scan stops after one step, nothing wins.
    let mut board = Board::new(40, 60);
    for row in 0..40 {
        for col in 0..60 {
            let mark = if (row + col) % 2 == 0 { Mark::X } else { Mark::O };
            board.set(row, col, Some(mark));
        }
    }

    c.bench_function("has_won_40x60_no_win", |b| {
        b.iter(|| has_won(black_box(&board), 20, 30, Mark::X, black_box(10)))
    });
}

fn bench_straddled_run(c: &mut Criterion) {
    // Long run straddling the placed cell; only the W scan completes it.
    let mut board = Board::new(40, 60);
    for col in 20..40 {
        board.set(20, col, Some(Mark::O));
    }

    c.bench_function("has_won_40x60_straddle", |b| {
        b.iter(|| has_won(black_box(&board), 20, 30, Mark::O, black_box(20)))
    });

    c.bench_function("winning_run_40x60_straddle", |b| {
        b.iter(|| winning_run(black_box(&board), Position::new(20, 30), Mark::O, 20))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(GameSettings::new(10, 10, 5).unwrap());
    for field in [1, 12, 23, 34, 45, 56] {
        let _ = state.place_field(field);
    }
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_10x10", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(120, 40), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_classic_win,
    bench_large_board_miss,
    bench_straddled_run,
    bench_render
);
criterion_main!(benches);
