use criterion::{Criterion, criterion_group, criterion_main};
use engine::game::{Board, BotInput, Side, calculate_move, negamax};

fn bench_negamax_empty_board() {
    let mut board = Board::new();
    negamax(&mut board, Side::PlayerOne);
}

fn bench_reply_to_corner_opening() {
    let mut board = Board::new();
    board.place(0, Side::PlayerOne).ok();
    let input = BotInput {
        board,
        computer_side: Side::PlayerTwo,
        move_count: 1,
        first_move_of_round: false,
    };
    calculate_move(&input);
}

fn bench_full_self_play_round() {
    let mut board = Board::new();
    let mut side = Side::PlayerOne;
    let mut move_count = 0;
    while !board.is_full() && engine::game::check_win(&board).is_none() {
        let input = BotInput {
            board,
            computer_side: side,
            move_count,
            first_move_of_round: move_count < 2,
        };
        let Some(cell) = calculate_move(&input) else {
            break;
        };
        board.place(cell, side).ok();
        side = side.opponent();
        move_count += 1;
    }
}

fn bench_mid_game() {
    use engine::game::Cell::{Empty as E, PlayerOne as P1, PlayerTwo as P2};
    let mut board = Board::from_cells([P1, E, E, E, P2, E, E, E, P1]);
    negamax(&mut board, Side::PlayerTwo);
}

fn negamax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");

    group.sample_size(20);

    group.bench_function("empty_board", |b| b.iter(bench_negamax_empty_board));
    group.bench_function("reply_to_corner", |b| b.iter(bench_reply_to_corner_opening));
    group.bench_function("self_play_round", |b| b.iter(bench_full_self_play_round));
    group.bench_function("mid_game", |b| b.iter(bench_mid_game));

    group.finish();
}

criterion_group!(benches, negamax_bench);
criterion_main!(benches);
