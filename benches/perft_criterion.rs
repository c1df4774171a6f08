use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_position::game_state::chess_types::{CastlingRights, Color, CASTLE_ALL};
use chess_position::game_state::game_state::GameState;
use chess_position::move_generation::perft::perft;
use chess_position::utils::board_diagram::game_state_from_diagram;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: Option<&'static str>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    expected_nodes: &'static [u64],
}

const KIWIPETE: &str = "
    r...k..r
    p.ppqpb.
    bn..pnp.
    ...PN...
    .p..P...
    ..N..Q.p
    PPPBBPPP
    R...K..R
";

const ROOK_ENDGAME: &str = "
    ........
    ..p.....
    ...p....
    KP.....r
    .R...p.k
    ........
    ....P.P.
    ........
";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        diagram: None,
        side_to_move: Color::Light,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        diagram: Some(KIWIPETE),
        side_to_move: Color::Light,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        diagram: Some(ROOK_ENDGAME),
        side_to_move: Color::Light,
        castling_rights: 0,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        diagram: None,
        side_to_move: Color::Light,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        diagram: Some(KIWIPETE),
        side_to_move: Color::Light,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        diagram: Some(ROOK_ENDGAME),
        side_to_move: Color::Light,
        castling_rights: 0,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_POSITION_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn build_game(case: &BenchCase) -> GameState {
    match case.diagram {
        Some(diagram) => game_state_from_diagram(diagram, case.side_to_move, case.castling_rights)
            .expect("benchmark diagram should parse"),
        None => GameState::new_game(),
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let mut game = build_game(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
