//! Integration tests for boardsearch
//!
//! Tests the full stack: board text formats, both engines, and the binary

use boardsearch_core::checkers::{self, has_capture, successors, Board as CheckersBoard, PieceKind, Square};
use boardsearch_core::puzzle::{self, Board as PuzzleBoard, Shape};
use boardsearch_core::text::render_sequence;
use boardsearch_core::{Algorithm, AlphaBetaAI, Decision, EngineConfig, PuzzleConfig, Side};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const OPENING: &str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
";

/// Red man with one capture that ends the game
const LAST_CAPTURE: &str = "\
........
........
...b....
..r.....
........
........
........
........
";

const CLASSIC: &str = "^11^\nv11v\n^<>^\nv22v\n2..2\n";

/// Goal piece one slide above the target
const NEAR: &str = "^<>^\nv22v\n^11^\nv11v\n2..2\n";

/// Every other piece is a horizontal domino, so the goal can never reach column 1
const STUCK: &str = "11<>\n11<>\n<><>\n<><>\n<>..\n";

fn checkers_board(text: &str) -> CheckersBoard {
    CheckersBoard::parse(text).unwrap()
}

fn puzzle_board(text: &str) -> PuzzleBoard {
    PuzzleBoard::parse(text).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("boardsearch_{}_{}", std::process::id(), name))
}

fn shape_counts(board: &PuzzleBoard) -> [usize; 4] {
    let mut counts = [0; 4];
    for piece in board.pieces() {
        let slot = match piece.shape {
            Shape::Goal => 0,
            Shape::Single => 1,
            Shape::Horizontal => 2,
            Shape::Vertical => 3,
        };
        counts[slot] += 1;
    }
    counts
}

// ============================================================================
// CHECKERS
// ============================================================================

#[test]
fn test_single_jump_scenario() {
    let board = checkers_board(LAST_CAPTURE);
    let moves = successors(&board, Side::Red);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].count(Side::Black), 0);
    assert_eq!(moves[0].get(Square::new(1, 4)), Some(PieceKind::RedMan));
    assert!(moves[0].get(Square::new(3, 2)).is_none());
}

#[test]
fn test_random_playouts_keep_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..20 {
        let mut board = checkers_board(OPENING);
        let mut side = Side::Red;

        for _ in 0..120 {
            let moves = successors(&board, side);
            if moves.is_empty() {
                break;
            }
            let capture = has_capture(&board, side);

            for next in &moves {
                assert_eq!(next.count(side), board.count(side));
                if capture {
                    assert!(next.count(side.opponent()) < board.count(side.opponent()));
                } else {
                    assert_eq!(next.count(side.opponent()), board.count(side.opponent()));
                }
                for (sq, kind) in next.pieces() {
                    assert!(!(kind == PieceKind::RedMan && sq.row == 0));
                    assert!(!(kind == PieceKind::BlackMan && sq.row == 7));
                }
                assert_eq!(CheckersBoard::parse(&next.to_string()).unwrap(), *next);
            }

            board = *moves.choose(&mut rng).unwrap();
            side = side.opponent();
        }
    }
}

#[test]
fn test_search_picks_legal_move_from_opening() {
    let board = checkers_board(OPENING);
    let ai = AlphaBetaAI::new(4);
    let decision = ai.best_move(&board, Side::Red);
    let chosen = decision.board().unwrap();
    assert!(successors(&board, Side::Red).contains(chosen));
}

#[test]
fn test_game_ends_when_side_cannot_move() {
    let ai = AlphaBetaAI::new(3);
    let record = ai.play_game(checkers_board(LAST_CAPTURE), Side::Red, None);
    assert_eq!(record.plies, 1);
    assert_eq!(record.winner, Some(Side::Red));
    assert_eq!(record.boards.len(), 2);
    assert_eq!(
        ai.best_move(&record.boards[1], Side::Black),
        Decision::NoMove
    );
}

#[test]
fn test_short_game_from_opening() {
    let ai = AlphaBetaAI::new(2);
    let record = ai.play_game(checkers_board(OPENING), Side::Red, Some(10));
    assert!(record.plies <= 10);
    assert_eq!(record.boards.len(), record.plies as usize + 1);
    for (ply, pair) in record.boards.windows(2).enumerate() {
        let side = if ply % 2 == 0 { Side::Red } else { Side::Black };
        assert!(checkers::successors(&pair[0], side).contains(&pair[1]));
    }
}

// ============================================================================
// PUZZLE
// ============================================================================

#[test]
fn test_random_walks_keep_puzzle_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let start = puzzle_board(CLASSIC);
    let counts = shape_counts(&start);

    for _ in 0..10 {
        let mut board = start.clone();
        for _ in 0..50 {
            let moves = puzzle::successor_boards(&board);
            for next in &moves {
                assert_eq!(next.empty_cells().len(), 2);
                assert_eq!(shape_counts(next), counts);
                let reparsed = PuzzleBoard::parse(&next.to_string()).unwrap();
                assert_eq!(reparsed.grid(), next.grid());
            }
            board = moves.choose(&mut rng).unwrap().clone();
        }
    }
}

#[test]
fn test_classic_solved_by_both_algorithms() {
    let config = PuzzleConfig::default();
    let astar = puzzle::solve(puzzle_board(CLASSIC), Algorithm::AStar, &config);
    let dfs = puzzle::solve(puzzle_board(CLASSIC), Algorithm::Dfs, &config);

    let astar_path = astar.solution.as_ref().unwrap();
    let dfs_path = dfs.solution.as_ref().unwrap();
    assert!(puzzle::goal_test(astar_path.last().unwrap()));
    assert!(puzzle::goal_test(dfs_path.last().unwrap()));
    assert!(astar_path.len() <= dfs_path.len());
    assert!(astar.stats.expanded > 0);
}

#[test]
fn test_solution_text_reparses() {
    let report = puzzle::solve(puzzle_board(NEAR), Algorithm::AStar, &PuzzleConfig::default());
    let path = report.solution.unwrap();
    let text = render_sequence(&path);

    let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.trim().is_empty()).collect();
    assert_eq!(blocks.len(), path.len());
    for (block, board) in blocks.iter().zip(&path) {
        assert_eq!(PuzzleBoard::parse(block).unwrap().grid(), board.grid());
    }
}

// ============================================================================
// BINARY
// ============================================================================

#[test]
fn test_cli_checkers_writes_every_board() {
    let input = temp_path("checkers_in.txt");
    let output = temp_path("checkers_out.txt");
    std::fs::write(&input, LAST_CAPTURE).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_boardsearch"))
        .arg("checkers")
        .arg("--inputfile")
        .arg(&input)
        .arg("--outputfile")
        .arg(&output)
        .args(["--depth", "3"])
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&output).unwrap();
    let initial = checkers_board(LAST_CAPTURE);
    let after = successors(&initial, Side::Red)[0];
    assert_eq!(written, render_sequence(&[initial, after]));

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_cli_hrd_solution_and_unsolved() {
    let input = temp_path("hrd_in.txt");
    let output = temp_path("hrd_out.txt");
    let config_path = temp_path("hrd_config.json");
    std::fs::write(&input, NEAR).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_boardsearch"))
        .arg("hrd")
        .arg("--inputfile")
        .arg(&input)
        .arg("--outputfile")
        .arg(&output)
        .args(["--algo", "astar"])
        .status()
        .unwrap();
    assert!(status.success());
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, format!("{}\n^<>^\nv22v\n^..^\nv11v\n2112\n\n", NEAR));

    let mut config = EngineConfig::default();
    config.puzzle.max_expansions = Some(0);
    config.save(&config_path).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_boardsearch"))
        .arg("hrd")
        .arg("--inputfile")
        .arg(&input)
        .arg("--outputfile")
        .arg(&output)
        .args(["--algo", "dfs"])
        .arg("--config")
        .arg(&config_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "\n");

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
    let _ = std::fs::remove_file(&config_path);
}

#[test]
fn test_cli_hrd_unsolvable_writes_blank_line() {
    let input = temp_path("stuck_in.txt");
    let output = temp_path("stuck_out.txt");
    std::fs::write(&input, STUCK).unwrap();

    for algo in ["dfs", "astar"] {
        let status = Command::new(env!("CARGO_BIN_EXE_boardsearch"))
            .arg("hrd")
            .arg("--inputfile")
            .arg(&input)
            .arg("--outputfile")
            .arg(&output)
            .args(["--algo", algo])
            .status()
            .unwrap();
        assert!(status.success());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "\n");
    }

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_cli_rejects_bad_board() {
    let input = temp_path("bad_in.txt");
    let output = temp_path("bad_out.txt");
    std::fs::write(&input, "^11^\nv11v\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_boardsearch"))
        .arg("hrd")
        .arg("--inputfile")
        .arg(&input)
        .arg("--outputfile")
        .arg(&output)
        .args(["--algo", "dfs"])
        .status()
        .unwrap();
    assert!(!status.success());

    let _ = std::fs::remove_file(&input);
}
