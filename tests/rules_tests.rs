//! Match detection, gravity and scoring integration tests.
//!
//! These tests exercise the rules layer directly on hand-built boards,
//! without an engine around them.

use rune_match::cascade::{CascadeEvent, CascadeResolver};
use rune_match::core::{Board, EngineConfig, GameState, Position, RuneType, ScriptedRunes};
use rune_match::rules::{compact, detect, find_runs, Orientation, ScoreAccumulator};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

/// Row 0 opens with three fire runes; nothing else lines up.
fn fire_row_board() -> Board {
    Board::parse(&[
        "fffwaels",
        "elsfwael",
        "waelsfwa",
        "sfwaelsf",
        "aelsfwae",
        "lsfwaels",
        "fwaelsfw",
        "elsfwael",
    ])
    .unwrap()
}

// =============================================================================
// Detection Tests
// =============================================================================

/// Test that a leading triple in row 0 is the only match.
#[test]
fn test_detect_fire_triple_in_first_row() {
    let board = fire_row_board();
    assert_eq!(board.get(pos(0, 3)), Some(RuneType::Water));

    let matches = detect(&board);
    assert_eq!(matches.sorted(), vec![pos(0, 0), pos(0, 1), pos(0, 2)]);
}

/// Test that one detection pass scores 150 and empties exactly the run.
#[test]
fn test_clearing_fire_triple_scores_150() {
    let mut state = GameState::new(fire_row_board(), &EngineConfig::default());
    let mut source = ScriptedRunes::cycling();

    CascadeResolver::begin(&mut state);
    CascadeResolver::step(&mut state, &mut source);
    let cleared = CascadeResolver::step(&mut state, &mut source);

    assert!(matches!(
        cleared,
        Some(CascadeEvent::Cleared {
            cleared: 3,
            points: 150,
            ..
        })
    ));
    assert_eq!(state.score(), 150);
    for col in 0..3 {
        assert_eq!(state.board().get(pos(0, col)), None);
    }
    assert_eq!(state.board().populated_count(), 61);
    assert_eq!(source.drawn(), 0);
}

/// Test that an L shape yields the union of both runs, corner counted once.
#[test]
fn test_detect_overlapping_runs_union() {
    let board = Board::parse(&[
        "eeewaels",
        "elsfwael",
        "ealsfwaw",
        "sfwaelsf",
        "aelsfwae",
        "lsfwaels",
        "fwaelsfw",
        "elsfwael",
    ])
    .unwrap();

    let matches = detect(&board);
    assert_eq!(
        matches.sorted(),
        vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 0), pos(2, 0)]
    );

    let runs = find_runs(&board);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].orientation, Orientation::Horizontal);
    assert_eq!(runs[1].orientation, Orientation::Vertical);
    assert_eq!(runs[1].start, pos(0, 0));
}

/// Test that a run of five is reported once, at full length.
#[test]
fn test_find_runs_reports_maximal_length() {
    let board = Board::parse(&[
        "fwaelsfw",
        "aelsfwae",
        "lsfwaels",
        "fwaelsfw",
        "aellllle",
        "lsfwaels",
        "fwaelsfw",
        "aelsfwae",
    ])
    .unwrap();

    let runs = find_runs(&board);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].rune, RuneType::Light);
    assert_eq!(runs[0].length, 5);
    assert_eq!(runs[0].start, pos(4, 2));
    assert_eq!(detect(&board).len(), 5);
}

/// Test that empty cells never form a run.
#[test]
fn test_empty_board_has_no_matches() {
    assert!(detect(&Board::empty()).is_empty());
    assert!(find_runs(&Board::empty()).is_empty());
}

// =============================================================================
// Gravity Tests
// =============================================================================

/// Test that a cleared vertical run pulls everything above it down.
#[test]
fn test_compact_after_vertical_clear() {
    let mut board = Board::parse(&[
        "fwaelsfw",
        "aelsfwae",
        "lsfwaels",
        "fwaelsfw",
        "aelsf.ae",
        "lsfwa.ls",
        "fwael.fw",
        "aelsfwae",
    ])
    .unwrap();
    let mut source =
        ScriptedRunes::new(vec![RuneType::Fire, RuneType::Water, RuneType::Wind]).unwrap();

    let report = compact(&mut board, &mut source);

    assert!(board.is_full());
    assert_eq!(report.refilled.as_slice(), &[pos(0, 5), pos(1, 5), pos(2, 5)]);
    assert_eq!(
        report.drops,
        vec![
            (pos(3, 5), pos(6, 5)),
            (pos(2, 5), pos(5, 5)),
            (pos(1, 5), pos(4, 5)),
            (pos(0, 5), pos(3, 5)),
        ]
    );
    // Survivors keep their order: s, w, e, s from the top
    assert_eq!(
        board.column(5),
        [
            Some(RuneType::Fire),
            Some(RuneType::Water),
            Some(RuneType::Wind),
            Some(RuneType::Shadow),
            Some(RuneType::Water),
            Some(RuneType::Earth),
            Some(RuneType::Shadow),
            Some(RuneType::Water),
        ]
    );
}

/// Test that a full board compacts to itself and draws nothing.
#[test]
fn test_compact_full_board_is_noop() {
    let mut board = fire_row_board();
    let before = board.clone();
    let mut source = ScriptedRunes::cycling();

    let report = compact(&mut board, &mut source);

    assert_eq!(board, before);
    assert!(report.drops.is_empty());
    assert_eq!(report.refill_count(), 0);
    assert_eq!(source.drawn(), 0);
}

// =============================================================================
// Scoring Tests
// =============================================================================

/// Test that points scale with the configured rate.
#[test]
fn test_score_accumulator_custom_rate() {
    let mut score = ScoreAccumulator::new(10);
    assert_eq!(score.award(4), 40);
    assert_eq!(score.award(3), 30);
    assert_eq!(score.total(), 70);
}
