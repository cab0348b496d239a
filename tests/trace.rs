use circuit_tracer::{Board, Error, Position, TraceState};

fn board() -> Board {
    "3 3\n1 O X\nO O O\nX O 2\n".parse().unwrap()
}

#[test]
fn seed_next_to_start() {
    let board = board();
    let trace = TraceState::seed(&board, Position::new(0, 1)).unwrap();

    assert_eq!(trace.path(), &[Position::new(0, 1)]);
    assert_eq!(trace.path_len(), 1);
    assert_eq!(*trace.head(), Position::new(0, 1));
    assert!(!trace.is_complete());
}

#[test]
fn seed_rejects_far_or_blocked_positions() {
    let board = board();

    assert_eq!(
        TraceState::seed(&board, Position::new(1, 1)).unwrap_err(),
        Error::NonAdjacentExtension(Position::new(0, 0), Position::new(1, 1))
    );

    let board: Board = "2 2\n1 X\nO 2\n".parse().unwrap();
    assert_eq!(
        TraceState::seed(&board, Position::new(0, 1)).unwrap_err(),
        Error::BlockedExtension(Position::new(0, 1))
    );
}

#[test]
fn extend_leaves_parent_untouched() {
    let board = board();
    let parent = TraceState::seed(&board, Position::new(1, 0)).unwrap();
    let right = parent.extend(Position::new(1, 1)).unwrap();
    let down = right.extend(Position::new(2, 1)).unwrap();
    let across = right.extend(Position::new(1, 2)).unwrap();

    assert_eq!(parent.path_len(), 1);
    assert_eq!(right.path_len(), 2);
    assert_eq!(*parent.head(), Position::new(1, 0));
    assert_eq!(*right.head(), Position::new(1, 1));
    assert_eq!(*down.head(), Position::new(2, 1));
    assert_eq!(*across.head(), Position::new(1, 2));
    assert_eq!(
        down.path(),
        &[Position::new(1, 0), Position::new(1, 1), Position::new(2, 1)]
    );
    assert_eq!(
        across.path(),
        &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
    );
    assert!(parent.is_open(&Position::new(1, 1)));
    assert!(!right.is_open(&Position::new(1, 1)));
}

#[test]
fn extend_rejects_invalid_steps() {
    let board = board();
    let trace = TraceState::seed(&board, Position::new(0, 1))
        .and_then(|t| t.extend(Position::new(1, 1)))
        .unwrap();

    assert_eq!(
        trace.extend(Position::new(0, 1)).unwrap_err(),
        Error::RevisitExtension(Position::new(0, 1))
    );
    assert_eq!(
        trace.extend(Position::new(2, 2)).unwrap_err(),
        Error::NonAdjacentExtension(Position::new(1, 1), Position::new(2, 2))
    );

    let trace = TraceState::seed(&board, Position::new(1, 0)).unwrap();
    assert_eq!(
        trace.extend(Position::new(2, 0)).unwrap_err(),
        Error::BlockedExtension(Position::new(2, 0))
    );
    assert_eq!(
        trace.extend(Position::new(0, 0)).unwrap_err(),
        Error::BlockedExtension(Position::new(0, 0))
    );
}

#[test]
fn is_open_checks_board_and_visited_cells() {
    let board = board();
    let trace = TraceState::seed(&board, Position::new(0, 1)).unwrap();

    assert!(trace.is_open(&Position::new(1, 1)));
    assert!(trace.is_open(&Position::new(2, 2)));
    assert!(!trace.is_open(&Position::new(0, 1)));
    assert!(!trace.is_open(&Position::new(0, 2)));
    assert!(!trace.is_open(&Position::new(0, 0)));
    assert!(!trace.is_open(&Position::new(3, 0)));
}

#[test]
fn complete_when_reaching_end() {
    let board = board();
    let trace = [Position::new(1, 1), Position::new(1, 2), Position::new(2, 2)]
        .into_iter()
        .try_fold(
            TraceState::seed(&board, Position::new(0, 1)).unwrap(),
            |trace, pos| trace.extend(pos),
        )
        .unwrap();

    assert!(trace.is_complete());
    assert_eq!(trace.path_len(), 4);
}

#[test]
fn display_marks_trace_on_board() {
    let board = board();
    let trace = TraceState::seed(&board, Position::new(1, 0))
        .and_then(|t| t.extend(Position::new(1, 1)))
        .and_then(|t| t.extend(Position::new(2, 1)))
        .unwrap();

    assert_eq!(trace.to_string(), "1   X\nT T  \nX T 2\n");
}
