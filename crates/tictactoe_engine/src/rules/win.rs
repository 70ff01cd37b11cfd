//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines, in evaluation order.
///
/// Rows and columns are interleaved (row 0, column 0, row 1, column 1, ...)
/// with the two diagonals last. The order decides which mark is reported
/// when a board holds more than one completed line.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let first = board.get(a);
        match first {
            Square::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Whether placing `mark` at `pos` would complete a line for `mark`.
///
/// `pos` must be empty; an occupied square never completes a line.
/// The board itself is left untouched.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    board.is_empty(pos) && check_winner(&board.with(pos, mark)) == Some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, mark)| board.with(*pos, *mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Player),
            (Position::TopCenter, Mark::Player),
            (Position::TopRight, Mark::Player),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Player));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::Bot),
            (Position::Center, Mark::Bot),
            (Position::BottomLeft, Mark::Bot),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::Bot,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Player),
            (Position::TopCenter, Mark::Player),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_parallel_lines_report_first_in_scan_order() {
        // Unreachable by legal play, but the result must be stable.
        let rows = board_with(&[
            (Position::MiddleLeft, Mark::Bot),
            (Position::Center, Mark::Bot),
            (Position::MiddleRight, Mark::Bot),
            (Position::BottomLeft, Mark::Player),
            (Position::BottomCenter, Mark::Player),
            (Position::BottomRight, Mark::Player),
        ]);
        assert_eq!(check_winner(&rows), Some(Mark::Bot));

        let columns = board_with(&[
            (Position::TopRight, Mark::Bot),
            (Position::MiddleRight, Mark::Bot),
            (Position::BottomRight, Mark::Bot),
            (Position::TopCenter, Mark::Player),
            (Position::Center, Mark::Player),
            (Position::BottomCenter, Mark::Player),
        ]);
        assert_eq!(check_winner(&columns), Some(Mark::Player));
    }

    #[test]
    fn test_completes_line_does_not_mutate() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Bot),
            (Position::TopCenter, Mark::Bot),
        ]);
        assert!(completes_line(&board, Position::TopRight, Mark::Bot));
        assert!(!completes_line(&board, Position::TopRight, Mark::Player));
        assert!(!completes_line(&board, Position::TopLeft, Mark::Bot));
        assert!(board.is_empty(Position::TopRight));
    }
}
