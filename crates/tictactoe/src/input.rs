//! Keyboard navigation on the board.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Moves the cursor one square for an arrow key.
///
/// The cursor stops at the board edge; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() as i64, cursor.col() as i64);
    let (row, col) = match key {
        KeyCode::Up => (row - 1, col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col - 1),
        KeyCode::Right => (row, col + 1),
        _ => return cursor,
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps keypad digits 1-9 to positions in row-major order.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
