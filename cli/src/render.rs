// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use minigo_core::{Board, MinigoGame, Player, Point};

/// Render a board as ASCII art. Row 1 is the top row (x = 0).
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    push_column_labels(&mut output, size);

    for x in 0..size {
        // Row number (1-indexed)
        output.push_str(&format!("{:2} ", x + 1));

        for y in 0..size {
            let point = Point::new(x, y);
            let symbol = match board.get(point) {
                Player::Black => "●",
                Player::White => "○",
                Player::None if is_star_point(point, size) => "*",
                Player::None => "+",
            };
            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", x + 1));
        output.push('\n');
    }

    push_column_labels(&mut output, size);
    output
}

/// Render the board followed by a one-line status
pub fn render_game(game: &MinigoGame) -> String {
    let mut output = render_board(game.board());
    output.push_str(&format!(
        "Turn {} - {} to move - Black {} / White {}",
        game.turn_count(),
        player_name(game.current_player()),
        game.black_score(),
        game.white_score(),
    ));
    if game.pass_count() == 1 {
        output.push_str(&format!(" - {} passed", player_name(game.noncurrent_player())));
    }
    output.push('\n');
    output
}

/// Display name of a player
pub fn player_name(player: Player) -> &'static str {
    match player {
        Player::Black => "Black",
        Player::White => "White",
        Player::None => "Nobody",
    }
}

fn push_column_labels(output: &mut String, size: usize) {
    output.push_str("   ");
    for y in 0..size {
        output.push_str(&format!(" {}", column_char(y)));
    }
    output.push('\n');
}

/// Convert a column index to a column character (A-Z, skipping I)
pub fn column_char(y: usize) -> char {
    let offset = if y < 8 { y } else { y + 1 };
    char::from(b'A' + (offset % 26) as u8)
}

/// Check if a point is a star point on the board
fn is_star_point(point: Point, board_size: usize) -> bool {
    let (x, y) = (point.x, point.y);

    match board_size {
        // 9x9 has star points at (2,2), (2,6), (4,4), (6,2), (6,6)
        9 => matches!((x, y), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6)),
        13 => matches!((x, y), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9)),
        19 => matches!(
            (x, y),
            (3, 3) | (3, 9) | (3, 15) |
            (9, 3) | (9, 9) | (9, 15) |
            (15, 3) | (15, 9) | (15, 15)
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_9x9_board() {
        let output = render_board(&Board::new(9));

        assert!(output.contains("A B C D E F G H J"));
        assert!(output.contains(" 1 "));
        assert!(output.contains(" 9 "));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 11); // 2 label rows + 9 board rows
        assert_eq!(output.matches('*').count(), 5);
    }

    #[test]
    fn test_render_game_with_stones() {
        let mut game = MinigoGame::new(9);
        assert!(game.place_stone_at(4, 4));
        assert!(game.place_stone_at(3, 3));
        game.pass();

        let output = render_game(&game);
        assert!(output.contains('●'));
        assert!(output.contains('○'));
        assert!(output.contains("Turn 3 - White to move"));
        assert!(output.contains("Black passed"));
    }

    #[test]
    fn test_column_char() {
        assert_eq!(column_char(0), 'A');
        assert_eq!(column_char(7), 'H');
        assert_eq!(column_char(8), 'J'); // Skip 'I'
        assert_eq!(column_char(18), 'T');
    }
}
