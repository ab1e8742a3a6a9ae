use crate::engine::{Board, MazeState, Tile, BOARD_SIZE};
use crate::error::LayoutError;

/// Parses a maze layout, one string slice per row starting from row 0.
///
/// The board is `BOARD_SIZE` x `BOARD_SIZE`. Rows or columns missing from the
/// input are filled with `Tile::Wall`, so a short layout is enclosed by walls.
///
/// Valid characters:
/// - '%': `Tile::Wall`
/// - '.': `Tile::Food`
/// - '-': `Tile::Empty`
/// - 'G': `Tile::Ghost`
/// - 'P': the agent's start position (an empty cell). Exactly one is required.
///
/// # Errors
/// A `LayoutError` if there are more than `BOARD_SIZE` rows, a row is longer
/// than `BOARD_SIZE` characters, a character is not recognized, or the agent
/// start is missing or repeated.
///
/// # Examples
/// ```
/// use maze_agents::utils::layout_from_str_array;
/// use maze_agents::engine::Tile;
///
/// let state = layout_from_str_array(&["%%%", "%P.", "%G-"]).unwrap();
/// assert_eq!(state.agent(), (1, 1));
/// assert_eq!(state.board().get_tile(1, 2), Tile::Food);
/// assert_eq!(state.board().get_tile(2, 1), Tile::Ghost);
/// assert_eq!(state.food_left(), 1);
///
/// assert!(layout_from_str_array(&["%X%"]).is_err());
/// ```
pub fn layout_from_str_array(s: &[&str]) -> Result<MazeState, LayoutError> {
    if s.len() > BOARD_SIZE {
        return Err(LayoutError::TooManyRows {
            max: BOARD_SIZE,
            found: s.len(),
        });
    }

    let mut grid = [[Tile::Wall; BOARD_SIZE]; BOARD_SIZE];
    let mut agent: Option<(usize, usize)> = None;

    for (r, row_str) in s.iter().enumerate() {
        let row_len = row_str.chars().count();
        if row_len > BOARD_SIZE {
            return Err(LayoutError::RowTooLong {
                row: r,
                max: BOARD_SIZE,
                found: row_len,
            });
        }

        for (c, ch) in row_str.chars().enumerate() {
            grid[r][c] = match ch {
                '%' => Tile::Wall,
                '.' => Tile::Food,
                '-' => Tile::Empty,
                'G' => Tile::Ghost,
                'P' => {
                    if agent.is_some() {
                        return Err(LayoutError::DuplicateAgent { row: r, col: c });
                    }
                    agent = Some((r, c));
                    Tile::Empty
                }
                _ => return Err(LayoutError::UnrecognizedTile { ch, row: r, col: c }),
            };
        }
    }

    let agent = agent.ok_or(LayoutError::MissingAgent)?;
    Ok(MazeState::new(Board::from_grid(grid), agent))
}

/// Serializes a state back into layout rows, the inverse of [`layout_from_str_array`].
pub fn layout_to_strings(state: &MazeState) -> Vec<String> {
    (0..BOARD_SIZE)
        .map(|r| {
            (0..BOARD_SIZE)
                .map(|c| {
                    if state.agent() == (r, c) {
                        'P'
                    } else {
                        state.board().get_tile(r, c).to_char()
                    }
                })
                .collect()
        })
        .collect()
}
