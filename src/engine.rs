//! A small, fully observable maze game for the agents to play.
//!
//! This module defines:
//! - `Tile`: the contents of one cell (empty, wall, food or ghost).
//! - `Board`: the square grid of tiles, with random generation and terminal rendering.
//! - `MazeState`: a board plus the agent's position, score and remaining food.
//! - `MazeEngine`: the `GameEngine` implementation, owning the per-decision budget.
//!
//! Rules: every action costs one point. Stepping onto food earns 10 points and
//! removes it; eating the last food earns 500 more and wins. Stepping onto a
//! ghost costs 500 and loses. Ghosts never move.
use crate::budget::ComputeBudget;
use crate::contract::{Action, GameEngine, Successor};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Open floor.
    Empty,
    /// Impassable.
    Wall,
    /// Worth `FOOD_REWARD` when the agent steps on it.
    Food,
    /// Ends the game in a loss when the agent steps on it.
    Ghost,
}

// Interior cells only; the border is always wall.
fn generate_random_interior_tile(rng: &mut impl Rng) -> Tile {
    match rng.gen_range(0..100u8) {
        0..=14 => Tile::Wall,
        15..=54 => Tile::Food,
        55..=57 => Tile::Ghost,
        _ => Tile::Empty,
    }
}

impl Tile {
    /// Converts the tile to its layout character.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_agents::engine::Tile;
    /// assert_eq!(Tile::Wall.to_char(), '%');
    /// assert_eq!(Tile::Food.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::Empty => '-',
            Tile::Wall => '%',
            Tile::Food => '.',
            Tile::Ghost => 'G',
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Tile::Empty => "40",
            Tile::Wall => "44",
            Tile::Food => "43",
            Tile::Ghost => "41",
        }
    }

    pub fn is_passable(&self) -> bool {
        *self != Tile::Wall
    }
}

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Where the agent starts on randomly generated boards.
pub const AGENT_START: (usize, usize) = (1, 1);

pub const TIME_PENALTY: i32 = 1;
pub const FOOD_REWARD: i32 = 10;
pub const WIN_REWARD: i32 = 500;
pub const LOSE_PENALTY: i32 = 500;

/// The game board as a 2D grid of `Tile`s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every cell set to `Tile::Empty`.
    pub fn new_empty() -> Self {
        Board {
            grid: [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a reproducible random board from `seed`.
    ///
    /// The border is wall, interior cells are drawn at random and
    /// `AGENT_START` is always left empty so the agent can be placed there.
    pub fn new_random_with_seed(seed: u32) -> Self {
        let mut grid = [[Tile::Wall; BOARD_SIZE]; BOARD_SIZE];
        let mut rng = SmallRng::seed_from_u64(seed as u64);

        for row in grid.iter_mut().take(BOARD_SIZE - 1).skip(1) {
            for cell in row.iter_mut().take(BOARD_SIZE - 1).skip(1) {
                *cell = generate_random_interior_tile(&mut rng);
            }
        }
        grid[AGENT_START.0][AGENT_START.1] = Tile::Empty;
        Board { grid }
    }

    pub fn from_grid(initial_grid: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid: initial_grid }
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        self.grid[r][c]
    }

    pub fn set_tile(&mut self, r: usize, c: usize, tile: Tile) {
        self.grid[r][c] = tile;
    }

    /// The cell one step from `pos` in `action`'s direction, if it is on the board.
    pub fn neighbor(&self, pos: (usize, usize), action: Action) -> Option<(usize, usize)> {
        let (dr, dc) = action.delta();
        let r = pos.0 as isize + dr;
        let c = pos.1 as isize + dc;
        if r < 0 || c < 0 || r >= BOARD_SIZE as isize || c >= BOARD_SIZE as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }

    /// Counts the cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|t| **t == tile)
            .count()
    }

    /// Renders the board for a terminal, marking the agent's cell if given.
    ///
    /// The output has a header of column numbers, then one line per row
    /// prefixed with its row number. Colors use ANSI escape codes.
    pub fn to_string_with_agent(&self, agent: Option<(usize, usize)>) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for c_idx in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", c_idx));
        }
        output.push('\n');

        for r_idx in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", r_idx));

            for c_idx in 0..BOARD_SIZE {
                let tile = self.grid[r_idx][c_idx];
                let content = if agent == Some((r_idx, c_idx)) {
                    "()"
                } else {
                    match tile {
                        Tile::Food => "..",
                        Tile::Ghost => "GG",
                        Tile::Empty | Tile::Wall => "  ",
                    }
                };
                output.push_str(&format!(
                    "\x1b[1;{};m{}\x1b[m",
                    tile.to_ansi_color_code(),
                    content
                ));
            }
            if r_idx < BOARD_SIZE - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_agent(None))
    }
}

/// A snapshot of the maze game.
///
/// States are values: applying an action returns a new state and leaves the
/// current one untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MazeState {
    board: Board,
    agent: (usize, usize),
    score: i32,
    food_left: usize,
    steps: u32,
}

impl MazeState {
    /// Places the agent at `agent` on `board` with a zero score.
    ///
    /// If the agent starts on food it is not eaten; only moves eat food.
    pub fn new(board: Board, agent: (usize, usize)) -> Self {
        let food_left = board.count(Tile::Food);
        MazeState {
            board,
            agent,
            score: 0,
            food_left,
            steps: 0,
        }
    }

    /// A random board from `seed` with the agent at `AGENT_START`.
    pub fn new_random_with_seed(seed: u32) -> Self {
        MazeState::new(Board::new_random_with_seed(seed), AGENT_START)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agent(&self) -> (usize, usize) {
        self.agent
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn food_left(&self) -> usize {
        self.food_left
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_win(&self) -> bool {
        self.food_left == 0
    }

    pub fn is_lose(&self) -> bool {
        self.board.get_tile(self.agent.0, self.agent.1) == Tile::Ghost
    }

    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Actions the agent may take: `Stop` plus every step onto a passable cell.
    /// Terminal states have none.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        Action::ALL
            .iter()
            .copied()
            .filter(|&action| {
                action == Action::Stop
                    || self
                        .board
                        .neighbor(self.agent, action)
                        .is_some_and(|(r, c)| self.board.get_tile(r, c).is_passable())
            })
            .collect()
    }

    /// Returns the state after `action`.
    ///
    /// A step into a wall or off the board leaves the agent where it is, as if
    /// it had chosen `Stop`; the time penalty still applies.
    pub fn apply(&self, action: Action) -> MazeState {
        let mut next = self.clone();
        next.steps += 1;
        next.score -= TIME_PENALTY;

        let target = self
            .board
            .neighbor(self.agent, action)
            .filter(|&(r, c)| self.board.get_tile(r, c).is_passable())
            .unwrap_or(self.agent);
        next.agent = target;

        match next.board.get_tile(target.0, target.1) {
            Tile::Food => {
                next.board.set_tile(target.0, target.1, Tile::Empty);
                next.food_left -= 1;
                next.score += FOOD_REWARD;
                if next.food_left == 0 {
                    next.score += WIN_REWARD;
                }
            }
            Tile::Ghost => next.score -= LOSE_PENALTY,
            Tile::Empty | Tile::Wall => {}
        }
        next
    }
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board.to_string_with_agent(Some(self.agent)))
    }
}

/// Runs the maze rules for the agents and meters their successor requests.
#[derive(Clone, Debug, Default)]
pub struct MazeEngine {
    budget: ComputeBudget,
}

impl MazeEngine {
    /// An engine allowing `budget` successor requests per decision.
    pub fn new(budget: u64) -> Self {
        MazeEngine {
            budget: ComputeBudget::new(budget),
        }
    }

    pub fn budget(&self) -> &ComputeBudget {
        &self.budget
    }
}

impl GameEngine for MazeEngine {
    type State = MazeState;

    fn begin_decision(&mut self) {
        self.budget.reset();
    }

    fn legal_actions(&self, state: &MazeState) -> Vec<Action> {
        state.legal_actions()
    }

    fn successor(&mut self, state: &MazeState, action: Action) -> Successor<MazeState> {
        if !self.budget.try_spend() {
            return Successor::BudgetExhausted;
        }
        Successor::Next(state.apply(action))
    }

    fn generate_successor(&self, state: &MazeState, action: Action) -> MazeState {
        state.apply(action)
    }

    fn is_win(&self, state: &MazeState) -> bool {
        state.is_win()
    }

    fn is_lose(&self, state: &MazeState) -> bool {
        state.is_lose()
    }
}
