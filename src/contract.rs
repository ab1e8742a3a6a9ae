//! The narrow contract between the search agents and a game engine.
//!
//! Agents only ever see a game through [`GameEngine`] and score states through
//! [`Evaluator`]. Anything implementing these traits can be searched, which is
//! how the synthetic graphs in the unit tests and the maze in `engine` share
//! the same agents.

use std::fmt;

/// A movement direction for the acting agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// Every action, in the order engines enumerate them.
    pub const ALL: [Action; 5] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Stop,
    ];

    /// Row and column offset of a single step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::East => (0, 1),
            Action::West => (0, -1),
            Action::Stop => (0, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        };
        f.write_str(name)
    }
}

/// Result of a budgeted successor request.
#[derive(Clone, Debug, PartialEq)]
pub enum Successor<S> {
    /// The state reached by applying the action.
    Next(S),
    /// The decision's budget is spent. Callers must stop exploring and never retry.
    BudgetExhausted,
}

/// Rules of the game as seen by a search agent.
pub trait GameEngine {
    /// Immutable snapshot of the world. Searches hold many of these at once.
    type State: Clone;

    /// Opens a fresh per-decision budget window.
    fn begin_decision(&mut self) {}

    /// Actions available to the acting agent. Empty only at terminal states.
    fn legal_actions(&self, state: &Self::State) -> Vec<Action>;

    /// Applies `action`, consuming one unit of the current decision's budget.
    fn successor(&mut self, state: &Self::State, action: Action) -> Successor<Self::State>;

    /// Applies `action` outside the budget. Used for single-ply lookahead and by
    /// the game loop itself.
    fn generate_successor(&self, state: &Self::State, action: Action) -> Self::State;

    fn is_win(&self, state: &Self::State) -> bool;

    fn is_lose(&self, state: &Self::State) -> bool;
}

/// Maps a state to a desirability score. Higher is better.
pub trait Evaluator<S> {
    fn score(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn score(&self, state: &S) -> f64 {
        self(state)
    }
}
