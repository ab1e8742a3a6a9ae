//! Scoring functions for maze states.
//!
//! The agents only see these through the `Evaluator` trait; any closure
//! `Fn(&MazeState) -> f64` works just as well.

use crate::contract::{Action, Evaluator};
use crate::engine::{Board, MazeState, Tile, BOARD_SIZE};
use clap::ValueEnum;
use std::collections::VecDeque;

/// Penalty per step of maze distance used by `FoodProximityEvaluation::default()`.
pub const DEFAULT_FOOD_WEIGHT: f64 = 1.0;

/// Scores a state by its game score alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreEvaluation;

impl Evaluator<MazeState> for ScoreEvaluation {
    fn score(&self, state: &MazeState) -> f64 {
        state.score() as f64
    }
}

/// Game score minus `weight` times the maze distance to the nearest food.
///
/// Food the agent cannot reach adds no penalty, and neither does a board with
/// no food left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodProximityEvaluation {
    pub weight: f64,
}

impl Default for FoodProximityEvaluation {
    fn default() -> Self {
        FoodProximityEvaluation {
            weight: DEFAULT_FOOD_WEIGHT,
        }
    }
}

impl Evaluator<MazeState> for FoodProximityEvaluation {
    fn score(&self, state: &MazeState) -> f64 {
        let distance = nearest_food_distance(state.board(), state.agent()).unwrap_or(0);
        state.score() as f64 - self.weight * distance as f64
    }
}

/// Selects a maze evaluator by name, e.g. from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EvaluatorKind {
    #[default]
    Score,
    FoodProximity,
}

impl Evaluator<MazeState> for EvaluatorKind {
    fn score(&self, state: &MazeState) -> f64 {
        match self {
            EvaluatorKind::Score => ScoreEvaluation.score(state),
            EvaluatorKind::FoodProximity => FoodProximityEvaluation::default().score(state),
        }
    }
}

/// Number of food tiles on the board.
pub fn count_food(board: &Board) -> usize {
    board.count(Tile::Food)
}

/// Shortest walking distance from `from` to any food tile.
///
/// Walks through every passable tile, ghosts included, using a breadth-first
/// flood from `from`.
///
/// # Returns
/// `Some(0)` if `from` itself holds food, `None` if no food is reachable.
pub fn nearest_food_distance(board: &Board, from: (usize, usize)) -> Option<usize> {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut q = VecDeque::new();

    q.push_back((from, 0usize));
    visited[from.0][from.1] = true;

    while let Some((pos, dist)) = q.pop_front() {
        if board.get_tile(pos.0, pos.1) == Tile::Food {
            return Some(dist);
        }
        for action in [Action::North, Action::South, Action::East, Action::West] {
            if let Some((r, c)) = board.neighbor(pos, action) {
                if !visited[r][c] && board.get_tile(r, c).is_passable() {
                    visited[r][c] = true;
                    q.push_back(((r, c), dist + 1));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::layout_from_str_array;

    #[test]
    fn test_score_evaluation_is_game_score() {
        let state = layout_from_str_array(&["%%%%%", "%P..%", "%%%%%"]).unwrap();
        assert_eq!(ScoreEvaluation.score(&state), 0.0);
        let next = state.apply(Action::East);
        assert_eq!(ScoreEvaluation.score(&next), next.score() as f64);
    }

    #[test]
    fn test_nearest_food_distance_follows_corridors() {
        // Food is two cells away in a straight line but eight steps around the wall.
        let state = layout_from_str_array(&[
            "%%%%%%",
            "%P%.-%",
            "%-%%-%",
            "%----%",
            "%%%%%%",
        ])
        .unwrap();
        assert_eq!(nearest_food_distance(state.board(), state.agent()), Some(8));
    }

    #[test]
    fn test_nearest_food_distance_edge_cases() {
        let unreachable = layout_from_str_array(&["%%%%%", "%P%.%", "%%%%%"]).unwrap();
        assert_eq!(nearest_food_distance(unreachable.board(), unreachable.agent()), None);

        let board = layout_from_str_array(&["%%%", "%P.", "%%%"]).unwrap();
        assert_eq!(nearest_food_distance(board.board(), (1, 2)), Some(0));
        assert_eq!(count_food(board.board()), 1);
    }

    #[test]
    fn test_food_proximity_prefers_closer_food() {
        let state = layout_from_str_array(&["%%%%%%%", "%-P--.%", "%%%%%%%"]).unwrap();
        let eval = FoodProximityEvaluation { weight: 2.0 };
        let toward = state.apply(Action::East);
        let away = state.apply(Action::West);
        assert!(eval.score(&toward) > eval.score(&away));
        assert_eq!(eval.score(&toward), -1.0 - 2.0 * 2.0);
    }

    #[test]
    fn test_evaluator_kind_dispatch() {
        let state = layout_from_str_array(&["%%%%", "%P-.", "%%%%"]).unwrap();
        assert_eq!(EvaluatorKind::Score.score(&state), 0.0);
        assert_eq!(EvaluatorKind::FoodProximity.score(&state), -2.0);
    }
}
