use crate::contract::{Action, Evaluator, GameEngine, Successor};
use rand::Rng;

use super::tie_break::{choose_extreme, Objective};

/// A state discovered during one decision, tagged with the root action that leads to it.
///
/// Only the root action survives from the path; the intermediate actions are not kept.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    pub state: S,
    pub root_action: Action,
    /// Root children have depth 1.
    pub depth: u32,
    /// Accumulated cost. Only the best-first agent fills this in.
    pub cost: f64,
}

impl<S> SearchNode<S> {
    pub fn seed(state: S, root_action: Action) -> Self {
        SearchNode {
            state,
            root_action,
            depth: 1,
            cost: 0.0,
        }
    }

    pub fn child(&self, state: S) -> Self {
        SearchNode {
            state,
            root_action: self.root_action,
            depth: self.depth + 1,
            cost: 0.0,
        }
    }
}

/// Outcome of expanding the root's legal actions into first-level nodes.
pub(crate) enum Seeding<S> {
    /// A root action leads straight to a win.
    Won(Action),
    /// First-level nodes with lose states already pruned. `exhausted` is set if
    /// the budget ran out before every root action was tried.
    Seeded {
        nodes: Vec<SearchNode<S>>,
        exhausted: bool,
    },
}

/// Generates one budgeted successor per root action.
pub(crate) fn seed_frontier<E: GameEngine>(
    engine: &mut E,
    root: &E::State,
    actions: &[Action],
) -> Seeding<E::State> {
    let mut nodes = Vec::with_capacity(actions.len());
    for &action in actions {
        match engine.successor(root, action) {
            Successor::BudgetExhausted => {
                return Seeding::Seeded {
                    nodes,
                    exhausted: true,
                }
            }
            Successor::Next(state) => {
                if engine.is_win(&state) {
                    return Seeding::Won(action);
                }
                if engine.is_lose(&state) {
                    continue;
                }
                nodes.push(SearchNode::seed(state, action));
            }
        }
    }
    Seeding::Seeded {
        nodes,
        exhausted: false,
    }
}

/// Scores every node and returns the root action of a best-scoring one.
///
/// # Returns
/// `None` if `nodes` is empty.
pub(crate) fn best_scored_action<S, V, R>(
    rng: &mut R,
    evaluator: &V,
    nodes: &[SearchNode<S>],
) -> Option<Action>
where
    V: Evaluator<S> + ?Sized,
    R: Rng + ?Sized,
{
    let scored: Vec<(f64, Action)> = nodes
        .iter()
        .map(|node| (evaluator.score(&node.state), node.root_action))
        .collect();
    choose_extreme(rng, scored, Objective::Maximize)
}
