//! Depth-bounded, budget-aware depth-first search.
//!
//! The recursion of textbook DFS is replaced by an explicit stack holding the
//! current path, bottom frame first. Each frame keeps the actions it has not
//! tried yet and gives up one per step, so the search can stop between any two
//! successor requests when the budget runs out and still fall back to scoring
//! everything it has seen.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use super::node::{best_scored_action, SearchNode};
use super::{default_action, root_actions, seeded_rng, Agent};
use crate::contract::{Action, Evaluator, GameEngine, Successor};
use crate::error::AgentError;

pub struct DfsAgent<V> {
    evaluator: V,
    depth_cutoff: u32,
    rng: SmallRng,
}

/// One entry of the path stack.
struct Frame<S> {
    state: S,
    /// `None` only for the root frame.
    root_action: Option<Action>,
    depth: u32,
    untried: Vec<Action>,
}

impl<V> DfsAgent<V> {
    /// Creates a depth-first agent.
    ///
    /// # Arguments
    /// * `evaluator`: Scores the explored history when no win is found.
    /// * `depth_cutoff`: Deepest depth that is still expanded. The root is depth 0,
    ///   so `0` only generates the root's children.
    /// * `seed`: Seed for the action order and tie-breaks, or `None` for entropy.
    ///
    /// # Returns
    /// A `DfsAgent` ready for its first decision.
    pub fn new(evaluator: V, depth_cutoff: u32, seed: Option<u64>) -> Self {
        DfsAgent {
            evaluator,
            depth_cutoff,
            rng: seeded_rng(seed),
        }
    }

    pub fn depth_cutoff(&self) -> u32 {
        self.depth_cutoff
    }

    /// Runs the search and returns either a winning root action or the explored history.
    fn search<E>(
        &mut self,
        engine: &mut E,
        root: &E::State,
        actions: Vec<Action>,
    ) -> Result<Action, Vec<SearchNode<E::State>>>
    where
        E: GameEngine,
    {
        let mut history: Vec<SearchNode<E::State>> = Vec::new();
        let mut stack = vec![Frame {
            state: root.clone(),
            root_action: None,
            depth: 0,
            untried: actions,
        }];

        while let Some(top) = stack.last_mut() {
            if top.depth > self.depth_cutoff {
                stack.pop();
                continue;
            }
            if top.untried.is_empty() {
                stack.pop();
                continue;
            }

            let index = self.rng.gen_range(0..top.untried.len());
            let action = top.untried.swap_remove(index);
            let root_action = top.root_action.unwrap_or(action);
            let depth = top.depth + 1;

            let state = match engine.successor(&top.state, action) {
                Successor::BudgetExhausted => {
                    debug!(
                        "dfs: budget exhausted with {} frames on the stack, {} nodes explored",
                        stack.len(),
                        history.len()
                    );
                    return Err(history);
                }
                Successor::Next(state) => state,
            };
            if engine.is_win(&state) {
                debug!("dfs: win found at depth {}", depth);
                return Ok(root_action);
            }
            if engine.is_lose(&state) {
                continue;
            }

            let untried = engine.legal_actions(&state);
            history.push(SearchNode {
                state: state.clone(),
                root_action,
                depth,
                cost: 0.0,
            });
            stack.push(Frame {
                state,
                root_action: Some(root_action),
                depth,
                untried,
            });
        }

        debug!("dfs: stack emptied after exploring {} nodes", history.len());
        Err(history)
    }
}

impl<E, V> Agent<E> for DfsAgent<V>
where
    E: GameEngine,
    V: Evaluator<E::State>,
{
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError> {
        engine.begin_decision();
        let actions = root_actions(engine, state)?;
        let history = match self.search(engine, state, actions.clone()) {
            Ok(action) => return Ok(action),
            Err(history) => history,
        };
        Ok(
            best_scored_action(&mut self.rng, &self.evaluator, &history)
                .unwrap_or_else(|| default_action(&actions)),
        )
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}
