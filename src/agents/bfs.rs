//! Level-order search under a per-decision budget.
//!
//! The first level holds one node per legal root action. Each round expands
//! every node of the current level into the next one. Lose successors are
//! pruned as they appear and a win successor ends the decision at once with the
//! root action of its path. If the budget runs out while a level is being
//! expanded, the partial level is abandoned and the agent scores the nodes kept
//! by its [`BfsFallback`] policy instead.

use log::{debug, trace};
use rand::rngs::SmallRng;

use super::node::{best_scored_action, seed_frontier, SearchNode, Seeding};
use super::{default_action, root_actions, seeded_rng, Agent};
use crate::config::BfsFallback;
use crate::contract::{Action, Evaluator, GameEngine, Successor};
use crate::error::AgentError;

pub struct BfsAgent<V> {
    evaluator: V,
    fallback: BfsFallback,
    rng: SmallRng,
}

enum LevelExpansion<S> {
    Won(Action),
    /// Every node of the level was expanded.
    Complete(Vec<SearchNode<S>>),
    /// The budget ran out part-way; holds what was generated before that.
    Interrupted(Vec<SearchNode<S>>),
}

fn expand_level<E: GameEngine>(
    engine: &mut E,
    level: &[SearchNode<E::State>],
) -> LevelExpansion<E::State> {
    let mut next = Vec::new();
    for node in level {
        for action in engine.legal_actions(&node.state) {
            match engine.successor(&node.state, action) {
                Successor::BudgetExhausted => return LevelExpansion::Interrupted(next),
                Successor::Next(state) => {
                    if engine.is_win(&state) {
                        return LevelExpansion::Won(node.root_action);
                    }
                    if engine.is_lose(&state) {
                        continue;
                    }
                    next.push(node.child(state));
                }
            }
        }
    }
    LevelExpansion::Complete(next)
}

impl<V> BfsAgent<V> {
    /// Creates a breadth-first agent.
    ///
    /// # Arguments
    /// * `evaluator`: Scores the fallback candidates when no win is found.
    /// * `fallback`: Which generated nodes are scored once the search stops.
    /// * `seed`: Seed for tie-breaks between equally scored nodes, or `None` for entropy.
    ///
    /// # Returns
    /// A `BfsAgent` ready for its first decision.
    pub fn new(evaluator: V, fallback: BfsFallback, seed: Option<u64>) -> Self {
        BfsAgent {
            evaluator,
            fallback,
            rng: seeded_rng(seed),
        }
    }

    /// Runs the level-order search and returns either a winning root action or
    /// the nodes to score.
    fn search<E>(
        &self,
        engine: &mut E,
        root: &E::State,
        actions: &[Action],
    ) -> Result<Action, Vec<SearchNode<E::State>>>
    where
        E: GameEngine,
    {
        let keep_history = self.fallback == BfsFallback::FullHistory;
        let (mut level, mut exhausted) = match seed_frontier(engine, root, actions) {
            Seeding::Won(action) => return Ok(action),
            Seeding::Seeded { nodes, exhausted } => (nodes, exhausted),
        };
        let mut history: Vec<SearchNode<E::State>> = Vec::new();
        let mut depth = 1;

        while !exhausted {
            match expand_level(engine, &level) {
                LevelExpansion::Won(action) => {
                    debug!("bfs: win found below depth {}", depth);
                    return Ok(action);
                }
                LevelExpansion::Complete(next) => {
                    if next.is_empty() {
                        debug!("bfs: search space exhausted at depth {}", depth);
                        break;
                    }
                    trace!("bfs: level {} has {} nodes", depth + 1, next.len());
                    let expanded = std::mem::replace(&mut level, next);
                    if keep_history {
                        history.extend(expanded);
                    }
                    depth += 1;
                }
                LevelExpansion::Interrupted(partial) => {
                    if keep_history {
                        history.extend(partial);
                    }
                    exhausted = true;
                }
            }
        }

        if exhausted {
            debug!("bfs: budget exhausted while expanding depth {}", depth);
        }
        if keep_history {
            history.extend(level);
            Err(history)
        } else {
            Err(level)
        }
    }
}

impl<E, V> Agent<E> for BfsAgent<V>
where
    E: GameEngine,
    V: Evaluator<E::State>,
{
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError> {
        engine.begin_decision();
        let actions = root_actions(engine, state)?;
        let candidates = match self.search(engine, state, &actions) {
            Ok(action) => return Ok(action),
            Err(candidates) => candidates,
        };
        debug!("bfs: scoring {} candidate nodes", candidates.len());
        Ok(
            best_scored_action(&mut self.rng, &self.evaluator, &candidates)
                .unwrap_or_else(|| default_action(&actions)),
        )
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
