use log::debug;
use rand::rngs::SmallRng;

use super::tie_break::{choose_extreme, Objective};
use super::{default_action, root_actions, seeded_rng, Agent};
use crate::contract::{Action, Evaluator, GameEngine};
use crate::error::AgentError;

/// One-ply lookahead: scores the immediate successor of every legal action and
/// returns a best one, ties broken uniformly at random.
///
/// The lookahead uses the unbudgeted transition, so the budget never limits it.
pub struct GreedyAgent<V> {
    evaluator: V,
    rng: SmallRng,
}

impl<V> GreedyAgent<V> {
    pub fn new(evaluator: V, seed: Option<u64>) -> Self {
        GreedyAgent {
            evaluator,
            rng: seeded_rng(seed),
        }
    }
}

impl<E, V> Agent<E> for GreedyAgent<V>
where
    E: GameEngine,
    V: Evaluator<E::State>,
{
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError> {
        let actions = root_actions(engine, state)?;
        let scored: Vec<(f64, Action)> = actions
            .iter()
            .map(|&action| {
                let next = engine.generate_successor(state, action);
                (self.evaluator.score(&next), action)
            })
            .collect();
        debug!("greedy: scored {} successors", scored.len());
        Ok(choose_extreme(&mut self.rng, scored, Objective::Maximize)
            .unwrap_or_else(|| default_action(&actions)))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
