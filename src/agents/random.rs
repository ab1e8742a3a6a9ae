use rand::rngs::SmallRng;
use rand::Rng;

use super::{root_actions, seeded_rng, Agent};
use crate::contract::{Action, GameEngine};
use crate::error::AgentError;

/// Baseline agent: picks uniformly among the legal actions. No search, no scoring.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        RandomAgent {
            rng: seeded_rng(seed),
        }
    }
}

impl<E: GameEngine> Agent<E> for RandomAgent {
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError> {
        let actions = root_actions(engine, state)?;
        if actions.len() == 1 {
            return Ok(actions[0]);
        }
        Ok(actions[self.rng.gen_range(0..actions.len())])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
