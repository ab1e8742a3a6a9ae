//! Move-selection strategies.
//!
//! Every agent implements [`Agent`]: the game loop calls
//! [`Agent::register_initial_state`] once per game and [`Agent::get_action`]
//! once per frame. The search agents open a fresh budget window on the engine
//! at the start of each decision and build every frontier, stack and history
//! from scratch, so nothing but the tie-break random number generator carries
//! over between decisions.
//!
//! - [`RandomAgent`]: uniform choice among legal actions.
//! - [`GreedyAgent`]: one-ply lookahead on the evaluator.
//! - [`BfsAgent`]: level-order search with a scoring fallback.
//! - [`DfsAgent`]: explicit-stack depth-first search with a depth cutoff.
//! - [`AStarAgent`]: best-first search on a depth/score-gain cost.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;
pub mod node;
pub mod random;
pub mod tie_break;

#[cfg(test)]
pub(crate) mod test_support;

pub use astar::AStarAgent;
pub use bfs::BfsAgent;
pub use dfs::DfsAgent;
pub use greedy::GreedyAgent;
pub use node::SearchNode;
pub use random::RandomAgent;

use crate::config::AgentConfig;
use crate::contract::{Action, Evaluator, GameEngine};
use crate::error::AgentError;
use clap::ValueEnum;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The entry points a game loop uses to drive an agent.
pub trait Agent<E: GameEngine> {
    /// Called once when a game starts. All strategies here ignore it.
    fn register_initial_state(&mut self, _engine: &E, _state: &E::State) {}

    /// Picks one legal action for `state`.
    ///
    /// # Errors
    /// [`AgentError::InvalidState`] if `state` has no legal actions.
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError>;

    fn name(&self) -> &'static str;
}

/// Selects a strategy by name, e.g. from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum AgentKind {
    Random,
    Greedy,
    Bfs,
    Dfs,
    Astar,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Random,
        AgentKind::Greedy,
        AgentKind::Bfs,
        AgentKind::Dfs,
        AgentKind::Astar,
    ];
}

/// Builds a boxed agent of the requested kind.
///
/// The random agent ignores `evaluator`.
pub fn build_agent<E, V>(kind: AgentKind, config: &AgentConfig, evaluator: V) -> Box<dyn Agent<E>>
where
    E: GameEngine,
    V: Evaluator<E::State> + 'static,
{
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
        AgentKind::Greedy => Box::new(GreedyAgent::new(evaluator, config.seed)),
        AgentKind::Bfs => Box::new(BfsAgent::new(evaluator, config.bfs_fallback, config.seed)),
        AgentKind::Dfs => Box::new(DfsAgent::new(evaluator, config.depth_cutoff, config.seed)),
        AgentKind::Astar => Box::new(AStarAgent::new(
            evaluator,
            config.depth_coefficient,
            config.seed,
        )),
    }
}

/// The action returned when a search ends with no candidate at all.
///
/// `Stop` if it is legal at the root, otherwise the first legal root action.
pub fn default_action(legal_root_actions: &[Action]) -> Action {
    if legal_root_actions.contains(&Action::Stop) {
        Action::Stop
    } else {
        legal_root_actions.first().copied().unwrap_or(Action::Stop)
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Legal actions at the root of a decision. An empty set is a caller error.
pub(crate) fn root_actions<E: GameEngine>(
    engine: &E,
    state: &E::State,
) -> Result<Vec<Action>, AgentError> {
    let actions = engine.legal_actions(state);
    if actions.is_empty() {
        return Err(AgentError::no_legal_actions());
    }
    Ok(actions)
}
