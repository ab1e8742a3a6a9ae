//! The game loop: asks an agent for one action per frame and applies it.

use crate::agents::Agent;
use crate::contract::{Action, GameEngine};
use crate::error::AgentError;
use log::{debug, info};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    /// A non-terminal state with no legal action.
    Stuck,
    /// `max_turns` actions were played without reaching a terminal state.
    TurnLimit,
}

/// Summary of a finished game.
#[derive(Clone, Debug)]
pub struct GameRecord<S> {
    pub outcome: Outcome,
    pub final_state: S,
    /// Actions played, in order.
    pub actions: Vec<Action>,
}

impl<S> GameRecord<S> {
    pub fn turns(&self) -> usize {
        self.actions.len()
    }
}

/// Plays one game from `initial` until it ends or `max_turns` actions have been played.
///
/// The agent's initialization hook runs once before the first turn. Each
/// chosen action is applied with the engine's unbudgeted transition, and
/// `observer` sees the state each action was chosen in along with the action.
///
/// # Errors
/// Propagates the agent's error if it rejects a state.
pub fn play_game<E, A, F>(
    engine: &mut E,
    initial: E::State,
    agent: &mut A,
    max_turns: usize,
    mut observer: F,
) -> Result<GameRecord<E::State>, AgentError>
where
    E: GameEngine,
    A: Agent<E> + ?Sized,
    F: FnMut(&E::State, Action),
{
    agent.register_initial_state(engine, &initial);

    let mut state = initial;
    let mut actions = Vec::new();
    let outcome = loop {
        if engine.is_win(&state) {
            break Outcome::Won;
        }
        if engine.is_lose(&state) {
            break Outcome::Lost;
        }
        if engine.legal_actions(&state).is_empty() {
            break Outcome::Stuck;
        }
        if actions.len() >= max_turns {
            break Outcome::TurnLimit;
        }

        let action = agent.get_action(engine, &state)?;
        debug!("turn {}: {} chose {}", actions.len() + 1, agent.name(), action);
        observer(&state, action);
        state = engine.generate_successor(&state, action);
        actions.push(action);
    };

    info!(
        "{} finished after {} turns: {:?}",
        agent.name(),
        actions.len(),
        outcome
    );
    Ok(GameRecord {
        outcome,
        final_state: state,
        actions,
    })
}
