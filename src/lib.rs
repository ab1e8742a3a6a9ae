//! # Maze Agents Library
//!
//! Move-selection strategies for an agent in a turn-based, fully observable
//! grid game, plus a small maze game to run them on.
//!
//! Every strategy returns one legal action per decision before a per-decision
//! compute budget runs out: a random baseline, a one-ply greedy evaluator, and
//! three searches (breadth-first, depth-bounded depth-first and a cost-based
//! best-first search).
//!
//! It is used by two binaries:
//! - `play_agent`: plays one game with a chosen agent and prints every turn.
//! - `agent_evaluator`: plays every agent on a batch of seeded random mazes and
//!   compares their average scores.
//!
//! ## Modules
//! - `contract`: the `GameEngine` and `Evaluator` traits the agents search through.
//! - `budget`: the per-decision successor allowance engines enforce.
//! - `agents`: the strategies, the `Agent` trait and the shared tie-break helpers.
//! - `engine`: the maze game (`Tile`, `Board`, `MazeState`, `MazeEngine`).
//! - `heuristics`: scoring functions for maze states.
//! - `runner`: the game loop.
//! - `config`: agent tunables.
//! - `utils`: layout parsing.

pub mod agents;
pub mod budget;
pub mod config;
pub mod contract;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod runner;
pub mod utils;

pub use agents::{build_agent, Agent, AgentKind};
pub use config::{AgentConfig, BfsFallback};
pub use contract::{Action, Evaluator, GameEngine, Successor};
pub use error::{AgentError, LayoutError};
