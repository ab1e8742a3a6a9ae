//! Tunables shared by the search agents.

use clap::ValueEnum;

/// Depth cutoff used by the depth-first agent unless configured otherwise.
pub const DEFAULT_DEPTH_CUTOFF: u32 = 17;

/// Weight of path length in the best-first cost unless configured otherwise.
pub const DEFAULT_DEPTH_COEFFICIENT: f64 = 1.0;

/// Which nodes the breadth-first agent scores when it cannot finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum BfsFallback {
    /// Only the last level whose expansion was attempted.
    #[default]
    LastLevel,
    /// Every node generated during the decision, across all levels.
    FullHistory,
}

/// Configuration for building agents.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    /// Nodes deeper than this are never expanded by the depth-first agent.
    pub depth_cutoff: u32,
    /// Trades off exploration depth against score gain in the best-first cost.
    pub depth_coefficient: f64,
    pub bfs_fallback: BfsFallback,
    /// Seed for tie-break draws. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            depth_cutoff: DEFAULT_DEPTH_CUTOFF,
            depth_coefficient: DEFAULT_DEPTH_COEFFICIENT,
            bfs_fallback: BfsFallback::default(),
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
