//! Synthetic engines for exercising the agents on known graphs.

use std::collections::{HashMap, HashSet};

use crate::budget::ComputeBudget;
use crate::contract::{Action, GameEngine, Successor};

/// A finite directed graph over `u32` states with explicit wins, loses and scores.
#[derive(Clone, Debug)]
pub(crate) struct GraphEngine {
    edges: HashMap<u32, Vec<(Action, u32)>>,
    wins: HashSet<u32>,
    loses: HashSet<u32>,
    scores: HashMap<u32, f64>,
    budget: ComputeBudget,
    calls: u64,
    expanded: Vec<u32>,
}

impl GraphEngine {
    pub(crate) fn new(budget: u64) -> Self {
        GraphEngine {
            edges: HashMap::new(),
            wins: HashSet::new(),
            loses: HashSet::new(),
            scores: HashMap::new(),
            budget: ComputeBudget::new(budget),
            calls: 0,
            expanded: Vec::new(),
        }
    }

    pub(crate) fn edge(mut self, from: u32, action: Action, to: u32) -> Self {
        self.edges.entry(from).or_default().push((action, to));
        self
    }

    pub(crate) fn win(mut self, state: u32) -> Self {
        self.wins.insert(state);
        self
    }

    pub(crate) fn lose(mut self, state: u32) -> Self {
        self.loses.insert(state);
        self
    }

    pub(crate) fn score(mut self, state: u32, score: f64) -> Self {
        self.scores.insert(state, score);
        self
    }

    /// Scores from the table; unlisted states score 0.
    pub(crate) fn evaluator(&self) -> impl Fn(&u32) -> f64 + Clone + 'static {
        let scores = self.scores.clone();
        move |state: &u32| scores.get(state).copied().unwrap_or(0.0)
    }

    /// Budgeted successor requests granted or refused since construction.
    pub(crate) fn successor_calls(&self) -> u64 {
        self.calls
    }

    /// States whose successors were requested and granted, in order.
    pub(crate) fn expanded(&self) -> &[u32] {
        &self.expanded
    }

    fn target(&self, state: u32, action: Action) -> u32 {
        self.edges
            .get(&state)
            .and_then(|out| out.iter().find(|(a, _)| *a == action))
            .map(|(_, to)| *to)
            .unwrap_or(state)
    }
}

impl GameEngine for GraphEngine {
    type State = u32;

    fn begin_decision(&mut self) {
        self.budget.reset();
    }

    fn legal_actions(&self, state: &u32) -> Vec<Action> {
        if self.wins.contains(state) || self.loses.contains(state) {
            return Vec::new();
        }
        self.edges
            .get(state)
            .map(|out| out.iter().map(|(a, _)| *a).collect())
            .unwrap_or_default()
    }

    fn successor(&mut self, state: &u32, action: Action) -> Successor<u32> {
        self.calls += 1;
        if !self.budget.try_spend() {
            return Successor::BudgetExhausted;
        }
        self.expanded.push(*state);
        Successor::Next(self.target(*state, action))
    }

    fn generate_successor(&self, state: &u32, action: Action) -> u32 {
        self.target(*state, action)
    }

    fn is_win(&self, state: &u32) -> bool {
        self.wins.contains(state)
    }

    fn is_lose(&self, state: &u32) -> bool {
        self.loses.contains(state)
    }
}

/// An unbounded tree: every state has `branching` children and nothing ever ends.
///
/// States are `(depth, id)` pairs, with the root at `(0, 0)`.
#[derive(Clone, Debug)]
pub(crate) struct InfiniteTreeEngine {
    branching: usize,
    budget: ComputeBudget,
    calls: u64,
    max_expanded_depth: u32,
}

impl InfiniteTreeEngine {
    /// `branching` is capped at the five available actions.
    pub(crate) fn new(branching: usize, budget: u64) -> Self {
        InfiniteTreeEngine {
            branching: branching.min(Action::ALL.len()),
            budget: ComputeBudget::new(budget),
            calls: 0,
            max_expanded_depth: 0,
        }
    }

    pub(crate) fn successor_calls(&self) -> u64 {
        self.calls
    }

    /// Deepest state whose successors were requested.
    pub(crate) fn max_expanded_depth(&self) -> u32 {
        self.max_expanded_depth
    }

    fn child(&self, state: &(u32, u64), action: Action) -> (u32, u64) {
        let index = Action::ALL.iter().position(|a| *a == action).unwrap_or(0) as u64;
        (state.0 + 1, state.1 * self.branching as u64 + index + 1)
    }
}

impl GameEngine for InfiniteTreeEngine {
    type State = (u32, u64);

    fn begin_decision(&mut self) {
        self.budget.reset();
    }

    fn legal_actions(&self, _state: &(u32, u64)) -> Vec<Action> {
        Action::ALL[..self.branching].to_vec()
    }

    fn successor(&mut self, state: &(u32, u64), action: Action) -> Successor<(u32, u64)> {
        self.calls += 1;
        if !self.budget.try_spend() {
            return Successor::BudgetExhausted;
        }
        self.max_expanded_depth = self.max_expanded_depth.max(state.0);
        Successor::Next(self.child(state, action))
    }

    fn generate_successor(&self, state: &(u32, u64), action: Action) -> (u32, u64) {
        self.child(state, action)
    }

    fn is_win(&self, _state: &(u32, u64)) -> bool {
        false
    }

    fn is_lose(&self, _state: &(u32, u64)) -> bool {
        false
    }
}

/// A small graph with a single win at depth 2, reached only through `East`.
///
/// ```text
/// 0 -North-> 1 -North-> 3
///            1 -East--> 4
/// 0 -East--> 2 -North-> 5 (win)
///            2 -East--> 6 (lose)
/// ```
pub(crate) fn win_at_depth_two(budget: u64) -> GraphEngine {
    GraphEngine::new(budget)
        .edge(0, Action::North, 1)
        .edge(0, Action::East, 2)
        .edge(1, Action::North, 3)
        .edge(1, Action::East, 4)
        .edge(2, Action::North, 5)
        .edge(2, Action::East, 6)
        .win(5)
        .lose(6)
        .score(1, 10.0)
        .score(3, 20.0)
        .score(4, 15.0)
}
