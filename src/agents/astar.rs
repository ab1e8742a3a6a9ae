//! Best-first search ordered by a cost that mixes path length and score gain.
//!
//! For a node at depth `d` (root children have depth 1):
//!
//! ```text
//! cost = d * depth_coefficient - (score(node) - score(root))
//! ```
//!
//! Lower is better. The score gain is measured against the root of the
//! decision, not the parent, so the cost tracks total improvement along the
//! path. This is not an admissible A* heuristic; it only biases expansion
//! towards branches the evaluator likes while still paying for depth.

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::Rng;

use super::node::{seed_frontier, SearchNode, Seeding};
use super::tie_break::{choose_extreme_index, Objective};
use super::{default_action, root_actions, seeded_rng, Agent};
use crate::contract::{Action, Evaluator, GameEngine, Successor};
use crate::error::AgentError;

/// Cost of a node at `depth` whose state scores `score`, for a root scoring `root_score`.
pub fn node_cost(depth: u32, depth_coefficient: f64, score: f64, root_score: f64) -> f64 {
    f64::from(depth) * depth_coefficient - (score - root_score)
}

pub struct AStarAgent<V> {
    evaluator: V,
    depth_coefficient: f64,
    rng: SmallRng,
}

#[derive(Debug, PartialEq, Eq)]
enum Expansion {
    Won(Action),
    Expanded,
    Exhausted,
    DeadEnd,
}

/// Frontier and bookkeeping for one decision.
struct CostSearch<S> {
    frontier: Vec<SearchNode<S>>,
    root_score: f64,
    depth_coefficient: f64,
    expansions: usize,
}

impl<S> CostSearch<S> {
    fn new(root_score: f64, depth_coefficient: f64) -> Self {
        CostSearch {
            frontier: Vec::new(),
            root_score,
            depth_coefficient,
            expansions: 0,
        }
    }

    fn push<V: Evaluator<S> + ?Sized>(&mut self, evaluator: &V, mut node: SearchNode<S>) {
        node.cost = node_cost(
            node.depth,
            self.depth_coefficient,
            evaluator.score(&node.state),
            self.root_score,
        );
        self.frontier.push(node);
    }

    /// Removes a minimum-cost node, ties broken uniformly at random.
    fn pop_min<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SearchNode<S>> {
        let costs: Vec<f64> = self.frontier.iter().map(|node| node.cost).collect();
        let index = choose_extreme_index(rng, &costs, Objective::Minimize)?;
        Some(self.frontier.swap_remove(index))
    }

    /// One node per root action. Stops early on a win or when the budget runs out.
    fn seed<E, V>(
        &mut self,
        engine: &mut E,
        evaluator: &V,
        root: &S,
        actions: &[Action],
    ) -> Expansion
    where
        E: GameEngine<State = S>,
        V: Evaluator<S> + ?Sized,
    {
        match seed_frontier(engine, root, actions) {
            Seeding::Won(action) => Expansion::Won(action),
            Seeding::Seeded { nodes, exhausted } => {
                for node in nodes {
                    self.push(evaluator, node);
                }
                if exhausted {
                    Expansion::Exhausted
                } else {
                    Expansion::Expanded
                }
            }
        }
    }

    /// Extracts the cheapest node and pushes its non-losing successors.
    fn step<E, V, R>(&mut self, engine: &mut E, evaluator: &V, rng: &mut R) -> Expansion
    where
        E: GameEngine<State = S>,
        V: Evaluator<S> + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(parent) = self.pop_min(rng) else {
            return Expansion::DeadEnd;
        };
        self.expansions += 1;
        trace!(
            "astar: expanding depth {} cost {:.3}, frontier {}",
            parent.depth,
            parent.cost,
            self.frontier.len()
        );

        for action in engine.legal_actions(&parent.state) {
            match engine.successor(&parent.state, action) {
                Successor::BudgetExhausted => return Expansion::Exhausted,
                Successor::Next(state) => {
                    if engine.is_win(&state) {
                        return Expansion::Won(parent.root_action);
                    }
                    if !engine.is_lose(&state) {
                        let child = parent.child(state);
                        self.push(evaluator, child);
                    }
                }
            }
        }
        Expansion::Expanded
    }
}

impl<V> AStarAgent<V> {
    /// Creates a best-first agent.
    ///
    /// # Arguments
    /// * `evaluator`: Scores states; higher scores lower a node's cost.
    /// * `depth_coefficient`: Cost added per level of depth. Larger values favor
    ///   shallow nodes, `0.0` orders the frontier by score gain alone.
    /// * `seed`: Seed for tie-breaks between equal-cost nodes, or `None` for entropy.
    ///
    /// # Returns
    /// An `AStarAgent` with no state carried between decisions except its RNG.
    pub fn new(evaluator: V, depth_coefficient: f64, seed: Option<u64>) -> Self {
        AStarAgent {
            evaluator,
            depth_coefficient,
            rng: seeded_rng(seed),
        }
    }

    pub fn depth_coefficient(&self) -> f64 {
        self.depth_coefficient
    }
}

impl<E, V> Agent<E> for AStarAgent<V>
where
    E: GameEngine,
    V: Evaluator<E::State>,
{
    fn get_action(&mut self, engine: &mut E, state: &E::State) -> Result<Action, AgentError> {
        engine.begin_decision();
        let actions = root_actions(engine, state)?;
        let mut search = CostSearch::new(self.evaluator.score(state), self.depth_coefficient);

        let mut outcome = search.seed(engine, &self.evaluator, state, &actions);
        while outcome == Expansion::Expanded {
            outcome = search.step(engine, &self.evaluator, &mut self.rng);
        }

        match outcome {
            Expansion::Won(action) => {
                debug!("astar: win found after {} expansions", search.expansions);
                Ok(action)
            }
            Expansion::DeadEnd => {
                debug!("astar: frontier emptied after {} expansions", search.expansions);
                Ok(default_action(&actions))
            }
            Expansion::Exhausted | Expansion::Expanded => {
                debug!(
                    "astar: budget exhausted after {} expansions, {} nodes on the frontier",
                    search.expansions,
                    search.frontier.len()
                );
                Ok(search
                    .pop_min(&mut self.rng)
                    .map(|node| node.root_action)
                    .unwrap_or_else(|| default_action(&actions)))
            }
        }
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{win_at_depth_two, GraphEngine};
    use rand::SeedableRng;

    #[test]
    fn test_node_cost_formula() {
        assert_eq!(node_cost(1, 1.0, 0.0, 0.0), 1.0);
        assert_eq!(node_cost(3, 1.0, 12.0, 2.0), 3.0 - 10.0);
        assert_eq!(node_cost(2, 0.5, -4.0, 0.0), 1.0 + 4.0);
        assert_eq!(node_cost(4, 2.0, 5.0, 5.0), 8.0);
    }

    #[test]
    fn test_frontier_costs_after_one_expansion() {
        let mut engine = GraphEngine::new(1_000)
            .edge(0, Action::North, 1)
            .edge(0, Action::South, 2)
            .edge(1, Action::North, 3)
            .edge(1, Action::East, 4)
            .edge(1, Action::West, 5)
            .score(0, 2.0)
            .score(1, 7.0)
            .score(2, 1.0)
            .score(3, 3.0)
            .score(4, 12.0)
            .score(5, -1.0);
        let evaluator = engine.evaluator();
        let mut rng = SmallRng::seed_from_u64(0);
        let root_score = evaluator.score(&0u32);
        let mut search = CostSearch::new(root_score, 1.0);

        engine.begin_decision();
        let actions = engine.legal_actions(&0);
        assert_eq!(search.seed(&mut engine, &evaluator, &0, &actions), Expansion::Expanded);
        // Seeds: 1 costs 1 - (7 - 2) = -4, 2 costs 1 - (1 - 2) = 2.
        assert_eq!(search.frontier.len(), 2);

        assert_eq!(search.step(&mut engine, &evaluator, &mut rng), Expansion::Expanded);
        assert_eq!(engine.expanded().last(), Some(&1), "The cheapest seed is expanded first");

        let mut costs: Vec<(u32, u32, f64)> = search
            .frontier
            .iter()
            .map(|node| (node.state, node.depth, node.cost))
            .collect();
        costs.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap());
        for &(state, depth, cost) in &costs {
            if state != 2 {
                // Children of the depth-1 seed: (1 + 1) - (score - root_score).
                assert_eq!(depth, 2);
                assert_eq!(cost, (1.0 + 1.0) - (evaluator.score(&state) - root_score));
            }
        }
        let order: Vec<u32> = costs.iter().map(|c| c.0).collect();
        assert_eq!(order, vec![4, 3, 2, 5]);
        assert!(search
            .frontier
            .iter()
            .all(|node| node.root_action == Action::North || node.state == 2));
    }

    #[test]
    fn test_astar_finds_win_at_depth_two() {
        for seed in 0..10 {
            let mut engine = win_at_depth_two(10_000);
            let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(seed));
            assert_eq!(astar.get_action(&mut engine, &0), Ok(Action::East), "seed {}", seed);
        }
    }

    #[test]
    fn test_astar_win_among_seeds() {
        let mut engine = GraphEngine::new(100)
            .edge(0, Action::North, 1)
            .edge(0, Action::West, 2)
            .win(2);
        let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(1));
        assert_eq!(astar.get_action(&mut engine, &0), Ok(Action::West));
    }

    #[test]
    fn test_astar_dead_end_returns_default_action() {
        // 2 has no moves and 1 only leads to a loss, so the frontier empties
        // after both seeds are popped.
        let mut engine = GraphEngine::new(100)
            .edge(0, Action::North, 1)
            .edge(0, Action::South, 2)
            .edge(1, Action::North, 3)
            .lose(3);
        let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(1));
        assert_eq!(astar.get_action(&mut engine, &0), Ok(Action::North));
        assert_eq!(engine.successor_calls(), 3, "Two seeds and one expansion, budget untouched");
        assert!(engine.expanded().contains(&1));
    }

    #[test]
    fn test_astar_cycle_through_root_ends_on_budget() {
        // Stop always regenerates the root, so the frontier never empties.
        let mut engine = GraphEngine::new(100)
            .edge(0, Action::North, 1)
            .edge(0, Action::Stop, 0)
            .edge(1, Action::North, 2)
            .lose(2);
        let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(1));
        let action = astar.get_action(&mut engine, &0).unwrap();
        assert!(action == Action::North || action == Action::Stop);
        assert_eq!(engine.successor_calls(), 101);
    }

    #[test]
    fn test_astar_same_seed_is_idempotent() {
        // Every node scores the same, so both the expansion order and the final
        // pick come down to tie-breaks.
        let build = || {
            GraphEngine::new(6)
                .edge(0, Action::North, 1)
                .edge(0, Action::South, 2)
                .edge(0, Action::East, 3)
                .edge(0, Action::West, 4)
                .edge(1, Action::North, 5)
                .edge(2, Action::North, 6)
                .edge(3, Action::North, 7)
                .edge(4, Action::North, 8)
        };
        for seed in 0..20 {
            let mut first_engine = build();
            let mut second_engine = build();
            let first = AStarAgent::new(first_engine.evaluator(), 1.0, Some(seed))
                .get_action(&mut first_engine, &0);
            let second = AStarAgent::new(second_engine.evaluator(), 1.0, Some(seed))
                .get_action(&mut second_engine, &0);
            assert_eq!(first, second, "seed {}", seed);
            assert_eq!(first_engine.expanded(), second_engine.expanded(), "seed {}", seed);
        }
    }

    #[test]
    fn test_astar_budget_exhaustion_uses_cheapest_frontier_node() {
        // Budget 2 seeds both roots: North costs 1 - 3 = -2, South costs 1 - 9 = -8.
        let mut engine = GraphEngine::new(2)
            .edge(0, Action::North, 1)
            .edge(0, Action::South, 2)
            .edge(1, Action::North, 3)
            .edge(2, Action::North, 4)
            .score(1, 3.0)
            .score(2, 9.0);
        let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(5));
        // South is popped first and its expansion is refused, leaving only North to select.
        assert_eq!(astar.get_action(&mut engine, &0), Ok(Action::North));
    }

    #[test]
    fn test_astar_budget_exhaustion_returns_legal_root_action() {
        for budget in [0, 1, 2, 3, 6, 15] {
            let mut engine = GraphEngine::new(budget)
                .edge(0, Action::North, 1)
                .edge(0, Action::East, 2)
                .edge(0, Action::Stop, 0)
                .edge(1, Action::North, 1)
                .edge(1, Action::South, 0)
                .edge(2, Action::West, 0)
                .score(1, 2.0);
            let mut astar = AStarAgent::new(engine.evaluator(), 1.0, Some(budget));
            let action = astar.get_action(&mut engine, &0).unwrap();
            assert!(engine.legal_actions(&0).contains(&action), "budget {}", budget);
            assert!(engine.successor_calls() <= budget + 1);
        }
    }

    #[test]
    fn test_astar_depth_coefficient_is_kept() {
        let astar = AStarAgent::new(|_: &u32| 0.0, 2.5, Some(0));
        assert_eq!(astar.depth_coefficient(), 2.5);
    }
}
