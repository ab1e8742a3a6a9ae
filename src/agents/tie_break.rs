//! Arg-max / arg-min selection with uniformly random tie-breaking.
//!
//! Every strategy ends by picking "the best" of some scored collection, and
//! every one of them resolves ties the same way, so the selection lives here.

use rand::Rng;

/// Direction of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    fn pick(self, a: f64, b: f64) -> f64 {
        match self {
            Objective::Maximize => a.max(b),
            Objective::Minimize => a.min(b),
        }
    }
}

/// Chooses the index of an extreme score, breaking ties uniformly at random.
///
/// NaN scores never beat a comparable score. If every score is NaN the choice
/// is uniform over all indices. A unique extreme is returned without drawing
/// from `rng`.
///
/// # Returns
/// `None` only if `scores` is empty.
pub fn choose_extreme_index<R: Rng + ?Sized>(
    rng: &mut R,
    scores: &[f64],
    objective: Objective,
) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }

    let best = scores
        .iter()
        .copied()
        .filter(|s| !s.is_nan())
        .reduce(|a, b| objective.pick(a, b));

    let tied: Vec<usize> = match best {
        Some(best) => scores
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == best)
            .map(|(i, _)| i)
            .collect(),
        None => (0..scores.len()).collect(),
    };

    if tied.len() == 1 {
        return Some(tied[0]);
    }
    Some(tied[rng.gen_range(0..tied.len())])
}

/// Chooses the payload of an extreme-scored candidate, ties broken uniformly at random.
pub fn choose_extreme<T, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: Vec<(f64, T)>,
    objective: Objective,
) -> Option<T> {
    let scores: Vec<f64> = candidates.iter().map(|(score, _)| *score).collect();
    let index = choose_extreme_index(rng, &scores, objective)?;
    candidates.into_iter().nth(index).map(|(_, item)| item)
}
