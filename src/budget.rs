//! Per-decision compute allowance for budgeted successor generation.

/// Counts budgeted successor requests within one decision.
///
/// Engines own one of these and call [`ComputeBudget::reset`] from
/// `GameEngine::begin_decision`. Once `limit` requests have been granted every
/// further [`ComputeBudget::try_spend`] returns `false` until the next reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputeBudget {
    limit: u64,
    used: u64,
}

/// Successor requests allowed per decision when nothing else is configured.
pub const DEFAULT_BUDGET: u64 = 2000;

impl ComputeBudget {
    /// Creates a budget with a fresh, unspent window.
    ///
    /// # Arguments
    /// * `limit`: Successor requests granted per decision. `0` refuses every request.
    ///
    /// # Returns
    /// A `ComputeBudget` with nothing used yet.
    pub fn new(limit: u64) -> Self {
        ComputeBudget { limit, used: 0 }
    }

    /// Starts a fresh window for a new decision.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Grants one unit of budget if any is left.
    ///
    /// # Returns
    /// `true` if the request was granted, `false` once the window is spent.
    pub fn try_spend(&mut self) -> bool {
        if self.used < self.limit {
            self.used += 1;
            true
        } else {
            false
        }
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn remaining(&self) -> u64 {
        self.limit - self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }
}

impl Default for ComputeBudget {
    fn default() -> Self {
        ComputeBudget::new(DEFAULT_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_spends_up_to_limit() {
        let mut budget = ComputeBudget::new(3);
        assert!(budget.try_spend());
        assert!(budget.try_spend());
        assert!(budget.try_spend());
        assert!(budget.is_exhausted());
        assert!(!budget.try_spend(), "Spending past the limit must be refused");
        assert_eq!(budget.used(), 3);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_budget_reset_opens_new_window() {
        let mut budget = ComputeBudget::new(1);
        assert!(budget.try_spend());
        assert!(!budget.try_spend());
        budget.reset();
        assert_eq!(budget.used(), 0);
        assert!(budget.try_spend());
    }

    #[test]
    fn test_default_budget_limit() {
        let mut budget = ComputeBudget::default();
        assert_eq!(budget.limit(), DEFAULT_BUDGET);
        assert!(budget.try_spend());
        assert_eq!(budget.limit(), DEFAULT_BUDGET, "Spending never moves the limit");
        assert_eq!(budget.remaining(), DEFAULT_BUDGET - 1);
    }

    #[test]
    fn test_zero_budget_is_exhausted_immediately() {
        let mut budget = ComputeBudget::new(0);
        assert!(budget.is_exhausted());
        assert!(!budget.try_spend());
    }
}
