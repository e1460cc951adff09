//! Record store abstraction
//!
//! The engine never touches storage directly; it reads through the
//! [`RecordStore`] trait. [`MemoryStore`] is the in-memory implementation
//! used by the CLI and tests.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    ContributionStatus, GoalStatus, IncomePoint, SavingsGoal, Transaction, TransactionType,
};
use crate::roundup::round_up;

/// Name given to the goal created when a round-up accrues with no active goal
pub const DEFAULT_GOAL_NAME: &str = "Round-Up Savings";

/// Target for the auto-created default goal
pub const DEFAULT_GOAL_TARGET: Decimal = dec!(10000);

/// Read access to the records the derivation engine consumes
pub trait RecordStore {
    /// All transactions, ordered by date ascending
    fn transactions(&self) -> Result<Vec<Transaction>>;

    /// Sum of `current_amount` across active savings goals
    fn active_savings_balance(&self) -> Result<Decimal>;

    /// Count of community contributions with published status
    fn published_contribution_count(&self) -> Result<u32>;

    /// Income observations on or after `since` (all of them when None),
    /// ordered by date ascending
    fn income_series(&self, since: Option<NaiveDate>) -> Result<Vec<IncomePoint>>;
}

/// In-memory record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    goals: Vec<SavingsGoal>,
    contributions: Vec<ContributionStatus>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction.
    ///
    /// Expenses get a round-up computed and applied, and the spare change
    /// accrues into the active savings goal; a default goal is created when
    /// none exists. Other transaction types are stored as-is.
    pub fn record_transaction(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        tx_type: TransactionType,
    ) -> Result<Transaction> {
        let mut tx = Transaction::new(date, description, amount, tx_type);

        if tx.is_expense() {
            let spare = round_up(amount)?;
            tx.round_up_amount = spare;
            tx.round_up_applied = true;
            self.accrue_round_up(spare);
            debug!(amount = %amount, round_up = %spare, "Round-up applied to expense");
        }

        self.transactions.push(tx.clone());
        self.transactions.sort_by_key(|t| t.date);
        Ok(tx)
    }

    /// Add a savings goal
    pub fn add_goal(&mut self, goal: SavingsGoal) {
        self.goals.push(goal);
    }

    /// Add a community contribution record
    pub fn add_contribution(&mut self, status: ContributionStatus) {
        self.contributions.push(status);
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    fn accrue_round_up(&mut self, spare: Decimal) {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.is_active()) {
            goal.current_amount += spare;
        } else {
            let mut goal = SavingsGoal::new(DEFAULT_GOAL_NAME, DEFAULT_GOAL_TARGET);
            goal.current_amount = spare;
            self.goals.push(goal);
        }
    }
}

impl RecordStore for MemoryStore {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn active_savings_balance(&self) -> Result<Decimal> {
        Ok(self
            .goals
            .iter()
            .filter(|g| g.status == GoalStatus::Active)
            .map(|g| g.current_amount)
            .sum())
    }

    fn published_contribution_count(&self) -> Result<u32> {
        Ok(self
            .contributions
            .iter()
            .filter(|c| **c == ContributionStatus::Published)
            .count() as u32)
    }

    fn income_series(&self, since: Option<NaiveDate>) -> Result<Vec<IncomePoint>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .filter(|t| since.map_or(true, |cutoff| t.date >= cutoff))
            .filter_map(|t| t.amount.to_f64().map(|amount| IncomePoint::new(t.date, amount)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_expense_gets_round_up_and_default_goal() {
        let mut store = MemoryStore::new();
        let tx = store
            .record_transaction(date(1), "Fuel", dec!(203), TransactionType::Expense)
            .unwrap();

        assert!(tx.round_up_applied);
        assert_eq!(tx.round_up_amount, dec!(2));

        let goals = store.goals();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, DEFAULT_GOAL_NAME);
        assert_eq!(goals[0].current_amount, dec!(2));
        assert_eq!(store.active_savings_balance().unwrap(), dec!(2));
    }

    #[test]
    fn test_income_is_stored_without_round_up() {
        let mut store = MemoryStore::new();
        let tx = store
            .record_transaction(date(1), "Delivery payout", dec!(1200), TransactionType::Income)
            .unwrap();

        assert!(!tx.round_up_applied);
        assert!(store.goals().is_empty());
    }

    #[test]
    fn test_round_up_accrues_into_existing_active_goal() {
        let mut store = MemoryStore::new();
        let mut goal = SavingsGoal::new("Scooter", dec!(50000));
        goal.current_amount = dec!(100);
        store.add_goal(goal);

        store
            .record_transaction(date(2), "Lunch", dec!(198.75), TransactionType::Expense)
            .unwrap();

        assert_eq!(store.goals()[0].current_amount, dec!(101.25));
        assert_eq!(store.goals().len(), 1);
    }

    #[test]
    fn test_cancelled_goals_excluded_from_balance() {
        let mut store = MemoryStore::new();
        let mut active = SavingsGoal::new("A", dec!(1000));
        active.current_amount = dec!(300);
        let mut cancelled = SavingsGoal::new("B", dec!(1000));
        cancelled.current_amount = dec!(700);
        cancelled.status = GoalStatus::Cancelled;
        store.add_goal(active);
        store.add_goal(cancelled);

        assert_eq!(store.active_savings_balance().unwrap(), dec!(300));
    }

    #[test]
    fn test_published_contribution_count() {
        let mut store = MemoryStore::new();
        store.add_contribution(ContributionStatus::Published);
        store.add_contribution(ContributionStatus::Draft);
        store.add_contribution(ContributionStatus::Published);

        assert_eq!(store.published_contribution_count().unwrap(), 2);
    }

    #[test]
    fn test_income_series_is_chronological_and_filtered() {
        let mut store = MemoryStore::new();
        store
            .record_transaction(date(10), "Payout", dec!(1100), TransactionType::Income)
            .unwrap();
        store
            .record_transaction(date(3), "Payout", dec!(1000), TransactionType::Income)
            .unwrap();
        store
            .record_transaction(date(5), "Groceries", dec!(48.50), TransactionType::Expense)
            .unwrap();

        let series = store.income_series(None).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date(3));
        assert_eq!(series[1].date, date(10));

        let recent = store.income_series(Some(date(4))).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].amount, 1100.0);
    }

    #[test]
    fn test_rejects_non_positive_expense() {
        let mut store = MemoryStore::new();
        let result = store.record_transaction(date(1), "Bad", dec!(0), TransactionType::Expense);
        assert!(result.is_err());
    }
}
