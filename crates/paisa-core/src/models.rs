//! Domain models for Paisa

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial transaction recorded for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Date of the transaction
    pub date: NaiveDate,
    /// Human-readable description
    pub description: String,
    /// Transaction amount, always strictly positive; direction comes from `tx_type`
    pub amount: Decimal,
    /// What kind of money movement this is
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Spare change computed for this transaction.
    /// Meaningful only when `round_up_applied` is true and the type is expense.
    pub round_up_amount: Decimal,
    /// Whether a round-up was applied to this transaction
    pub round_up_applied: bool,
}

impl Transaction {
    /// Create a transaction with no round-up applied
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        tx_type: TransactionType,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            tx_type,
            round_up_amount: Decimal::ZERO,
            round_up_applied: false,
        }
    }

    pub fn is_income(&self) -> bool {
        self.tx_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.tx_type == TransactionType::Expense
    }
}

/// Kinds of transactions tracked by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Savings,
    Investment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Savings => "savings",
            Self::Investment => "investment",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal accruing round-up deposits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    /// Balance accrued so far; never negative
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub status: GoalStatus,
}

impl SavingsGoal {
    /// Create a new active goal with a zero balance
    pub fn new(name: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            name: name.into(),
            current_amount: Decimal::ZERO,
            target_amount,
            status: GoalStatus::Active,
        }
    }

    /// Only active goals participate in score and dashboard computations
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// Lifecycle status of a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Cancelled,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Publication status of a community contribution.
/// Only published contributions count toward the community sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    Draft,
    Published,
}

impl ContributionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl std::str::FromStr for ContributionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("Unknown contribution status: {}", s)),
        }
    }
}

impl std::fmt::Display for ContributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One observation in an income series.
/// Insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomePoint {
    pub date: NaiveDate,
    pub amount: f64,
}

impl IncomePoint {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }
}
