//! Monthly Fee (tuition) Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment status of a monthly fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for FeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!(
                "unknown fee status {other:?}, expected pending, paid, overdue or cancelled"
            )),
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-student, per-month billing record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFee {
    pub id: i64,
    /// Student reference
    pub student: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    /// First day of the billed month
    pub reference_month: NaiveDate,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// URL of the uploaded payment proof
    #[serde(default)]
    pub payment_proof: Option<String>,
}

/// Create monthly fee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFeeCreate {
    pub student: i64,
    pub reference_month: NaiveDate,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

/// Update monthly fee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyFeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// Aggregates returned by `/financial/fees/summary/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSummary {
    pub total_expected: Decimal,
    pub total_received: Decimal,
    pub total_pending: Decimal,
    pub total_overdue: Decimal,
    pub paid_count: u64,
    pub pending_count: u64,
    pub overdue_count: u64,
}
