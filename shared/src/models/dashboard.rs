//! Dashboard Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Academic and financial KPIs from `/dashboard/stats/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_students: u64,
    pub active_students: u64,
    pub total_teachers: u64,
    pub total_classrooms: u64,
    pub total_subjects: u64,
    /// Mean of all grades in the current year
    pub average_grade: Option<f64>,
    /// Share of students above the passing grade, 0-100
    pub approval_rate: Option<f64>,
    pub pending_fees: u64,
    pub overdue_fees: u64,
    pub monthly_revenue: Option<Decimal>,
}
