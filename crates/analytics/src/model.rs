//! Inputs and outputs of the analytics engine.
//!
//! All of these are value objects: the engine borrows inputs immutably and
//! builds fresh outputs on every call. Outputs derive serde so the host layer can
//! serialize them directly (JSON in practice).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerscope_core::{DomainError, DomainResult, ValueObject};

/// One period of business history (e.g. a month of sales).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub period: String,
    pub total: f64,
}

impl HistoricalRecord {
    pub fn new(period: impl Into<String>, total: f64) -> Self {
        Self {
            period: period.into(),
            total,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.total.is_finite() {
            return Err(DomainError::validation(format!(
                "record {:?}: total must be finite",
                self.period
            )));
        }
        Ok(())
    }
}

/// Stock position of a single item at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshotItem {
    pub quantity: u64,
    /// Missing prices count as zero value.
    pub unit_price: Option<f64>,
}

impl InventorySnapshotItem {
    pub fn new(quantity: u64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price: Some(unit_price),
        }
    }

    pub fn unpriced(quantity: u64) -> Self {
        Self {
            quantity,
            unit_price: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.unit_price.unwrap_or(0.0)
    }

    pub fn validate(&self) -> DomainResult<()> {
        match self.unit_price {
            Some(p) if !(p.is_finite() && p >= 0.0) => Err(DomainError::validation(format!(
                "unit_price must be a finite non-negative number (got {p})"
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    Overdue,
    Paid,
    WrittenOff,
}

impl DebtStatus {
    /// Still expected to be collected.
    pub fn is_open(self) -> bool {
        matches!(self, DebtStatus::Active | DebtStatus::Overdue)
    }
}

/// A receivable.
///
/// `remaining_amount == 0` is expected to imply `Paid` or `WrittenOff`; the
/// engine does not enforce it and simply weighs such debts at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub status: DebtStatus,
    pub remaining_amount: f64,
    pub sale_date: NaiveDate,
    pub last_payment_date: Option<NaiveDate>,
}

impl DebtRecord {
    pub fn new(status: DebtStatus, remaining_amount: f64, sale_date: NaiveDate) -> Self {
        Self {
            status,
            remaining_amount,
            sale_date,
            last_payment_date: None,
        }
    }

    pub fn with_last_payment(mut self, date: NaiveDate) -> Self {
        self.last_payment_date = Some(date);
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.remaining_amount.is_finite() && self.remaining_amount >= 0.0) {
            return Err(DomainError::validation(format!(
                "remaining_amount must be a finite non-negative number (got {})",
                self.remaining_amount
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Smallest band covering `lower`, `upper` and `predicted`.
    pub fn enclosing(predicted: f64, lower: f64, upper: f64) -> Self {
        Self {
            lower: lower.min(upper).min(predicted),
            upper: upper.max(lower).max(predicted),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period: String,
    pub predicted_value: f64,
    pub confidence_interval: ConfidenceInterval,
    /// What the projection accounted for, most influential first.
    pub factors: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Trend,
    Anomaly,
    Recommendation,
    Alert,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A discrete, human-readable observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub category: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// In \[0, 1\].
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

impl Insight {
    pub fn new(
        kind: InsightType,
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        confidence: f64,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            title: title.into(),
            description: description.into(),
            severity,
            confidence,
            recommendations: None,
        }
    }

    pub fn with_recommendations(mut self, recommendations: &[&str]) -> Self {
        self.recommendations = Some(to_strings(recommendations));
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Direction::Up
        } else if value < 0.0 {
            Direction::Down
        } else {
            Direction::Stable
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub metric: String,
    pub direction: Direction,
    pub change_percentage: f64,
    pub significance: Significance,
}

/// Uniform output of every analytics entry point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub trends: Vec<Trend>,
    pub forecasts: Vec<ForecastPoint>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn insights_of(&self, kind: InsightType) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(move |i| i.kind == kind)
    }
}

impl ValueObject for HistoricalRecord {}
impl ValueObject for InventorySnapshotItem {}
impl ValueObject for DebtRecord {}
impl ValueObject for ConfidenceInterval {}
impl ValueObject for ForecastPoint {}
impl ValueObject for Insight {}
impl ValueObject for Trend {}
impl ValueObject for AnalysisResult {}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
