//! The input record describing one client's delegation analysis.
//!
//! The types are plain serde-friendly data so that callers can build them directly or parse
//! them from the JSON produced by the intake service.  Every key is required: the report has no
//! sensible defaults for its core metrics.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A single delegable task.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short task name.
    pub name: String,
    /// Longer explanation, truncated on the task card when too long.
    pub description: String,
    /// Free-form label such as `"5 hrs/week"`.
    pub time_saved: String,
}

impl Task {
    /// Creates a task from its three text fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        time_saved: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            time_saved: time_saved.into(),
        }
    }
}

/// Structured input for one Time Freedom Report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub client_name: String,
    pub date: String,
    /// Annual value unlocked by delegating, in whole dollars.
    pub annual_value: u64,
    pub weekly_hours: f64,
    pub total_tasks_ea: u32,
    /// Annual cost of the executive assistant, in whole dollars.
    pub ea_investment: u64,
    pub net_return: u64,
    pub roi_multiplier: f64,
    pub analysis_text: String,
    pub daily_tasks: Vec<Task>,
    pub weekly_tasks: Vec<Task>,
    pub monthly_tasks: Vec<Task>,
}

impl ReportData {
    /// Parses and validates a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let data: ReportData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the numeric invariants that the type system does not already enforce.
    pub fn validate(&self) -> Result<(), ReportError> {
        check_non_negative("weekly_hours", self.weekly_hours)?;
        check_non_negative("roi_multiplier", self.roi_multiplier)?;
        Ok(())
    }

    /// Returns the tasks recorded for `category`.
    pub fn tasks(&self, category: TaskCategory) -> &[Task] {
        match category {
            TaskCategory::Daily => &self.daily_tasks,
            TaskCategory::Weekly => &self.weekly_tasks,
            TaskCategory::Monthly => &self.monthly_tasks,
        }
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ReportError> {
    if !value.is_finite() {
        return Err(ReportError::InvalidData {
            field,
            reason: format!("expected a finite number, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(ReportError::InvalidData {
            field,
            reason: format!("expected a non-negative number, got {value}"),
        });
    }
    Ok(())
}

/// The three task lists, in the order their pages appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    Daily,
    Weekly,
    Monthly,
}

impl TaskCategory {
    /// All categories in page order.
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::Daily,
        TaskCategory::Weekly,
        TaskCategory::Monthly,
    ];

    /// Page heading for the category.
    pub fn title(self) -> &'static str {
        match self {
            TaskCategory::Daily => "Top 5 Daily Tasks",
            TaskCategory::Weekly => "Top 5 Weekly Tasks",
            TaskCategory::Monthly => "Top 5 Monthly Tasks",
        }
    }

    /// Line shown under the page heading.
    pub fn subtitle(self) -> &'static str {
        match self {
            TaskCategory::Daily => "High-frequency tasks eating your time every single day",
            TaskCategory::Weekly => "Recurring tasks that stack up week after week",
            TaskCategory::Monthly => "Administrative work that drains strategic thinking time",
        }
    }
}
