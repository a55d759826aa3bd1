use serde::Serialize;
use std::fmt;

/// Linear priority, derived from the Deque impact rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_impact(impact: &str) -> Option<Priority> {
        match impact {
            "Critical" => Some(Priority::High),
            "Serious" => Some(Priority::Medium),
            "Moderate" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header of a Linear CSV import.
pub const LINEAR_COLUMNS: [&str; 5] = ["Title", "Description", "Priority", "Status", "Labels"];

/// One row of a Linear CSV import. Field order follows [`LINEAR_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearIssue {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub status: String,
    pub labels: String,
}
