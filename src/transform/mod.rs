pub mod checkpoint;
pub mod description;
pub mod labels;

use tracing::debug;

use crate::config::ImportConfig;
use crate::model::deque::{column, DequeRecord};
use crate::model::issue::{LinearIssue, Priority};
use crate::model::page::PageName;

/// Map one Deque issue onto one Linear import row.
pub fn to_linear_issue(record: &DequeRecord, config: &ImportConfig) -> LinearIssue {
    let url = record.field(column::URL);
    let page = PageName::classify(url);
    match page {
        Some(page) => debug!(
            issue_id = record.field(column::ISSUE_ID),
            page = page.as_str(),
            "Converting record"
        ),
        None => debug!(
            issue_id = record.field(column::ISSUE_ID),
            url,
            "Converting record, no page rule matched"
        ),
    }

    LinearIssue {
        title: format!("{} {}", config.title_prefix, record.field(column::SUMMARY)),
        description: description::description(record, config),
        priority: Priority::from_impact(record.field(column::IMPACT)),
        status: config.status.clone(),
        labels: labels::labels(record, page, config).join(labels::LABEL_SEPARATOR),
    }
}
