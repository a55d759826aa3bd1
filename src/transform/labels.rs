use crate::config::ImportConfig;
use crate::model::deque::{column, DequeRecord};
use crate::model::page::PageName;

use super::checkpoint::format_checkpoint;

pub const LABEL_SEPARATOR: &str = ", ";

/// `Forms VPAT` -> `forms`. Only a trailing ` VPAT` is dropped.
fn app_name(group_name: &str) -> String {
    group_name
        .strip_suffix(" VPAT")
        .unwrap_or(group_name)
        .to_lowercase()
}

/// The seven label tokens for a record, in import order. Missing values leave
/// the token with an empty suffix so the position stays stable.
pub fn labels(record: &DequeRecord, page: Option<PageName>, config: &ImportConfig) -> Vec<String> {
    let ns = &config.label_namespace;
    let checkpoint = format_checkpoint(record.field(column::CHECKPOINT)).unwrap_or_default();
    let page = page.map(|p| p.as_str()).unwrap_or_default();

    vec![
        ns.clone(),
        format!("{ns}:app:{}", app_name(record.field(column::GROUP_NAME))),
        format!("{ns}:impact:{}", record.field(column::IMPACT).to_lowercase()),
        format!("{ns}:rule-id:{}", record.field(column::RULE_ID)),
        format!("{ns}:checkpoint:{checkpoint}"),
        format!("{ns}:method:{}", record.field(column::METHOD).to_lowercase()),
        format!("{ns}:page:{page}"),
    ]
}
