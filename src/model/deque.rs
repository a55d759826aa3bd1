use std::collections::HashMap;

/// Column names in a Deque issue export.
pub mod column {
    pub const SUMMARY: &str = "Summary";
    pub const URL: &str = "URL";
    pub const ISSUE_URL: &str = "Issue URL";
    pub const SCREENSHOTS: &str = "Screenshots";
    pub const DESCRIPTION: &str = "Description";
    pub const RECOMMENDED_TO_FIX: &str = "Recommended to fix";
    pub const SOURCE_CODE: &str = "Source Code";
    pub const ISSUE_ID: &str = "Issue ID";
    pub const IMPACT: &str = "Impact";
    pub const USER: &str = "User";
    pub const TEST_UNIT: &str = "Test Unit";
    pub const METHOD: &str = "Method";
    pub const MORE_INFO: &str = "More Info";
    pub const CHECKPOINT_GROUP: &str = "Checkpoint Group";
    pub const CHECKPOINT: &str = "Checkpoint";
    pub const SUCCESS_CRITERIA: &str = "Success Criteria";
    pub const RULE_ID: &str = "Rule Id";
    pub const GROUP_NAME: &str = "Group Name";
}

/// One row of a Deque export, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DequeRecord {
    fields: HashMap<String, String>,
}

impl DequeRecord {
    /// Pair headers with values. A repeated header keeps its right-most value;
    /// headers past the end of a short row are left absent.
    pub fn from_row<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    /// Value of `column`, or `""` when the column is missing.
    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or_default()
    }

    /// Value of `column` only if present and non-empty.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        Some(self.field(column)).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
impl DequeRecord {
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.fields.insert(column.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_as_empty() {
        let record = DequeRecord::default();
        assert_eq!(record.field(column::IMPACT), "");
        assert_eq!(record.non_empty(column::IMPACT), None);
    }

    #[test]
    fn empty_value_is_not_non_empty() {
        let record = DequeRecord::default().with(column::SCREENSHOTS, "");
        assert_eq!(record.non_empty(column::SCREENSHOTS), None);

        let record = record.with(column::SCREENSHOTS, "shot.png");
        assert_eq!(record.non_empty(column::SCREENSHOTS), Some("shot.png"));
    }

    #[test]
    fn repeated_header_keeps_last_value() {
        let record = DequeRecord::from_row(
            ["Title", "Description", "Summary", "Description"],
            ["t", "linear placeholder", "s", "Image has no alt"],
        );
        assert_eq!(record.field(column::DESCRIPTION), "Image has no alt");
        assert_eq!(record.field(column::SUMMARY), "s");
    }

    #[test]
    fn short_row_leaves_trailing_columns_absent() {
        let record = DequeRecord::from_row(["Summary", "URL", "Impact"], ["s", "https://x/home"]);
        assert_eq!(record.field(column::URL), "https://x/home");
        assert_eq!(record.field(column::IMPACT), "");
    }
}
