use crate::config::ImportConfig;
use crate::model::deque::{column, DequeRecord};
use crate::util::markdown::{blockquote, single_quoted};
use crate::util::search::query_value;

/// Render the Markdown body of the Linear issue.
pub fn description(record: &DequeRecord, config: &ImportConfig) -> String {
    let url = record.field(column::URL);
    let issue_url = record.field(column::ISSUE_URL);
    let search = format!(
        "{}{}",
        config.search_url,
        query_value(record.field(column::CHECKPOINT))
    );

    let has_screenshots = record.non_empty(column::SCREENSHOTS).is_some();
    let header_screenshots = if has_screenshots {
        format!(" • [Screenshots]({issue_url})")
    } else {
        String::new()
    };
    let screenshots_line = if has_screenshots {
        format!("- [Screenshots]({issue_url})")
    } else {
        String::new()
    };
    let university_line = record
        .non_empty(column::MORE_INFO)
        .map(|more_info| format!("- [Deque University]({more_info})"))
        .unwrap_or_default();

    format!(
        r#"
[Go to page]({url}) • [View in Deque]({issue_url}) • [WCAG Info]({search}){header_screenshots}
`{url}`

### Description:
{description}
### Recommendation:
{recommendation}
### Source Code:
```html
{source_code}
```
### Deque:
- Issue ID: `{issue_id}`
- Severity: `{impact}`
- Tester: `{user}`
- Test Unit: `{test_unit}`
- Method: `{method}`
- [View in Deque]({issue_url})
{screenshots_line}
{university_line}
### WCAG:
- Checkpoint Group: `{checkpoint_group}`
- Checkpoint: `{checkpoint}`
- Success Criteria: `{success_criteria}`
- Rule ID: `{rule_id}`
- [More Info]({search})
"#,
        description = record.field(column::DESCRIPTION),
        recommendation = blockquote(record.field(column::RECOMMENDED_TO_FIX)),
        source_code = single_quoted(record.field(column::SOURCE_CODE)),
        issue_id = record.field(column::ISSUE_ID),
        impact = record.field(column::IMPACT),
        user = record.field(column::USER),
        test_unit = record.field(column::TEST_UNIT),
        method = record.field(column::METHOD),
        checkpoint_group = record.field(column::CHECKPOINT_GROUP),
        checkpoint = record.field(column::CHECKPOINT),
        success_criteria = record.field(column::SUCCESS_CRITERIA),
        rule_id = record.field(column::RULE_ID),
    )
}
