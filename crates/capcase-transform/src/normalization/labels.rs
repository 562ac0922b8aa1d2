//! Exact-match label replacement for categorical columns.

use std::collections::BTreeMap;

use tracing::debug;

use capcase_model::{LabelReplacement, RecordTable};

use crate::error::Result;

/// Returns the replacement for `value` in `column`, or `value` unchanged.
///
/// Matching is on the full value only: no trimming, substrings or patterns.
///
/// ```
/// use capcase_model::default_replacements;
/// use capcase_transform::normalize_label;
///
/// let fixes = default_replacements();
/// assert_eq!(normalize_label("State", "Oklahoma ", &fixes), "Oklahoma");
/// assert_eq!(normalize_label("State", "Oklahoma", &fixes), "Oklahoma");
/// assert_eq!(normalize_label("Race", "Oklahoma ", &fixes), "Oklahoma ");
/// ```
pub fn normalize_label<'a>(
    column: &str,
    value: &'a str,
    replacements: &'a [LabelReplacement],
) -> &'a str {
    replacements
        .iter()
        .find(|fix| fix.column == column && fix.from == value)
        .map_or(value, |fix| fix.to.as_str())
}

/// Applies every replacement to its column in place.
///
/// Returns the number of changed cells per column.
pub fn apply_label_replacements(
    table: &mut RecordTable,
    replacements: &[LabelReplacement],
) -> Result<BTreeMap<String, usize>> {
    let mut changed: BTreeMap<String, usize> = BTreeMap::new();
    for fix in replacements {
        let count = table.replace_exact(&fix.column, &fix.from, &fix.to)?;
        debug!(
            column = %fix.column,
            from = ?fix.from,
            to = ?fix.to,
            count,
            "applied label replacement"
        );
        *changed.entry(fix.column.clone()).or_insert(0) += count;
    }
    Ok(changed)
}
