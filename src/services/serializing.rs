use crate::domain::{Entry, Record};
use crate::error::Result;

/// Renders entries as a pretty-printed JSON array of string-valued records.
///
/// Double quotes in titles and authors are rewritten by [`Record::from`]. The
/// compact document is parsed back before pretty-printing, so a malformed
/// record fails here instead of downstream.
pub fn render_json(entries: Vec<Entry>) -> Result<String> {
    let records: Vec<Record> = entries.into_iter().map(Record::from).collect();

    let compact = serde_json::to_string(&records)?;
    let parsed: Vec<Record> = serde_json::from_str(&compact)?;

    Ok(serde_json::to_string_pretty(&parsed)?)
}
