use once_cell::sync::Lazy;
use regex::Regex;

/// Texts longer than this are shortened.
pub const MAX_TEXT_LEN: usize = 256;
/// Characters kept before the ellipsis when shortening.
pub const TRUNCATED_LEN: usize = 253;
pub const ELLIPSIS: &str = "...";

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+").unwrap());

/// Shortens `text` to `TRUNCATED_LEN` characters plus an ellipsis when it is
/// longer than `MAX_TEXT_LEN`. Returns whether truncation happened.
pub fn truncate_text(text: &str) -> (String, bool) {
    if text.chars().count() > MAX_TEXT_LEN {
        let mut shortened: String = text.chars().take(TRUNCATED_LEN).collect();
        shortened.push_str(ELLIPSIS);
        (shortened, true)
    } else {
        (text.to_string(), false)
    }
}

pub fn digits_only(text: &str) -> String {
    NON_DIGITS.replace_all(text, "").into_owned()
}

/// The digits found in `text`, kept verbatim, or `None` when there are none.
pub fn count_digits(text: &str) -> Option<String> {
    let digits = digits_only(text);
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
