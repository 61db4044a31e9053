//! `@nickname` mentions in chat messages.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref MENTION: Regex = Regex::new(r"@(\w+)").expect("mention pattern is valid");
}

/// The nicknames mentioned in `text`, without the `@`, in the order they first appear.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MENTION
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(String::from)
        .collect()
}
