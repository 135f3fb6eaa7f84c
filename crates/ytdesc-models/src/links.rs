//! Hyperlink scanning over free-form text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An `http://` or `https://` token running up to the next whitespace or `)`.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").unwrap());

/// One link found in a description, with its (optional) company label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Company the link belongs to. Never populated yet; always `null` on the wire.
    pub company: Option<String>,
    /// The matched URL, verbatim.
    pub link: String,
}

impl LinkRecord {
    /// Create a record with no company attached.
    pub fn unlabeled(link: impl Into<String>) -> Self {
        Self {
            company: None,
            link: link.into(),
        }
    }
}

/// Find every link in `text`, in source order.
///
/// Duplicates are kept and nothing is normalized.
pub fn scan_links(text: &str) -> Vec<LinkRecord> {
    LINK_PATTERN
        .find_iter(text)
        .map(|m| LinkRecord::unlabeled(m.as_str()))
        .collect()
}

/// Render records as `Company: <company>, Link: <link>` lines joined by `\n`.
///
/// A missing company is rendered as `None`. Lines are separated by a real
/// newline character, not a literal backslash followed by `n`.
pub fn format_links_text(records: &[LinkRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "Company: {}, Link: {}",
                r.company.as_deref().unwrap_or("None"),
                r.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
