//! Company and link extraction from video descriptions.

use ytdesc_models::{scan_links, LinkRecord};

/// Pulls links out of a description and labels them with companies.
///
/// Company labelling is a placeholder: no extraction backend exists yet, so
/// every record comes back with `company: None` whether or not a key is
/// configured.
#[derive(Clone, Default)]
pub struct LinkExtractor {
    enrichment_key: Option<String>,
}

impl LinkExtractor {
    /// Create an extractor; `enrichment_key` is the text-extraction API key, if any.
    pub fn new(enrichment_key: Option<String>) -> Self {
        Self { enrichment_key }
    }

    /// Whether a text-extraction key was configured.
    pub fn enrichment_configured(&self) -> bool {
        self.enrichment_key.is_some()
    }

    /// Extract links from `text`, in source order.
    pub fn extract(&self, text: &str) -> Vec<LinkRecord> {
        scan_links(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_stays_unset_with_key() {
        let extractor = LinkExtractor::new(Some("key".to_string()));
        assert!(extractor.enrichment_configured());

        let records = extractor.extract("Acme: https://acme.com (https://b.io)");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.company.is_none()));
        assert_eq!(records[1].link, "https://b.io");
    }

    #[test]
    fn test_without_key() {
        let extractor = LinkExtractor::default();
        assert!(!extractor.enrichment_configured());
        assert!(extractor.extract("").is_empty());
    }
}
