//! Catalog document records and the parsed search envelope.

use serde::{Deserialize, Serialize};

/// One catalog document, restricted to the fixed result field list the
/// search requests ask for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub place: Vec<String>,
    pub modified: Option<String>,
    pub geometry_type: Option<String>,
    pub download_url: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub service_protocol: Vec<String>,
}

/// One resolved page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub num_found: u64,
    pub start: u32,
    pub records: Vec<CatalogRecord>,
}

impl SearchPage {
    /// Whether documents beyond this page exist.
    pub fn has_more(&self) -> bool {
        (self.start as u64 + self.records.len() as u64) < self.num_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_more() {
        let page = SearchPage {
            num_found: 45,
            start: 20,
            records: vec![],
        };
        assert!(page.has_more());

        let last = SearchPage {
            num_found: 20,
            start: 0,
            records: (0..20)
                .map(|i| CatalogRecord {
                    id: format!("r{}", i),
                    title: None,
                    description: None,
                    organization: None,
                    record_type: None,
                    format: None,
                    keywords: vec![],
                    place: vec![],
                    modified: None,
                    geometry_type: None,
                    download_url: None,
                    license: None,
                    service_protocol: vec![],
                })
                .collect(),
        };
        assert!(!last.has_more());
    }
}
