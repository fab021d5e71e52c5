//! The page/table driver: cluster → map → filter → normalize.
//!
//! [`Extractor`] owns a validated [`Profile`] and runs the reconstruction
//! sequence over each page, collecting accepted records in row order and
//! counting rejects. It holds no other state, so one extractor may serve
//! many pages, and independent pages/documents may be processed in parallel
//! by an external driver.

use crate::error::Result;
use crate::fragment::{Fragment, Page};
use crate::layout::{cluster_rows, is_valid_row, map_columns};
use crate::normalize::normalize_row;
use crate::profile::Profile;
use crate::record::Record;

/// Outcome of processing one page.
///
/// Invariant: `records.len() + rejected == rows` — every row anchor is either
/// emitted or counted.
#[derive(Debug, Default)]
pub struct PageResult {
    /// Accepted records, in ascending row-anchor order
    pub records: Vec<Record>,
    /// Rows dropped by the validity filter or the normalizer
    pub rejected: usize,
    /// Total row anchors produced by clustering
    pub rows: usize,
}

/// Outcome of processing one document: per-page results in page order.
#[derive(Debug, Default)]
pub struct DocumentResult {
    /// Per-page results, in input page order
    pub pages: Vec<PageResult>,
}

impl DocumentResult {
    /// Accepted records across all pages, in page then row order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.pages.iter().flat_map(|page| page.records.iter())
    }

    /// Consume the result, yielding all accepted records.
    pub fn into_records(self) -> Vec<Record> {
        self.pages
            .into_iter()
            .flat_map(|page| page.records)
            .collect()
    }

    /// Total rows clustered across all pages.
    pub fn total_rows(&self) -> usize {
        self.pages.iter().map(|page| page.rows).sum()
    }

    /// Total rows rejected across all pages.
    pub fn total_rejected(&self) -> usize {
        self.pages.iter().map(|page| page.rejected).sum()
    }
}

/// The reconstruction engine for one document type.
pub struct Extractor {
    profile: Profile,
}

impl Extractor {
    /// Create an extractor, validating the profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] for an empty column map or
    /// schema, negative tolerances, or rules targeting unknown fields. An
    /// invalid profile processes no rows at all.
    pub fn new(profile: Profile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// The active profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Process one page of fragments.
    ///
    /// Clusters the fragments into rows, then runs column mapping, the
    /// validity filter and the normalizer over each row in ascending anchor
    /// order. Rejected rows are counted, never surfaced as errors.
    pub fn process_page(&self, fragments: Vec<Fragment>) -> PageResult {
        let clusters = cluster_rows(fragments, self.profile.vertical_tolerance as u32);
        let rows = clusters.len();

        let mut records = Vec::new();
        let mut rejected = 0;

        for (anchor, row) in clusters.into_rows() {
            let raw = map_columns(&row, &self.profile.column_map, self.profile.horizontal_tolerance as u32);

            if !is_valid_row(&raw, &self.profile.id_label, &self.profile.secondary_id_label) {
                log::debug!("row at anchor {} is not a data row: {:?}", anchor, raw);
                rejected += 1;
                continue;
            }

            match normalize_row(&raw, &self.profile) {
                Some(record) => records.push(record),
                None => {
                    log::debug!("could not match identifier at anchor {}: {:?}", anchor, raw);
                    rejected += 1;
                },
            }
        }

        PageResult {
            records,
            rejected,
            rows,
        }
    }

    /// Process a whole document, page by page.
    ///
    /// Pages are independent; their results are aggregated in input order.
    /// No retries, no cross-document state.
    pub fn process_document(&self, pages: Vec<Page>) -> DocumentResult {
        let mut result = DocumentResult::default();

        for page in pages {
            log::debug!("processing page {}", page.number);
            let page_result = self.process_page(page.fragments);
            log::debug!(
                "page {}: {} rows, {} records, {} rejected",
                page.number,
                page_result.rows,
                page_result.records.len(),
                page_result.rejected
            );
            result.pages.push(page_result);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColumnMap;
    use crate::profile::FieldRule;

    fn test_profile() -> Profile {
        Profile {
            name: "test".to_string(),
            column_map: ColumnMap::from_pairs(&[(66, "ID"), (79, "ID2"), (226, "Zariadenie")]),
            vertical_tolerance: 3,
            horizontal_tolerance: 6,
            id_label: "ID".to_string(),
            secondary_id_label: "ID2".to_string(),
            organization_field: "organizacia".to_string(),
            fields: vec!["organizacia".to_string(), "zariadenie".to_string()],
            rules: vec![FieldRule::copy_dash_null("Zariadenie", "zariadenie")],
        }
    }

    #[test]
    fn test_invalid_profile_refused() {
        let mut profile = test_profile();
        profile.vertical_tolerance = -1;
        assert!(Extractor::new(profile).is_err());
    }

    #[test]
    fn test_accepted_and_rejected_rows_accounted() {
        let extractor = Extractor::new(test_profile()).unwrap();
        let fragments = vec![
            // Data row: id + organization share the line
            Fragment::new(100, 66, "482"),
            Fragment::new(100, 79, "Ministry"),
            // Noise row: no identifier
            Fragment::new(203, 226, "Building A"),
        ];

        let page = extractor.process_page(fragments);
        assert_eq!(page.rows, 2);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.rejected, 1);
        assert_eq!(page.records[0].id, 482);
        assert_eq!(page.records[0].text("organizacia"), Some("Ministry"));
    }

    #[test]
    fn test_records_in_row_order() {
        let extractor = Extractor::new(test_profile()).unwrap();
        // Discovery order deliberately bottom-up
        let fragments = vec![
            Fragment::new(300, 66, "2 Second org"),
            Fragment::new(100, 66, "1 First org"),
        ];

        let page = extractor.process_page(fragments);
        let ids: Vec<i64> = page.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_document_aggregation() {
        let extractor = Extractor::new(test_profile()).unwrap();
        let mut page1 = Page::new(1);
        page1.fragments.push(Fragment::new(100, 66, "1 Org A"));
        let mut page2 = Page::new(2);
        page2.fragments.push(Fragment::new(100, 66, "not a data row"));

        let result = extractor.process_document(vec![page1, page2]);
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.records().count(), 1);
        assert_eq!(result.total_rows(), 2);
        assert_eq!(result.total_rejected(), 1);
    }

    #[test]
    fn test_empty_page() {
        let extractor = Extractor::new(test_profile()).unwrap();
        let page = extractor.process_page(vec![]);
        assert_eq!(page.rows, 0);
        assert_eq!(page.records.len(), 0);
        assert_eq!(page.rejected, 0);
    }
}
