//! # retable
//!
//! Reconstructs structured tabular records from documents that preserve only
//! the absolute pixel position of each text fragment, as produced by
//! PDF-to-XML conversion (`pdftohtml -xml` and friends).
//!
//! Source documents of this kind carry layout noise: fragments sit a few
//! pixels off their true row or column baseline, and values bleed across
//! adjacent logical columns. Naive fixed-grid extraction is unreliable, so
//! this crate reconstructs the table instead:
//!
//! 1. **Row clustering** — fragments are grouped into logical rows under a
//!    configurable vertical pixel tolerance ([`cluster_rows`]).
//! 2. **Column mapping** — each fragment's horizontal position is resolved to
//!    a semantic field label via a static position map with horizontal
//!    tolerance ([`map_columns`]).
//! 3. **Validity filtering** — header rows, page furniture and blank bands
//!    are discarded before normalization ([`is_valid_row`]).
//! 4. **Normalization** — compound cell values (a year and a region sharing
//!    one cell, an area and a parcel number, …) are split into their paired
//!    output fields and a typed [`Record`] is produced ([`normalize_row`]).
//!
//! The [`Extractor`] drives 1–4 per page and keeps rejection accounting.
//! Fetching documents, converting binary PDFs to positioned-fragment XML, and
//! persisting records are all the caller's responsibility — the crate
//! consumes in-memory fragments (or already-converted XML via [`xml`]) and
//! emits in-memory records.
//!
//! ## Quick Start
//!
//! ```
//! use retable::{profiles, Extractor, Fragment};
//!
//! # fn main() -> Result<(), retable::Error> {
//! let extractor = Extractor::new(profiles::finance_pdf_2014())?;
//!
//! let fragments = vec![
//!     Fragment::new(100, 116, "482 Ministry of Finance"),
//!     Fragment::new(102, 543, "Office building"),
//! ];
//!
//! let page = extractor.process_page(fragments);
//! assert_eq!(page.records.len(), 1);
//! assert_eq!(page.records[0].id, 482);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input models
pub mod fragment;

// Layout reconstruction
pub mod layout;

// Field normalization
pub mod normalize;
pub mod record;

// Configuration profiles
pub mod profile;
pub mod profiles;

// Page/document driver
pub mod pipeline;

// Positioned-fragment XML input adapter
pub mod xml;

// Re-exports
pub use error::{Error, Result};
pub use fragment::{Fragment, Page};
pub use layout::{cluster_rows, is_valid_row, map_columns, ColumnMap, RawRow, RowClusters};
pub use normalize::normalize_row;
pub use pipeline::{DocumentResult, Extractor, PageResult};
pub use profile::{CompoundKind, FieldRule, Profile};
pub use record::{FieldValue, Record};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
