//! Layout reconstruction algorithms for positioned-fragment documents.
//!
//! This module rebuilds the logical table structure that pixel positions only
//! hint at:
//! - Row clustering (fragments → anchored rows, vertical tolerance)
//! - Column mapping (fragment position → semantic field label, horizontal tolerance)
//! - Row validity filtering (data rows vs headers and page furniture)

pub mod columns;
pub mod rows;
pub mod validity;

// Re-export main types
pub use columns::{map_columns, ColumnMap, RawRow};
pub use rows::{cluster_rows, RowClusters};
pub use validity::is_valid_row;
