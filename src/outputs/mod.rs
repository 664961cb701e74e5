//! Output generation modules for the cleaned dataset and validation report.
//!
//! This module contains submodules responsible for writing the pipeline's
//! results to disk:
//!
//! # Submodules
//!
//! - [`json`]: Writes the cleaned dataset and the per-record validation
//!   report as JSON files
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── cleaned.json   # The cleaned Dataset, same shape as the input
//! └── report.json    # Summary counts plus one verdict per record
//! ```

pub mod json;
