//! Rename Module
//!
//! Renames raw originals to `YYYYMMDD_HHMM_NNNN.<ext>` using the capture
//! timestamp reported by the metadata tool.

mod options;
mod result;
mod timestamp;
mod use_case;

pub use options::RenameOptions;
pub use result::{RenameOutcome, RenameResult};
pub use timestamp::{canonical_name, CaptureTime, DATETIME_ORIGINAL_TAG};
pub use use_case::RenameUseCase;
