//! Export Module
//!
//! Shareable renders for one project: `1_EDIT/*.tif` → `2_EXPORT/*.jpg`
//! through the raster tool, with EXIF copied by the metadata tool.
//!
//! ## Structure
//!
//! - `options` - `ExportOptions`
//! - `preset` - size/border presets and the raster argv
//! - `metadata` - metadata tool argv, source lookup, output trimming
//! - `overrides` - JSON override rules
//! - `result` - `ExportResult`
//! - `use_case` - `ExportUseCase`

pub mod metadata;
mod options;
mod overrides;
mod preset;
mod result;
mod use_case;

pub use options::ExportOptions;
pub use overrides::{ExifTag, OverrideRule, OverrideRules};
pub use preset::{BorderSpec, ResizePreset, Separator};
pub use result::{ExportFailure, ExportOutcome, ExportResult, ExportedFile};
pub use use_case::{ExportUseCase, EDIT_EXTENSION};
