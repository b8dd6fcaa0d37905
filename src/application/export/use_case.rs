//! Export Use Case
//!
//! Renders every `1_EDIT/*.tif` of a project into `2_EXPORT/*.jpg`, then
//! copies curated EXIF tags from the camera file onto the render.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{EntryInfo, FileSystem, ToolInvocation, ToolOutput, ToolRunner};
use crate::domain::value_objects::Stage;
use crate::error::{LightboxError, LightboxResult};

use super::metadata;
use super::options::ExportOptions;
use super::overrides::OverrideRules;
use super::preset::ResizePreset;
use super::result::{ExportFailure, ExportOutcome, ExportResult, ExportedFile};

/// Extension of edited images
pub const EDIT_EXTENSION: &str = "tif";

pub struct ExportUseCase<FS: FileSystem, TR: ToolRunner> {
    fs: FS,
    pub(super) runner: TR,
    cancel: Arc<AtomicBool>,
}

impl<FS: FileSystem, TR: ToolRunner> ExportUseCase<FS, TR> {
    pub fn new(fs: FS, runner: TR) -> Self {
        Self {
            fs,
            runner,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Export every edit. `on_file` sees each outcome as soon as it is known.
    ///
    /// Precondition failures (missing stage directory, no edits, bad rules
    /// file) and a tool that cannot be started at all are returned as `Err`;
    /// everything else is a per-file failure.
    pub fn execute(
        &self,
        options: &ExportOptions,
        on_file: &mut dyn FnMut(&ExportOutcome),
    ) -> LightboxResult<ExportResult> {
        let project = options.project.as_path();
        let raw_dir = self.require_stage(project, Stage::Raw)?;
        let edit_dir = self.require_stage(project, Stage::Edit)?;
        let export_dir = project.join(Stage::Export.dir_name());

        let rules = match &options.overrides {
            Some(path) => OverrideRules::load(path)?,
            None => OverrideRules::empty(),
        };

        let edits = self.edited_files(&edit_dir)?;
        tracing::debug!(count = edits.len(), raw = %raw_dir.display(), "found edits");

        if !options.dry_run && !self.fs.is_dir(&export_dir) {
            self.fs.create_dir_all(&export_dir)?;
        }

        let preset = ResizePreset::new(options.size, options.border);
        let mut result = ExportResult {
            project: project.to_path_buf(),
            export_dir: export_dir.clone(),
            preset: preset.clone(),
            overrides: options.overrides.clone(),
            dry_run: options.dry_run,
            outcomes: Vec::new(),
            interrupted: false,
        };

        for edit in edits {
            if self.cancel.load(Ordering::SeqCst) {
                result.interrupted = true;
                break;
            }
            let outcome = match self.export_one(options, &preset, &rules, &export_dir, &edit) {
                Ok(file) => ExportOutcome::Exported(file),
                Err(err @ LightboxError::ToolUnavailable { .. }) => return Err(err),
                Err(err) => ExportOutcome::Failed(ExportFailure {
                    source: edit.path.clone(),
                    message: err.to_string(),
                }),
            };
            on_file(&outcome);
            result.outcomes.push(outcome);
        }

        Ok(result)
    }

    fn require_stage(&self, project: &Path, stage: Stage) -> LightboxResult<PathBuf> {
        let dir = project.join(stage.dir_name());
        if self.fs.is_dir(&dir) {
            Ok(dir)
        } else {
            Err(LightboxError::StageNotFound {
                stage: stage.dir_name(),
                path: dir,
            })
        }
    }

    fn edited_files(&self, edit_dir: &Path) -> LightboxResult<Vec<EntryInfo>> {
        let edits: Vec<EntryInfo> = self
            .fs
            .list_dir(edit_dir)?
            .into_iter()
            .filter(|e| e.is_plain_file() && !e.is_hidden())
            .filter(|e| {
                e.path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(EDIT_EXTENSION))
            })
            .collect();

        if edits.is_empty() {
            return Err(LightboxError::NothingToProcess {
                pattern: format!("*.{}", EDIT_EXTENSION),
                dir: edit_dir.to_path_buf(),
            });
        }
        Ok(edits)
    }

    fn export_one(
        &self,
        options: &ExportOptions,
        preset: &ResizePreset,
        rules: &OverrideRules,
        export_dir: &Path,
        edit: &EntryInfo,
    ) -> LightboxResult<ExportedFile> {
        let stem = edit
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let target = export_dir.join(format!(
            "{}.{}",
            metadata::target_stem(&stem),
            metadata::EXPORT_EXTENSION
        ));
        let source_stem = metadata::source_stem(&stem);

        let metadata_source = metadata::find_metadata_source(&self.fs, &options.project, source_stem)?
            .ok_or_else(|| LightboxError::NothingToProcess {
                pattern: format!("{}*.*", source_stem),
                dir: options.project.clone(),
            })?;

        let raster = preset.raster_invocation(&options.magick, &edit.path, &target);
        let clear = metadata::clear_invocation(&options.exiv2, &target);
        let export = metadata::export_invocation(&options.exiv2, &metadata_source);

        if options.dry_run {
            let import = metadata::import_invocation(&options.exiv2, &target, &[]);
            return Ok(ExportedFile {
                source: edit.path.clone(),
                target,
                metadata_source,
                overrides_applied: 0,
                commands: [raster, clear, export, import]
                    .iter()
                    .map(ToolInvocation::display)
                    .collect(),
            });
        }

        self.run_checked(&raster)?;
        self.run_checked(&clear)?;
        let exported = self.run_checked(&export)?;

        let lines = metadata::exported_lines(&exported.stdout);
        let exported_count = lines.len();
        let directives = rules.apply(lines);
        let import = metadata::import_invocation(&options.exiv2, &target, &directives);
        self.run_checked(&import)?;

        Ok(ExportedFile {
            source: edit.path.clone(),
            target,
            metadata_source,
            overrides_applied: directives.len() - exported_count,
            commands: [raster, clear, export, import]
                .iter()
                .map(ToolInvocation::display)
                .collect(),
        })
    }

    fn run_checked(&self, invocation: &ToolInvocation) -> LightboxResult<ToolOutput> {
        let output = self.runner.run(invocation)?;
        if output.success {
            Ok(output)
        } else {
            Err(LightboxError::ToolFailed {
                tool: invocation.program.clone(),
                status: output.status_label(),
                message: first_line(&output.stderr)
                    .unwrap_or_else(|| invocation.display()),
            })
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
