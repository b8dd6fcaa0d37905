//! Maintenance Use Case
//!
//! `Init → ProbeCapability → Locate → {Sweep → Dedup → FixPermissions}×N → Done`

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ProjectDirectory, ProjectReport};
use crate::domain::ports::{FileSystem, MaintenanceEvent, MaintenanceEventSink};
use crate::domain::services::ProjectLocator;
use crate::domain::value_objects::HardlinkSupport;
use crate::error::LightboxResult;

use super::context::{Interrupted, RemovedPaths, StageContext};
use super::options::MaintenanceOptions;
use super::result::LibraryReport;
use super::{dedup, permissions, sweeper};

/// Maintenance use case - sweeps, dedupes and locks every project of a library
pub struct MaintenancePipeline<FS: FileSystem> {
    pub(super) fs: FS,
    cancel: Arc<AtomicBool>,
}

impl<FS: FileSystem> MaintenancePipeline<FS> {
    pub fn new(fs: FS) -> Self {
        Self {
            fs,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a cancellation flag (set from a Ctrl-C handler)
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Fail early on a missing or non-directory root
    pub fn check_root(&self, root: &Path) -> LightboxResult<()> {
        ProjectLocator::new(&self.fs).check_root(root)
    }

    /// Run every enabled stage on every project below `root`.
    ///
    /// Only precondition failures (missing or non-directory root) are
    /// returned as `Err`; everything else ends up in the report.
    pub fn execute(
        &self,
        root: &Path,
        options: &MaintenanceOptions,
        sink: &dyn MaintenanceEventSink,
    ) -> LightboxResult<LibraryReport> {
        let locator = ProjectLocator::new(&self.fs);
        locator.check_root(root)?;

        let capability = if options.hardlink_selects {
            let support = self.fs.probe_hardlinks(root);
            tracing::debug!(root = %root.display(), %support, "hardlink probe");
            support
        } else {
            HardlinkSupport::Disabled
        };
        sink.on_event(MaintenanceEvent::Capability {
            support: capability.clone(),
        });

        let projects = locator.locate(root)?;
        sink.on_event(MaintenanceEvent::Located {
            root: root.to_path_buf(),
            project_count: projects.len(),
        });

        let mut report = LibraryReport::new(root.to_path_buf(), options.clone(), capability);
        let dedup_enabled = report.capability.is_supported();

        let finished = self.process_all(&projects, options, dedup_enabled, sink);
        report.projects = finished.into_iter().flatten().collect();
        report.interrupted = self.is_cancelled();
        Ok(report)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Results indexed by locate position; `None` for projects never started
    fn process_all(
        &self,
        projects: &[ProjectDirectory],
        options: &MaintenanceOptions,
        dedup_enabled: bool,
        sink: &dyn MaintenanceEventSink,
    ) -> Vec<Option<ProjectReport>> {
        let jobs = options.jobs.clamp(1, projects.len().max(1));
        let slots: Mutex<Vec<Option<ProjectReport>>> = Mutex::new(vec![None; projects.len()]);
        let next = AtomicUsize::new(0);
        // Serializes sink output so each project is one contiguous block
        let output = Mutex::new(());

        let worker = || loop {
            if self.is_cancelled() {
                break;
            }
            let index = next.fetch_add(1, Ordering::SeqCst);
            let Some(project) = projects.get(index) else {
                break;
            };

            let project_report = self.process_project(project, options, dedup_enabled);

            {
                let _guard = output.lock().unwrap_or_else(|e| e.into_inner());
                sink.on_event(MaintenanceEvent::ProjectFinished {
                    index,
                    report: project_report.clone(),
                });
            }
            let mut slots = slots.lock().unwrap_or_else(|e| e.into_inner());
            slots[index] = Some(project_report);
        };

        if jobs == 1 {
            worker();
        } else {
            std::thread::scope(|scope| {
                for _ in 0..jobs {
                    scope.spawn(&worker);
                }
            });
        }

        slots.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn process_project(
        &self,
        project: &ProjectDirectory,
        options: &MaintenanceOptions,
        dedup_enabled: bool,
    ) -> ProjectReport {
        tracing::debug!(project = %project.path().display(), "processing project");
        let ctx = StageContext::new(&self.fs, options.dry_run, &self.cancel);
        let mut report = ProjectReport::new(project.path());

        if run_stages(&ctx, project, options, dedup_enabled, &mut report).is_err() {
            tracing::debug!(project = %project.path().display(), "interrupted");
            report.interrupted = true;
        }
        report
    }
}

/// Sweep, then dedup, then permissions. Each stage sees what the earlier
/// ones did (or would have done, in dry run).
fn run_stages<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    project: &ProjectDirectory,
    options: &MaintenanceOptions,
    dedup_enabled: bool,
    report: &mut ProjectReport,
) -> Result<(), Interrupted> {
    ctx.checkpoint()?;
    let mut removed = RemovedPaths::default();
    let mut linked = BTreeSet::new();

    if options.remove_hidden {
        sweeper::remove_hidden_files(ctx, project, &mut removed, report)?;
    }
    if options.remove_edits {
        sweeper::remove_edit_contents(ctx, project, &mut removed, report)?;
    }
    if options.hardlink_selects && dedup_enabled {
        linked = dedup::link_selects(ctx, project, &options.policy, &removed, report)?;
    }
    if options.fix_permissions {
        permissions::enforce(ctx, project, &options.policy, &removed, &linked, report)?;
    }
    Ok(())
}
