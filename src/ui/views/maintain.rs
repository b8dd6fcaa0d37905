//! Maintain command UI views

use std::path::Path;

use lightbox::domain::entities::{Action, Issue, ProjectReport, RemovalKind};
use lightbox::domain::value_objects::{HardlinkSupport, PermissionClass};
use lightbox::{LibraryReport, MaintenanceOptions};

use crate::ui::blocks::header::RunHeader;
use crate::ui::blocks::summary::{RunOutcome, RunSummary};
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, Tone};

/// Enabled stages, in run order
fn stage_list(options: &MaintenanceOptions) -> String {
    let stages: Vec<&str> = [
        (options.remove_hidden, "hidden files"),
        (options.remove_edits, "edit contents"),
        (options.hardlink_selects, "hardlink selects"),
        (options.fix_permissions, "permissions"),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| name)
    .collect();

    if stages.is_empty() {
        "none".to_string()
    } else {
        stages.join(", ")
    }
}

pub fn render_maintain_header(
    root: &Path,
    options: &MaintenanceOptions,
    config_source: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    RunHeader::new(Icon::Maintain, "Maintain", options.dry_run)
        .field("Library", root.display().to_string())
        .field("Stages", stage_list(options))
        .optional_field("Jobs", (options.jobs > 1).then(|| options.jobs.to_string()))
        .optional_field("Config", config_source.map(|p| p.display().to_string()))
        .render(supports_color, supports_unicode)
}

/// Single notice when deduplication has to be switched off
pub fn render_capability_notice(
    support: &HardlinkSupport,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let HardlinkSupport::Unsupported { reason } = support else {
        return None;
    };
    let block = WarningBlock::new("Hardlinks unavailable", [reason.as_str()])
        .with_hint("Select deduplication is disabled for this run.");
    Some(block.render(supports_color, supports_unicode))
}

fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    match path.strip_prefix(base) {
        Ok(rel) if rel.as_os_str().is_empty() => Path::new("."),
        Ok(rel) => rel,
        Err(_) => path,
    }
}

fn render_action(
    action: &Action,
    project: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let right = Icon::Right.render(supports_unicode);
    match action {
        Action::Removed { path, .. } => format!(
            "{} {} {}",
            Icon::Trash.colored(supports_color, supports_unicode),
            if dry_run { "would remove" } else { "removed" },
            relative(path, project).display()
        ),
        Action::Linked { select, raw } => format!(
            "{} {} {} {} {}",
            Icon::Link.colored(supports_color, supports_unicode),
            if dry_run { "would link" } else { "linked" },
            relative(select, project).display(),
            right,
            relative(raw, project).display()
        ),
        Action::ModeChanged {
            path,
            class,
            from,
            to,
        } => format!(
            "{} {} {} {} {} ({})",
            Icon::Lock.colored(supports_color, supports_unicode),
            from,
            right,
            to,
            relative(path, project).display(),
            class
        ),
    }
}

fn render_issue(issue: &Issue, supports_color: bool, supports_unicode: bool) -> String {
    let (icon, text) = if issue.is_error() {
        (Icon::Error, ColoredText::error(issue.to_string()))
    } else {
        (Icon::Warning, ColoredText::warning(issue.to_string()))
    };
    format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color)
    )
}

/// One project's block, printed as a unit once the project finishes
pub fn render_project(
    report: &ProjectReport,
    root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(
        &ColoredText::new(relative(&report.path, root).display().to_string(), Tone::Plain)
            .bold()
            .render(supports_color),
    );
    out.push('\n');

    for action in &report.actions {
        out.push_str("  ");
        out.push_str(&render_action(
            action,
            &report.path,
            dry_run,
            supports_color,
            supports_unicode,
        ));
        out.push('\n');
    }
    for issue in &report.issues {
        out.push_str("  ");
        out.push_str(&render_issue(issue, supports_color, supports_unicode));
        out.push('\n');
    }
    if report.interrupted {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("interrupted; changes may be partially applied")
                .render(supports_color)
        ));
    } else if report.is_clean() {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::dim("nothing to do").render(supports_color)
        ));
    }
    out
}

/// Removals split into resource forks and `1_EDIT` contents
fn removals_by_kind(report: &LibraryReport) -> [(usize, String); 2] {
    let mut hidden = 0;
    let mut edits = 0;
    for action in report.actions() {
        match action {
            Action::Removed {
                kind: RemovalKind::HiddenFile,
                ..
            } => hidden += 1,
            Action::Removed { .. } => edits += 1,
            _ => {}
        }
    }
    [(hidden, "hidden".to_string()), (edits, "edit".to_string())]
}

fn mode_changes_by_class(report: &LibraryReport) -> Vec<(usize, String)> {
    [
        PermissionClass::RawArchival,
        PermissionClass::SidecarMetadata,
        PermissionClass::SelectOrOther,
    ]
    .into_iter()
    .map(|wanted| {
        let n = report
            .actions()
            .filter(|a| matches!(a, Action::ModeChanged { class, .. } if *class == wanted))
            .count();
        (n, wanted.to_string())
    })
    .collect()
}

pub fn render_maintain_result(
    report: &LibraryReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let dry_run = report.options.dry_run;
    let title = if report.interrupted {
        "Maintenance Interrupted"
    } else if dry_run {
        "Dry Run Complete"
    } else if report.project_count() == 0 {
        "No Projects Found"
    } else {
        "Maintenance Complete"
    };

    let outcome = RunOutcome::from_run(report.interrupted, report.error_count());
    let mut summary = RunSummary::new(title, outcome, dry_run);

    summary.count(report.project_count(), "projects");
    summary.tally_by(report.removed_count(), "paths", "removed", &removals_by_kind(report));
    summary.tally(report.linked_count(), "selects", "linked");
    summary.tally_by(
        report.mode_change_count(),
        "modes",
        "changed",
        &mode_changes_by_class(report),
    );
    if report.error_count() > 0 {
        summary.problem(format!("{} file operations failed", report.error_count()));
    }
    if report.warning_count() > 0 {
        summary.problem(format!(
            "{} selects differ from their raw original",
            report.warning_count()
        ));
    }
    if let HardlinkSupport::Unsupported { .. } = report.capability {
        summary.problem("hardlinks unsupported; selects were left alone");
    }

    if report.interrupted {
        summary.next_step("Rerun the same command to finish");
    } else if dry_run && report.action_count() > 0 {
        summary.next_step("Run without --dry-run to apply");
    }

    summary.render(supports_color, supports_unicode)
}
