//! Maintenance options

use crate::domain::services::PermissionPolicy;

/// Options for a library maintenance run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceOptions {
    /// Remove `._*` files anywhere in a project
    pub remove_hidden: bool,
    /// Empty `1_EDIT`
    pub remove_edits: bool,
    /// Replace selects with hardlinks to identical raw files
    pub hardlink_selects: bool,
    /// Lock raw files, keep sidecars writable
    pub fix_permissions: bool,
    /// Report what would happen without touching anything
    pub dry_run: bool,
    /// Projects processed concurrently (at least 1)
    pub jobs: usize,
    pub policy: PermissionPolicy,
}

impl Default for MaintenanceOptions {
    fn default() -> Self {
        Self {
            remove_hidden: true,
            remove_edits: true,
            hardlink_selects: true,
            fix_permissions: true,
            dry_run: false,
            jobs: 1,
            policy: PermissionPolicy::default(),
        }
    }
}

impl MaintenanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stage disabled; enable the ones under test
    pub fn none() -> Self {
        Self {
            remove_hidden: false,
            remove_edits: false,
            hardlink_selects: false,
            fix_permissions: false,
            ..Self::default()
        }
    }

    pub fn with_remove_hidden(mut self, enabled: bool) -> Self {
        self.remove_hidden = enabled;
        self
    }

    pub fn with_remove_edits(mut self, enabled: bool) -> Self {
        self.remove_edits = enabled;
        self
    }

    pub fn with_hardlink_selects(mut self, enabled: bool) -> Self {
        self.hardlink_selects = enabled;
        self
    }

    pub fn with_fix_permissions(mut self, enabled: bool) -> Self {
        self.fix_permissions = enabled;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_policy(mut self, policy: PermissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether any stage would run at all
    pub fn any_enabled(&self) -> bool {
        self.remove_hidden || self.remove_edits || self.hardlink_selects || self.fix_permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything_but_dry_run() {
        let opts = MaintenanceOptions::default();
        assert!(opts.remove_hidden && opts.remove_edits);
        assert!(opts.hardlink_selects && opts.fix_permissions);
        assert!(!opts.dry_run);
        assert_eq!(opts.jobs, 1);
    }

    #[test]
    fn jobs_are_clamped_to_one() {
        assert_eq!(MaintenanceOptions::new().with_jobs(0).jobs, 1);
    }

    #[test]
    fn none_disables_all_stages() {
        assert!(!MaintenanceOptions::none().any_enabled());
        assert!(MaintenanceOptions::none()
            .with_fix_permissions(true)
            .any_enabled());
    }
}
