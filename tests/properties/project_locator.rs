//! Property tests for project classification.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::tempdir;

use lightbox::domain::services::ProjectLocator;
use lightbox::domain::value_objects::Stage;
use lightbox::LocalFs;

fn segment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "b", "2024-01-01 Trip", "0_RAW", "1_EDIT", "2_EXPORT", "0_raw"])
}

fn tree() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(prop::collection::vec(segment(), 1..=4), 0..=8)
}

fn has_stage_child(dir: &Path) -> bool {
    Stage::ALL.iter().any(|s| dir.join(s.dir_name()).is_dir())
}

/// Directories with a stage child whose ancestors (up to the root) have none
fn expected_projects(root: &Path, dir: &Path, out: &mut BTreeSet<PathBuf>) {
    if has_stage_child(dir) {
        out.insert(dir.to_path_buf());
        return;
    }
    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    children.sort();
    for child in children {
        expected_projects(root, &child, out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: located projects form an antichain under "is ancestor of",
    /// each has a stage child, and no project is missed.
    #[test]
    fn property_projects_never_nest(dirs in tree()) {
        let root = tempdir().unwrap();
        for segments in &dirs {
            let path = segments.iter().fold(root.path().to_path_buf(), |p, s| p.join(s));
            std::fs::create_dir_all(path).unwrap();
        }

        let fs = LocalFs::new();
        let projects = ProjectLocator::new(&fs).locate(root.path()).unwrap();
        let paths: Vec<PathBuf> = projects.iter().map(|p| p.path().to_path_buf()).collect();

        for (i, a) in paths.iter().enumerate() {
            prop_assert!(has_stage_child(a), "{} has no stage child", a.display());
            for (j, b) in paths.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{} nests inside {}", b.display(), a.display());
                }
            }
        }

        let mut expected = BTreeSet::new();
        expected_projects(root.path(), root.path(), &mut expected);
        let found: BTreeSet<PathBuf> = paths.into_iter().collect();
        prop_assert_eq!(found, expected);
    }
}
