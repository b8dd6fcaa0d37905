//! Property tests for permission transitions.

use proptest::prelude::*;

use lightbox::domain::services::PermissionPolicy;
use lightbox::domain::value_objects::{FileMode, PermissionClass};

fn class() -> impl Strategy<Value = PermissionClass> {
    prop_oneof![
        Just(PermissionClass::RawArchival),
        Just(PermissionClass::SidecarMetadata),
        Just(PermissionClass::SelectOrOther),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying the transition once reaches a fixed point.
    #[test]
    fn property_transition_is_idempotent(bits in 0u32..=0o7777, class in class()) {
        let policy = PermissionPolicy::default();
        let current = FileMode::new(bits);
        let next = policy.transition(class, current).unwrap_or(current);
        prop_assert_eq!(policy.transition(class, next), None);
    }

    /// PROPERTY: originals and selects end up without write or execute bits,
    /// sidecars end up rw for everyone; nothing else changes.
    #[test]
    fn property_target_modes(bits in 0u32..=0o7777, class in class()) {
        let target = class.target_mode(FileMode::new(bits));
        prop_assert_eq!(target.bits() & 0o111, 0);
        match class {
            PermissionClass::SidecarMetadata => {
                prop_assert_eq!(target.bits() & 0o666, 0o666);
            }
            _ => {
                prop_assert!(!target.is_writable_by_anyone());
                prop_assert_eq!(target.bits() & 0o444, bits & 0o444);
            }
        }
        prop_assert_eq!(target.bits() & 0o7000, bits & 0o7000);
    }

    /// PROPERTY: sidecar classification ignores case and a leading dot.
    #[test]
    fn property_sidecar_extension_case_insensitive(
        stem in "[A-Za-z0-9_]{1,12}",
        upper in any::<bool>(),
    ) {
        let policy = PermissionPolicy::new([".XmP"]);
        let ext = if upper { "XMP" } else { "xmp" };
        let name = format!("{}.{}", stem, ext);
        prop_assert_eq!(
            policy.classify_root(std::path::Path::new(&name)),
            PermissionClass::SidecarMetadata
        );
    }
}
