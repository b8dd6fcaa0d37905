//! Property tests for timestamp-based names.

use proptest::prelude::*;

use lightbox::application::{canonical_name, CaptureTime};

fn capture_time() -> impl Strategy<Value = CaptureTime> {
    (1990u16..2100, 1u8..=12, 1u8..=28, 0u8..24, 0u8..60, 0u8..60).prop_map(
        |(year, month, day, hour, minute, second)| CaptureTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        },
    )
}

proptest! {
    /// PROPERTY: a parsed timestamp line yields the same time back.
    #[test]
    fn property_parse_formatted_line(time in capture_time()) {
        let line = format!(
            "set Exif.Photo.DateTimeOriginal Ascii {:04}:{:02}:{:02} {:02}:{:02}:{:02}",
            time.year, time.month, time.day, time.hour, time.minute, time.second
        );
        prop_assert_eq!(CaptureTime::parse(&line), Some(time));
    }

    /// PROPERTY: canonical names are stable: renaming a canonical name again
    /// gives the same name.
    #[test]
    fn property_canonical_name_is_fixed_point(
        time in capture_time(),
        stem in "[A-Za-z0-9_]{4,12}",
        ext in "[A-Za-z]{1,4}",
    ) {
        let name = canonical_name(&time, &stem, &ext).unwrap();
        let (new_stem, new_ext) = name.rsplit_once('.').unwrap();
        prop_assert_eq!(canonical_name(&time, new_stem, new_ext), Some(name.clone()));
        prop_assert!(name.starts_with(&time.file_prefix()));
    }

    /// PROPERTY: parsing arbitrary tool output never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = CaptureTime::parse(&s);
    }
}
