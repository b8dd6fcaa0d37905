//! Capture timestamp parsing

use std::sync::OnceLock;

use regex::Regex;

pub const DATETIME_ORIGINAL_TAG: &str = "Exif.Photo.DateTimeOriginal";

/// `DateTimeOriginal` as recorded by the camera (no time zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaptureTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// `set <tag> [Ascii] YYYY:MM:DD HH:MM:SS` on any line
const DATETIME_PATTERN: &str = r"(?im)^\s*set Exif\.Photo\.DateTimeOriginal\s*(?:Ascii)?\s+(\d{4}):(\d{2}):(\d{2}) (\d{2}):(\d{2}):(\d{2})";

fn datetime_re() -> Result<&'static Regex, &'static regex::Error> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATETIME_PATTERN)).as_ref()
}

impl CaptureTime {
    /// Find the metadata tool's `set Exif.Photo.DateTimeOriginal Ascii
    /// YYYY:MM:DD HH:MM:SS` line anywhere in its output. Leading whitespace
    /// is ignored.
    pub fn parse(output: &str) -> Option<Self> {
        let re = match datetime_re() {
            Ok(re) => re,
            Err(err) => {
                tracing::error!(error = %err, "capture time pattern does not compile");
                return None;
            }
        };
        let caps = re.captures(output)?;
        let num = |i: usize| caps.get(i).map(|m| m.as_str());
        Some(Self {
            year: num(1)?.parse().ok()?,
            month: num(2)?.parse().ok()?,
            day: num(3)?.parse().ok()?,
            hour: num(4)?.parse().ok()?,
            minute: num(5)?.parse().ok()?,
            second: num(6)?.parse().ok()?,
        })
    }

    /// `YYYYMMDD_HHMM`
    pub fn file_prefix(&self) -> String {
        format!(
            "{:04}{:02}{:02}_{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// `YYYYMMDD_HHMM_NNNN.<ext>`: NNNN is the camera's frame counter (last four
/// characters of the original stem) and the extension is lowercased.
pub fn canonical_name(time: &CaptureTime, stem: &str, extension: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let counter: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    Some(format!(
        "{}_{}.{}",
        time.file_prefix(),
        counter,
        extension.to_lowercase()
    ))
}
