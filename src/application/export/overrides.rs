//! EXIF override rules
//!
//! A JSON file of rules; each rule optionally matches against the tag lines
//! exported from the metadata source and appends `set` directives.
//!
//! ```json
//! {"rules": [{"pattern": {"tag": "Exif.Image.Model", "value": "X100"},
//!             "tags": [{"tag": "Exif.Photo.LensModel", "value": "23mm"}]}]}
//! ```

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{LightboxError, LightboxResult};

fn default_value_type() -> String {
    "Ascii".to_string()
}

/// One tag assignment (or, in a pattern, one tag/value-regex pair)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExifTag {
    pub tag: String,
    pub value: String,
    #[serde(default = "default_value_type")]
    pub value_type: String,
}

impl ExifTag {
    /// `set <tag> <type> <value>` line for the metadata tool's import
    pub fn directive(&self) -> String {
        format!("set {} {} {}", self.tag, self.value_type, self.value)
    }
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    rules: Vec<RuleDe>,
}

#[derive(Debug, Deserialize)]
struct RuleDe {
    #[serde(default)]
    pattern: Option<ExifTag>,
    tags: Vec<ExifTag>,
}

#[derive(Debug, Clone)]
pub struct OverrideRule {
    /// `None` matches every file
    matcher: Option<Regex>,
    pub pattern: Option<ExifTag>,
    pub tags: Vec<ExifTag>,
}

impl OverrideRule {
    /// Any exported line contains the pattern's tag followed by its value
    pub fn matches(&self, lines: &[String]) -> bool {
        match &self.matcher {
            Some(re) => lines.iter().any(|line| re.is_match(line)),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverrideRules {
    source: Option<PathBuf>,
    rules: Vec<OverrideRule>,
}

impl OverrideRules {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> LightboxResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LightboxError::InvalidOverrides {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::parse(&content, path)
    }

    /// Parse rules; `file` is only used for error messages
    pub fn parse(json: &str, file: &Path) -> LightboxResult<Self> {
        let invalid = |message: String| LightboxError::InvalidOverrides {
            file: file.to_path_buf(),
            message,
        };

        let parsed: RulesFile = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;

        let rules = parsed
            .rules
            .into_iter()
            .map(|rule| -> LightboxResult<OverrideRule> {
                let matcher = match &rule.pattern {
                    Some(p) => {
                        let expr = format!("(?i).*{}.*{}.*", regex::escape(&p.tag), p.value);
                        Some(Regex::new(&expr).map_err(|e| invalid(e.to_string()))?)
                    }
                    None => None,
                };
                Ok(OverrideRule {
                    matcher,
                    pattern: rule.pattern,
                    tags: rule.tags,
                })
            })
            .collect::<LightboxResult<Vec<_>>>()?;

        Ok(Self {
            source: Some(file.to_path_buf()),
            rules,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Exported lines followed by the directives of every matching rule.
    /// Rules are matched against the exported lines only.
    pub fn apply(&self, exported: Vec<String>) -> Vec<String> {
        let extra: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&exported))
            .flat_map(|rule| rule.tags.iter().map(ExifTag::directive))
            .collect();

        let mut lines = exported;
        lines.extend(extra);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = r#"{
        "rules": [
            {
                "pattern": {"tag": "Exif.Image.Model", "value": "x100"},
                "tags": [
                    {"tag": "Exif.Photo.LensModel", "value": "Fujinon 23mm"},
                    {"tag": "Exif.Photo.FocalLengthIn35mmFilm", "value": "35", "value_type": "Short"}
                ]
            },
            {
                "tags": [{"tag": "Exif.Image.Artist", "value": "Jane Doe"}]
            }
        ]
    }"#;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matching_rule_appends_directives_in_order() {
        let rules = OverrideRules::parse(RULES, Path::new("rules.json")).unwrap();
        let exported = lines(&["set Exif.Image.Model Ascii X100V"]);

        assert_eq!(
            rules.apply(exported),
            lines(&[
                "set Exif.Image.Model Ascii X100V",
                "set Exif.Photo.LensModel Ascii Fujinon 23mm",
                "set Exif.Photo.FocalLengthIn35mmFilm Short 35",
                "set Exif.Image.Artist Ascii Jane Doe",
            ])
        );
    }

    #[test]
    fn rule_without_pattern_always_applies() {
        let rules = OverrideRules::parse(RULES, Path::new("rules.json")).unwrap();
        let out = rules.apply(lines(&["set Exif.Image.Model Ascii GFX100S"]));
        // "x100" is a substring of "GFX100S", so the first rule matches too
        assert_eq!(out.len(), 4);

        let out = rules.apply(lines(&["set Exif.Image.Make Ascii Canon"]));
        assert_eq!(out.last().unwrap(), "set Exif.Image.Artist Ascii Jane Doe");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn tag_dots_are_literal() {
        let json = r#"{"rules":[{"pattern":{"tag":"Exif.Image.Model","value":"A"},"tags":[{"tag":"T","value":"v"}]}]}"#;
        let rules = OverrideRules::parse(json, Path::new("r.json")).unwrap();
        assert!(!rules.rules()[0].matches(&lines(&["set ExifXImageXModel Ascii A"])));
        assert!(rules.rules()[0].matches(&lines(&["set Exif.Image.Model Ascii a"])));
    }

    #[test]
    fn invalid_json_names_the_file() {
        let err = OverrideRules::parse("{\"rules\": 3}", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, LightboxError::InvalidOverrides { ref file, .. } if file == Path::new("bad.json")));
    }

    #[test]
    fn invalid_value_regex_is_rejected() {
        let json = r#"{"rules":[{"pattern":{"tag":"Exif.Image.Model","value":"("},"tags":[]}]}"#;
        assert!(OverrideRules::parse(json, Path::new("r.json")).is_err());
    }

    #[test]
    fn empty_rules_leave_lines_untouched() {
        let exported = lines(&["set Exif.Image.Make Ascii Fuji"]);
        assert_eq!(OverrideRules::empty().apply(exported.clone()), exported);
    }
}
