//! Serialization of the sidebar for the site configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::RenderError;

/// Output serialization format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array, importable from a JavaScript config.
    #[default]
    Json,
    /// YAML sequence.
    Yaml,
}

/// Unrecognized output format name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown output format '{0}' (expected 'json' or 'yaml')")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Serialize sidebar entries.
///
/// `pretty` selects indented JSON; YAML output is always block style.
/// The result ends with a newline.
pub fn render(
    entries: &[Entry],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, RenderError> {
    let mut output = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(entries)?,
        OutputFormat::Json => serde_json::to_string(entries)?,
        OutputFormat::Yaml => serde_yaml::to_string(entries)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::group("Setup", vec![Entry::leaf("Install", "02-setup/01-install")]),
            Entry::leaf("Faq", "faq"),
        ]
    }

    #[test]
    fn test_compact_json() {
        let output = render(&sample(), OutputFormat::Json, false).unwrap();
        assert_eq!(
            output,
            "[{\"label\":\"Setup\",\"items\":[{\"label\":\"Install\",\"slug\":\"02-setup/01-install\"}]},{\"label\":\"Faq\",\"slug\":\"faq\"}]\n"
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let output = render(&sample(), OutputFormat::Json, true).unwrap();
        assert!(output.contains("\n  {\n    \"label\": \"Setup\""));
        let parsed: Vec<Entry> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_yaml_parses_back() {
        let output = render(&sample(), OutputFormat::Yaml, true).unwrap();
        assert!(output.contains("label: Setup"));
        assert!(output.contains("slug: faq"));
        let parsed: Vec<Entry> = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(render(&[], OutputFormat::Json, true).unwrap(), "[]\n");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        let err = "toml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("toml"));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Json, OutputFormat::Yaml] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
