use serde::Deserialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A source format that the external parsing module can render.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    #[default]
    Yaml,
}

impl Format {
    /// The tag passed as the first argument to the module's `parse`.
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

/// Every format tag this page knows how to request, sorted.
pub fn available_formats() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Format::iter().map(Format::tag).collect();
    tags.sort();
    tags
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_yaml_tag() {
        assert_eq!(Format::Yaml.tag(), "yaml");
        assert_eq!(Format::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!(Format::from_str("YAML"), Ok(Format::Yaml));
        assert!(Format::from_str("toml").is_err());
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(available_formats(), vec!["yaml"]);
    }
}
