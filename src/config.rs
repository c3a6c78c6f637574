use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(ConfigError::Invalid {
                key: "SHADE_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for the command-line host, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub text_path: PathBuf,
    pub votes_path: PathBuf,
    pub format: OutputFormat,
    pub saturation: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't have to touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let format = match lookup("SHADE_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let saturation = match lookup("SHADE_SATURATION") {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid { key: "SHADE_SATURATION", value })?,
            ),
            None => None,
        };

        Ok(Self {
            text_path: PathBuf::from(required("SHADE_TEXT_PATH")?),
            votes_path: PathBuf::from(required("SHADE_VOTES_PATH")?),
            format,
            saturation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_html_without_override() {
        let config = Config::from_lookup(lookup(&[
            ("SHADE_TEXT_PATH", "post.txt"),
            ("SHADE_VOTES_PATH", "votes.json"),
        ]))
        .unwrap();
        assert_eq!(config.text_path, PathBuf::from("post.txt"));
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.saturation, None);
    }

    #[test]
    fn reads_format_and_saturation() {
        let config = Config::from_lookup(lookup(&[
            ("SHADE_TEXT_PATH", "post.txt"),
            ("SHADE_VOTES_PATH", "votes.json"),
            ("SHADE_FORMAT", "Summary"),
            ("SHADE_SATURATION", " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Summary);
        assert_eq!(config.saturation, Some(25));
    }

    #[test]
    fn format_is_trimmed() {
        let config = Config::from_lookup(lookup(&[
            ("SHADE_TEXT_PATH", "post.txt"),
            ("SHADE_VOTES_PATH", "votes.json"),
            ("SHADE_FORMAT", " json\n"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::Invalid { key: "SHADE_FORMAT", value }) if value == "yaml"
        ));
    }

    #[test]
    fn missing_and_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("SHADE_TEXT_PATH", "post.txt")])),
            Err(ConfigError::Missing("SHADE_VOTES_PATH"))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[
                ("SHADE_TEXT_PATH", "post.txt"),
                ("SHADE_VOTES_PATH", "votes.json"),
                ("SHADE_FORMAT", "pdf"),
            ])),
            Err(ConfigError::Invalid { key: "SHADE_FORMAT", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[
                ("SHADE_TEXT_PATH", "post.txt"),
                ("SHADE_VOTES_PATH", "votes.json"),
                ("SHADE_SATURATION", "-3"),
            ])),
            Err(ConfigError::Invalid { key: "SHADE_SATURATION", .. })
        ));
    }
}
