//! Variant generation configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::{DEFAULT_PLUS_END, DEFAULT_PLUS_START};
use crate::service::DEFAULT_DOT_LIMIT;

/// Defaults and ceilings applied to generation requests.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Dot scheme result cap when the request gives none.
    #[serde(default = "default_dot_limit")]
    pub dot_default_limit: usize,

    /// First plus counter when the request gives no range.
    #[serde(default = "default_plus_start")]
    pub plus_default_start: i64,

    /// Last plus counter when the request gives no range.
    #[serde(default = "default_plus_end")]
    pub plus_default_end: i64,

    /// Hard ceiling on results per request.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum number of custom tags per request.
    #[serde(default = "default_max_custom_tags")]
    pub max_custom_tags: usize,

    /// Maximum length of a single custom tag, in characters.
    #[serde(default = "default_max_tag_length")]
    pub max_tag_length: usize,

    /// Remove existing dots from the local-part before dot expansion.
    #[serde(default = "default_strip_dots")]
    pub strip_dots: bool,
}

const fn default_dot_limit() -> usize {
    DEFAULT_DOT_LIMIT
}

const fn default_plus_start() -> i64 {
    DEFAULT_PLUS_START
}

const fn default_plus_end() -> i64 {
    DEFAULT_PLUS_END
}

const fn default_max_results() -> usize {
    1000
}

const fn default_max_custom_tags() -> usize {
    100
}

const fn default_max_tag_length() -> usize {
    64
}

const fn default_strip_dots() -> bool {
    true
}

impl GenerationConfig {
    /// Validate the generation configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a ceiling is zero or a default exceeds its ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::Message(
                "generation.max_results cannot be 0".to_string(),
            ));
        }

        if self.dot_default_limit == 0 {
            return Err(ConfigError::Message(
                "generation.dot_default_limit cannot be 0".to_string(),
            ));
        }

        if self.dot_default_limit > self.max_results {
            return Err(ConfigError::Message(format!(
                "generation.dot_default_limit ({}) exceeds generation.max_results ({})",
                self.dot_default_limit, self.max_results
            )));
        }

        let plus_span = if self.plus_default_start > self.plus_default_end {
            0
        } else {
            self.plus_default_end
                .abs_diff(self.plus_default_start)
                .saturating_add(1)
        };
        if plus_span > self.max_results as u64 {
            return Err(ConfigError::Message(format!(
                "generation plus default range ({}..={}) exceeds generation.max_results ({})",
                self.plus_default_start, self.plus_default_end, self.max_results
            )));
        }

        if self.max_tag_length == 0 {
            return Err(ConfigError::Message(
                "generation.max_tag_length cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            dot_default_limit: DEFAULT_DOT_LIMIT,
            plus_default_start: DEFAULT_PLUS_START,
            plus_default_end: DEFAULT_PLUS_END,
            max_results: 1000,
            max_custom_tags: 100,
            max_tag_length: 64,
            strip_dots: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.plus_default_start, 1);
        assert_eq!(config.plus_default_end, 50);
        assert!(config.strip_dots);
    }

    #[test]
    fn test_generation_validation() {
        let config = GenerationConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            dot_default_limit: 2000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            plus_default_end: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            plus_default_start: 10,
            plus_default_end: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
