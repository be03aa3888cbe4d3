//! Generation requests and scheme parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::address::EmailAddress;

/// Default first counter value for the plus scheme.
pub const DEFAULT_PLUS_START: i64 = 1;

/// Default last counter value for the plus scheme.
pub const DEFAULT_PLUS_END: i64 = 50;

/// Variant scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Dot insertion in the local-part.
    #[default]
    Dot,
    /// `+tag` suffix on the local-part.
    Plus,
}

impl Scheme {
    /// Lowercase name, also used as a metrics label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Plus => "plus",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for plus-tag generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlusParams {
    /// Inclusive counter range followed by custom tags.
    Range {
        /// First counter value.
        range_start: i64,
        /// Last counter value (inclusive).
        range_end: i64,
        /// Literal tags appended after the counters, in order.
        custom_tags: Vec<String>,
    },
    /// Counters `1..=limit`, no custom tags.
    Limit {
        /// Last counter value.
        limit: i64,
    },
}

impl PlusParams {
    /// Build range parameters.
    #[must_use]
    pub const fn range(range_start: i64, range_end: i64, custom_tags: Vec<String>) -> Self {
        Self::Range {
            range_start,
            range_end,
            custom_tags,
        }
    }

    /// Build flat limit parameters.
    #[must_use]
    pub const fn limit(limit: i64) -> Self {
        Self::Limit { limit }
    }

    /// Inclusive counter bounds.
    #[must_use]
    pub const fn bounds(&self) -> (i64, i64) {
        match self {
            Self::Range {
                range_start,
                range_end,
                ..
            } => (*range_start, *range_end),
            Self::Limit { limit } => (1, *limit),
        }
    }

    /// Custom tags, empty for the flat shape.
    #[must_use]
    pub fn custom_tags(&self) -> &[String] {
        match self {
            Self::Range { custom_tags, .. } => custom_tags,
            Self::Limit { .. } => &[],
        }
    }

    /// Number of counter values in the range (zero when start exceeds end).
    #[must_use]
    pub const fn counter_len(&self) -> u64 {
        let (start, end) = self.bounds();
        if start > end {
            return 0;
        }
        end.abs_diff(start).saturating_add(1)
    }

    /// Upper bound on the number of addresses these parameters produce.
    #[must_use]
    pub fn max_results(&self) -> u64 {
        self.counter_len()
            .saturating_add(self.custom_tags().len() as u64)
    }
}

impl Default for PlusParams {
    fn default() -> Self {
        Self::range(DEFAULT_PLUS_START, DEFAULT_PLUS_END, Vec::new())
    }
}

/// Scheme selection with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeParams {
    /// Dot scheme, capped at `limit` results.
    Dot {
        /// Maximum number of variants.
        limit: usize,
    },
    /// Plus scheme.
    Plus(PlusParams),
}

impl SchemeParams {
    /// Scheme these parameters belong to.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        match self {
            Self::Dot { .. } => Scheme::Dot,
            Self::Plus(_) => Scheme::Plus,
        }
    }
}

/// A validated request for one variant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Base address.
    pub address: EmailAddress,
    /// Scheme and parameters.
    pub params: SchemeParams,
}

impl GenerationRequest {
    /// Create a new request.
    #[must_use]
    pub const fn new(address: EmailAddress, params: SchemeParams) -> Self {
        Self { address, params }
    }

    /// Selected scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.params.scheme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_serde() {
        assert_eq!(serde_json::to_string(&Scheme::Dot).unwrap(), "\"dot\"");
        let scheme: Scheme = serde_json::from_str("\"plus\"").unwrap();
        assert_eq!(scheme, Scheme::Plus);
        assert_eq!(Scheme::Plus.to_string(), "plus");
    }

    #[test]
    fn test_counter_len() {
        assert_eq!(PlusParams::range(1, 50, vec![]).counter_len(), 50);
        assert_eq!(PlusParams::range(5, 2, vec![]).counter_len(), 0);
        assert_eq!(PlusParams::limit(200).counter_len(), 200);
        assert_eq!(PlusParams::limit(0).counter_len(), 0);
        assert_eq!(
            PlusParams::range(i64::MIN, i64::MAX, vec![]).counter_len(),
            u64::MAX
        );
    }

    #[test]
    fn test_max_results_counts_tags() {
        let params = PlusParams::range(1, 2, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(params.max_results(), 4);
        assert_eq!(PlusParams::limit(7).max_results(), 7);
    }

    #[test]
    fn test_default_params() {
        let params = PlusParams::default();
        assert_eq!(params.bounds(), (1, 50));
        assert!(params.custom_tags().is_empty());
    }

    #[test]
    fn test_request_scheme() {
        let address = EmailAddress::parse("john@gmail.com").unwrap();
        let request = GenerationRequest::new(address, SchemeParams::Dot { limit: 10 });
        assert_eq!(request.scheme(), Scheme::Dot);
    }
}
