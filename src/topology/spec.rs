//! Tier specification parsing.
//!
//! One tier of a fabric is described by a compact colon-separated string:
//! `COUNT[:PREFIX[:LABEL[:LABEL...]]]`. Only the count field is validated at
//! parse time; negative counts are syntactically accepted and later treated
//! as empty tiers by the builder.

use std::str::FromStr;

/// Errors that can occur while parsing a tier specification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("invalid node count '{count}' in tier spec '{spec}'")]
    InvalidCount { spec: String, count: String },
}

/// One tier of a fabric: how many nodes, an optional name prefix, and the
/// labels attached to every node of the tier (order preserved, duplicates
/// allowed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSpec {
    pub count: i64,
    pub prefix: Option<String>,
    pub labels: Vec<String>,
}

impl TierSpec {
    pub fn new(count: i64, prefix: Option<&str>, labels: &[&str]) -> Self {
        Self {
            count,
            prefix: prefix.map(str::to_string),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl FromStr for TierSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let count = fields[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| SpecError::InvalidCount {
                spec: s.to_string(),
                count: fields[0].to_string(),
            })?;
        let (prefix, labels) = match fields.len() {
            1 => (None, Vec::new()),
            2 => (Some(fields[1].to_string()), Vec::new()),
            _ => (
                Some(fields[1].to_string()),
                fields[2..].iter().map(|l| l.to_string()).collect(),
            ),
        };
        Ok(Self {
            count,
            prefix,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_only() {
        let spec: TierSpec = "4".parse().unwrap();
        assert_eq!(spec, TierSpec::new(4, None, &[]));
    }

    #[test]
    fn test_parse_count_and_prefix() {
        let spec: TierSpec = "2:leaf".parse().unwrap();
        assert_eq!(spec, TierSpec::new(2, Some("leaf"), &[]));
    }

    #[test]
    fn test_parse_labels_preserve_order_and_duplicates() {
        let spec: TierSpec = "2:x:lbl1:lbl2:lbl1".parse().unwrap();
        assert_eq!(spec, TierSpec::new(2, Some("x"), &["lbl1", "lbl2", "lbl1"]));
    }

    #[test]
    fn test_parse_negative_count_is_accepted() {
        let spec: TierSpec = "-3:leaf".parse().unwrap();
        assert_eq!(spec.count, -3);
    }

    #[test]
    fn test_parse_non_integer_count_fails() {
        let err = "two:leaf".parse::<TierSpec>().unwrap_err();
        assert_eq!(
            err,
            SpecError::InvalidCount {
                spec: "two:leaf".to_string(),
                count: "two".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_prefix_field() {
        // "2:" keeps the empty prefix rather than falling back to the default
        let spec: TierSpec = "2:".parse().unwrap();
        assert_eq!(spec.prefix, Some(String::new()));
    }
}
