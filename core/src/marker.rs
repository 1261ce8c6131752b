use std::fmt;

pub const DEFAULT_MARKER: &str = "vetrom-gallery";
pub const MARKER_ID_SEPARATOR: char = ':';

/// A class token that opts a container into gallery construction:
/// `<marker>` or `<marker>:<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerPattern(String);

/// A matched marker token. The numeric id is accepted but does not group
/// or deduplicate galleries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub id: Option<u64>,
}

impl MarkerPattern {
    pub fn parse(value: &str) -> Result<Self, MarkerError> {
        if value.is_empty() {
            return Err(MarkerError::Empty);
        }
        for (idx, ch) in value.chars().enumerate() {
            if ch.is_whitespace() || ch == MARKER_ID_SEPARATOR {
                return Err(MarkerError::InvalidCharacter { ch, index: idx });
            }
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, token: &str) -> Option<MarkerMatch> {
        let rest = token.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            return Some(MarkerMatch { id: None });
        }
        let digits = rest.strip_prefix(MARKER_ID_SEPARATOR)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Overlong ids still match; they just carry no value.
        Some(MarkerMatch {
            id: digits.parse().ok(),
        })
    }

    /// First matching token of a whitespace separated class list.
    pub fn find_in_class_list(&self, class_list: &str) -> Option<MarkerMatch> {
        class_list
            .split_whitespace()
            .find_map(|token| self.matches(token))
    }
}

impl Default for MarkerPattern {
    fn default() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }
}

impl fmt::Display for MarkerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for MarkerPattern {
    type Err = MarkerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    Empty,
    InvalidCharacter { ch: char, index: usize },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::Empty => write!(f, "gallery marker must not be empty"),
            MarkerError::InvalidCharacter { ch, index } => {
                write!(f, "invalid character {ch:?} in gallery marker at position {index}")
            }
        }
    }
}

impl std::error::Error for MarkerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_marker_matches() {
        let pattern = MarkerPattern::default();
        assert_eq!(pattern.matches("vetrom-gallery"), Some(MarkerMatch { id: None }));
    }

    #[test]
    fn numeric_suffix_matches() {
        let pattern = MarkerPattern::default();
        assert_eq!(pattern.matches("vetrom-gallery:12"), Some(MarkerMatch { id: Some(12) }));
    }

    #[test]
    fn near_misses_are_rejected() {
        let pattern = MarkerPattern::default();
        for token in [
            "vetrom-gallery:",
            "vetrom-gallery:a1",
            "vetrom-gallery:1a",
            "vetrom-gallery-container",
            "vetrom-galleryx",
            "xvetrom-gallery",
            "vetrom-gallery:-1",
        ] {
            assert_eq!(pattern.matches(token), None, "{token}");
        }
    }

    #[test]
    fn class_list_scan_uses_any_token() {
        let pattern = MarkerPattern::default();
        assert_eq!(
            pattern.find_in_class_list("card  vetrom-gallery:3 wide"),
            Some(MarkerMatch { id: Some(3) })
        );
        assert_eq!(pattern.find_in_class_list("card wide"), None);
    }

    #[test]
    fn parse_rejects_separator_and_whitespace() {
        assert_eq!(MarkerPattern::parse(""), Err(MarkerError::Empty));
        assert_eq!(
            MarkerPattern::parse("a:b"),
            Err(MarkerError::InvalidCharacter { ch: ':', index: 1 })
        );
        assert!("my gallery".parse::<MarkerPattern>().is_err());
        assert_eq!(MarkerPattern::parse("photos").map(|p| p.to_string()), Ok("photos".to_string()));
    }
}
