//! Keyword color rules for pinning fixed colors onto matching tracks.

use crate::models::RgbColor;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A keyword rule mapping matching track names to a fixed color.
///
/// Matching is case-insensitive substring containment: a rule with keyword
/// "drum" matches "Drums", "DRUM BUS", and "Overdrums" alike. A matched
/// track and its whole subtree take the rule color instead of a wheel
/// color.
///
/// # Validation
///
/// - Keyword must be non-empty and at most 50 characters
/// - Color must be valid RGB (enforced by `RgbColor` type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRule {
    /// Case-insensitive substring to look for in track names.
    pub keyword: String,
    /// Fixed color applied to matching subtrees.
    pub color: RgbColor,
}

impl ColorRule {
    /// Creates a new rule with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::{ColorRule, RgbColor};
    ///
    /// let rule = ColorRule::new("vox", RgbColor::from_hex("#FFC800").unwrap()).unwrap();
    /// assert!(rule.matches("Lead Vox"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is empty or longer than 50
    /// characters.
    pub fn new(keyword: impl Into<String>, color: RgbColor) -> Result<Self> {
        let keyword = keyword.into();
        Self::validate_keyword(&keyword)?;
        Ok(Self { keyword, color })
    }

    /// Validates a rule keyword.
    fn validate_keyword(keyword: &str) -> Result<()> {
        if keyword.trim().is_empty() {
            anyhow::bail!("Rule keyword cannot be empty");
        }

        if keyword.len() > 50 {
            anyhow::bail!(
                "Rule keyword '{}' exceeds maximum length of 50 characters (got {})",
                keyword,
                keyword.len()
            );
        }

        Ok(())
    }

    /// Whether this rule matches the given track name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.keyword.to_lowercase())
    }
}

/// An ordered list of color rules; earlier rules win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules in priority order.
    pub rules: Vec<ColorRule>,
}

impl RuleSet {
    /// Creates a rule set from an ordered list of rules.
    #[must_use]
    pub const fn new(rules: Vec<ColorRule>) -> Self {
        Self { rules }
    }

    /// Returns the first rule matching the given track name, if any.
    #[must_use]
    pub fn first_match(&self, name: &str) -> Option<&ColorRule> {
        self.rules.iter().find(|rule| rule.matches(name))
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let color = RgbColor::new(255, 200, 0);
        let rule = ColorRule::new("vox", color).unwrap();

        assert_eq!(rule.keyword, "vox");
        assert_eq!(rule.color, color);
    }

    #[test]
    fn test_new_invalid_keyword() {
        assert!(ColorRule::new("", RgbColor::default()).is_err());
        assert!(ColorRule::new("   ", RgbColor::default()).is_err());
        assert!(ColorRule::new("k".repeat(51), RgbColor::default()).is_err());
    }

    #[test]
    fn test_matches_case_insensitive_substring() {
        let rule = ColorRule::new("drum", RgbColor::default()).unwrap();

        assert!(rule.matches("Drums"));
        assert!(rule.matches("DRUM BUS"));
        assert!(rule.matches("overdrums"));
        assert!(!rule.matches("Bass"));
    }

    #[test]
    fn test_first_match_order_wins() {
        let set = RuleSet::new(vec![
            ColorRule::new("drum bus", RgbColor::new(1, 1, 1)).unwrap(),
            ColorRule::new("drum", RgbColor::new(2, 2, 2)).unwrap(),
        ]);

        // Both rules match; the earlier one wins
        let matched = set.first_match("Drum Bus").unwrap();
        assert_eq!(matched.color, RgbColor::new(1, 1, 1));

        let matched = set.first_match("Drums").unwrap();
        assert_eq!(matched.color, RgbColor::new(2, 2, 2));
    }

    #[test]
    fn test_first_match_none() {
        let set = RuleSet::new(vec![ColorRule::new("vox", RgbColor::default()).unwrap()]);
        assert!(set.first_match("Guitar").is_none());
    }
}
