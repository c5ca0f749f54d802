//! Live text filtering of a card collection.
//!
//! The filter engine derives the visible subset of a column from the raw card
//! collection and a free-text query. The query is trimmed, lower-cased and split
//! on runs of whitespace into a keyword set; a card stays visible only when every
//! keyword is a case-insensitive substring of its text.
//!
//! Filtering is a pure derivation recomputed on every render.
//!
//! # Example
//!
//! ```rust
//! use zanban::column::filter_cards;
//! use zanban::Card;
//!
//! let cards = vec![Card::new("a", "Buy milk"), Card::new("b", "Walk dog")];
//! let outcome = filter_cards(Some(&cards), Some("  MILK "));
//!
//! let visible = outcome.visible.unwrap();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "a");
//! assert_eq!(outcome.result_count, Some(1));
//! ```

use crate::domain::Card;

/// Lower-cased keywords derived from a filter query.
///
/// Never contains empty strings: the query is trimmed before it is split on
/// whitespace runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Parses a raw query into its keyword set.
    ///
    /// An absent, empty or whitespace-only query yields an empty set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zanban::column::Keywords;
    ///
    /// let keywords = Keywords::parse(Some("  Buy   MILK "));
    /// assert_eq!(keywords.as_slice(), ["buy", "milk"]);
    /// assert!(Keywords::parse(Some("   ")).is_empty());
    /// ```
    #[must_use]
    pub fn parse(query: Option<&str>) -> Self {
        let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
            return Self::default();
        };

        Self(query.to_lowercase().split_whitespace().map(String::from).collect())
    }

    /// Returns `true` when filtering is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The keywords in query order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Tests whether a card text satisfies every keyword.
    ///
    /// Missing text passes only the empty keyword set.
    #[must_use]
    pub fn matches(&self, text: Option<&str>) -> bool {
        if self.is_empty() {
            return true;
        }

        text.is_some_and(|text| {
            let haystack = text.to_lowercase();
            self.0.iter().all(|keyword| haystack.contains(keyword.as_str()))
        })
    }

    /// Computes character ranges of `text` covered by keyword occurrences.
    ///
    /// Ranges are `(start, end)` character indices with exclusive end, sorted
    /// and merged so they can be painted left to right. Returns an empty vector
    /// when lower-casing changes the character count of `text`, since indices
    /// would no longer line up with the original string.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.is_empty() {
            return vec![];
        }

        let lowered = text.to_lowercase();
        if lowered.chars().count() != text.chars().count() {
            return vec![];
        }

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for keyword in &self.0 {
            let keyword_chars = keyword.chars().count();
            for (byte_start, _) in lowered.match_indices(keyword.as_str()) {
                let start = lowered[..byte_start].chars().count();
                ranges.push((start, start + keyword_chars));
            }
        }

        ranges.sort_unstable();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }
}

/// Result of filtering one column for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    /// Cards passing the filter, in collection order. `None` while loading.
    pub visible: Option<Vec<&'a Card>>,

    /// Number of matches, present only when a non-empty query is active and
    /// the collection is loaded.
    pub result_count: Option<usize>,

    /// Size of the unfiltered collection. `None` while loading.
    pub total_count: Option<usize>,

    /// Keyword set the outcome was computed with.
    pub keywords: Keywords,
}

/// Derives the visible subset of `cards` for `query`.
///
/// - `cards == None` produces `visible == None` so the caller can show a
///   loading indicator instead of a list.
/// - An absent or blank query lets every card through and reports no result
///   count.
pub fn filter_cards<'a>(cards: Option<&'a [Card]>, query: Option<&str>) -> FilterOutcome<'a> {
    let keywords = Keywords::parse(query);

    let _span = tracing::trace_span!(
        "filter_cards",
        total = cards.map(<[Card]>::len),
        keywords = keywords.as_slice().len()
    )
    .entered();

    let visible: Option<Vec<&Card>> = cards.map(|cards| {
        cards
            .iter()
            .filter(|card| keywords.matches(card.text()))
            .collect()
    });

    let result_count = if keywords.is_empty() {
        None
    } else {
        visible.as_ref().map(Vec::len)
    };

    FilterOutcome {
        visible,
        result_count,
        total_count: cards.map(<[Card]>::len),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Card> {
        vec![
            Card::new("a", "Buy milk"),
            Card::new("b", "Walk dog"),
            Card::new("c", "Buy dog food"),
            Card::untitled("d"),
        ]
    }

    fn ids(outcome: &FilterOutcome<'_>) -> Vec<String> {
        outcome
            .visible
            .as_ref()
            .map(|v| v.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_padded_uppercase_query_matches_case_insensitively() {
        let cards = sample();
        let outcome = filter_cards(Some(&cards), Some("  MILK "));
        assert_eq!(ids(&outcome), ["a"]);
        assert_eq!(outcome.result_count, Some(1));
        assert_eq!(outcome.total_count, Some(4));
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let cards = sample();
        for query in [None, Some(""), Some("   \t ")] {
            let outcome = filter_cards(Some(&cards), query);
            assert_eq!(ids(&outcome), ["a", "b", "c", "d"]);
            assert_eq!(outcome.result_count, None);
        }
    }

    #[test]
    fn test_every_keyword_must_match() {
        let cards = sample();
        let outcome = filter_cards(Some(&cards), Some("buy   dog"));
        assert_eq!(ids(&outcome), ["c"]);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        let cards = sample();
        let outcome = filter_cards(Some(&cards), Some("al"));
        assert_eq!(ids(&outcome), ["b"]);
    }

    #[test]
    fn test_untitled_card_fails_non_empty_query() {
        let cards = vec![Card::untitled("x")];
        let outcome = filter_cards(Some(&cards), Some("x"));
        assert!(ids(&outcome).is_empty());
        assert_eq!(outcome.result_count, Some(0));
    }

    #[test]
    fn test_loading_passes_through() {
        let outcome = filter_cards(None, Some("milk"));
        assert!(outcome.visible.is_none());
        assert!(outcome.result_count.is_none());
        assert!(outcome.total_count.is_none());
    }

    #[test]
    fn test_keywords_never_empty_strings() {
        let keywords = Keywords::parse(Some("\t a  \n b "));
        assert_eq!(keywords.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_highlight_ranges_merge_overlaps() {
        let keywords = Keywords::parse(Some("bu uy milk"));
        assert_eq!(keywords.highlight_ranges("Buy milk"), vec![(0, 3), (4, 8)]);
    }

    #[test]
    fn test_highlight_ranges_use_char_indices() {
        let keywords = Keywords::parse(Some("é"));
        assert_eq!(keywords.highlight_ranges("café é"), vec![(3, 4), (5, 6)]);
    }
}
