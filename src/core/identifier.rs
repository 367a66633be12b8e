// File: src/core/identifier.rs
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, VocabError};

const SEPARATOR: char = '-';

/// Discriminates a primary headword from a derived entry.
///
/// A main word (`422-degrade`) carries only the entry number; a sub-word
/// (`422-2-degradation`) shares its main number and adds a positive
/// sub-number. The second filename segment counts as a sub-number only when
/// it is entirely digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Main { number: u32, label: String },
    Sub { number: u32, sub: u32, label: String },
}

/// A parsed page identifier: the filename stem of a generated page, which
/// encodes ordering and grouping in its numeric prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryId {
    raw: String,
    kind: EntryKind,
}

impl EntryId {
    /// Parses an identifier string.
    ///
    /// Accepted shapes: `"341"`, `"341-2"`, `"341-violence"`,
    /// `"341-2-violently"`. Anything that does not start with a digit run
    /// is rejected eagerly; defaulting such input to entry 0 would misfile
    /// it into the first chapter. A literal sub-number of 0 is rejected as
    /// well, since 0 is reserved for "no sub-word".
    pub fn parse(raw: &str) -> Result<EntryId> {
        let malformed = || VocabError::MalformedIdentifier(raw.to_string());

        let mut segments = raw.split(SEPARATOR);
        let head = segments.next().unwrap_or("");
        if head.is_empty() || !head.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let number: u32 = head.parse().map_err(|_| malformed())?;

        let rest: Vec<&str> = segments.collect();
        let (sub, label_segments) = match rest.split_first() {
            None => (0, &rest[..]),
            Some((second, tail)) => {
                if !second.is_empty() && second.chars().all(|c| c.is_ascii_digit()) {
                    let sub: u32 = second.parse().map_err(|_| malformed())?;
                    if sub == 0 {
                        return Err(malformed());
                    }
                    (sub, tail)
                } else {
                    (0, &rest[..])
                }
            }
        };

        // Empty segments come from doubled or trailing separators; dropping
        // them collapses the label to single-space-separated words.
        let label = label_segments
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        let kind = if sub == 0 {
            EntryKind::Main { number, label }
        } else {
            EntryKind::Sub { number, sub, label }
        };
        Ok(EntryId {
            raw: raw.to_string(),
            kind,
        })
    }

    /// The identifier exactly as it appeared in the source filename.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn main_number(&self) -> u32 {
        match self.kind {
            EntryKind::Main { number, .. } | EntryKind::Sub { number, .. } => number,
        }
    }

    /// 0 for a main word, positive for a sub-word.
    pub fn sub_number(&self) -> u32 {
        match self.kind {
            EntryKind::Main { .. } => 0,
            EntryKind::Sub { sub, .. } => sub,
        }
    }

    pub fn is_sub(&self) -> bool {
        matches!(self.kind, EntryKind::Sub { .. })
    }

    pub fn label(&self) -> &str {
        match &self.kind {
            EntryKind::Main { label, .. } | EntryKind::Sub { label, .. } => label,
        }
    }

    /// Canonical numeric portion: `"341"` or `"341-2"`.
    pub fn numeric_id(&self) -> String {
        match self.kind {
            EntryKind::Main { number, .. } => number.to_string(),
            EntryKind::Sub { number, sub, .. } => format!("{}-{}", number, sub),
        }
    }

    /// Human-facing form for the index list: numbers and label words joined
    /// by single spaces, e.g. `341 2 violently`.
    pub fn display(&self) -> String {
        let numeric = match self.kind {
            EntryKind::Main { number, .. } => number.to_string(),
            EntryKind::Sub { number, sub, .. } => format!("{} {}", number, sub),
        };
        if self.label().is_empty() {
            numeric
        } else {
            format!("{} {}", numeric, self.label())
        }
    }

    /// Filename of the page this identifier belongs to.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.raw)
    }

    /// Sort key for the entry order: main number ascending, and within one
    /// main number the main word (sub 0) strictly before its sub-words in
    /// sub-number order. Labels never participate.
    pub fn order_key(&self) -> (u32, u32) {
        (self.main_number(), self.sub_number())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Total order over entries, strict weak: entries with equal keys are
/// duplicates and compare equal here (a stable sort keeps their input
/// order; see `DuplicatePolicy` for the fail-fast alternative).
pub fn compare_entries(a: &EntryId, b: &EntryId) -> Ordering {
    a.order_key().cmp(&b.order_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(raw: &str) -> EntryId {
        EntryId::parse(raw).unwrap()
    }

    #[test]
    fn parses_bare_number() {
        let parsed = id("341");
        assert_eq!(parsed.main_number(), 341);
        assert_eq!(parsed.sub_number(), 0);
        assert_eq!(parsed.label(), "");
        assert!(!parsed.is_sub());
    }

    #[test]
    fn parses_number_with_sub() {
        let parsed = id("341-2");
        assert_eq!(parsed.main_number(), 341);
        assert_eq!(parsed.sub_number(), 2);
        assert_eq!(parsed.label(), "");
        assert!(parsed.is_sub());
    }

    #[test]
    fn parses_number_with_label() {
        let parsed = id("341-violence");
        assert_eq!(parsed.main_number(), 341);
        assert_eq!(parsed.sub_number(), 0);
        assert_eq!(parsed.label(), "violence");
    }

    #[test]
    fn parses_number_sub_and_label() {
        let parsed = id("341-2-violently");
        assert_eq!(parsed.main_number(), 341);
        assert_eq!(parsed.sub_number(), 2);
        assert_eq!(parsed.label(), "violently");
    }

    #[test]
    fn multi_word_label_uses_single_spaces() {
        assert_eq!(id("7-take-off").label(), "take off");
        assert_eq!(id("7--take--off").label(), "take off");
    }

    #[test]
    fn second_segment_is_sub_only_when_numeric() {
        // "2nd" contains digits but is not all digits, so it is a label.
        let parsed = id("341-2nd-attempt");
        assert_eq!(parsed.sub_number(), 0);
        assert_eq!(parsed.label(), "2nd attempt");
    }

    #[test]
    fn rejects_missing_leading_number() {
        assert!(matches!(
            EntryId::parse("-badword"),
            Err(VocabError::MalformedIdentifier(_))
        ));
        assert!(matches!(
            EntryId::parse("badword"),
            Err(VocabError::MalformedIdentifier(_))
        ));
        assert!(matches!(
            EntryId::parse(""),
            Err(VocabError::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn rejects_reserved_sub_zero() {
        assert!(matches!(
            EntryId::parse("341-0-ghost"),
            Err(VocabError::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn rejects_mixed_leading_segment() {
        assert!(EntryId::parse("341x-word").is_err());
    }

    #[test]
    fn display_and_file_name() {
        let parsed = id("341-2-violently");
        assert_eq!(parsed.display(), "341 2 violently");
        assert_eq!(parsed.numeric_id(), "341-2");
        assert_eq!(parsed.file_name(), "341-2-violently.html");
        assert_eq!(parsed.to_string(), "341-2-violently");
    }

    #[test]
    fn main_word_sorts_before_its_sub_words() {
        let mut ids = vec![id("341-2-b"), id("341-a")];
        ids.sort_by(compare_entries);
        let order: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(order, vec!["341-a", "341-2-b"]);
    }

    #[test]
    fn full_ordering_scenario() {
        let mut ids = vec![
            id("369-respect"),
            id("341-2-violently"),
            id("1-run"),
            id("341-violence"),
        ];
        ids.sort_by(compare_entries);
        let order: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            order,
            vec!["1-run", "341-violence", "341-2-violently", "369-respect"]
        );
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let a = id("12-alpha");
        let b = id("12-3-beta");
        assert_eq!(compare_entries(&a, &b), compare_entries(&b, &a).reverse());
        assert_eq!(compare_entries(&a, &a), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn numeric_portion_round_trips(main in 0u32..10_000, sub in 1u32..100) {
            let raw = format!("{}-{}", main, sub);
            let parsed = EntryId::parse(&raw).unwrap();
            prop_assert_eq!(parsed.numeric_id(), raw);
        }

        #[test]
        fn sorting_is_idempotent(
            keys in proptest::collection::vec((0u32..50, 0u32..4), 0..40)
        ) {
            let ids: Vec<EntryId> = keys
                .iter()
                .map(|&(main, sub)| {
                    let raw = if sub == 0 {
                        format!("{}-word", main)
                    } else {
                        format!("{}-{}-word", main, sub)
                    };
                    EntryId::parse(&raw).unwrap()
                })
                .collect();
            let mut once = ids;
            once.sort_by(compare_entries);
            let mut twice = once.clone();
            twice.sort_by(compare_entries);
            prop_assert_eq!(once, twice);
        }
    }
}
