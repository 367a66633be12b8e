// File: src/core/chapters.rs
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, VocabError};

/// Ordered mapping from a starting entry number to a chapter title.
///
/// An entry with main number `n` belongs to the chapter with the greatest
/// threshold `<= n`. Entries below every threshold belong to no chapter.
/// Thresholds are distinct and sorted once at construction, so lookups are
/// a binary search instead of a rescan per entry.
#[derive(Debug, Clone, Default)]
pub struct ChapterMap {
    // ascending by threshold
    breaks: Vec<(u32, String)>,
}

impl ChapterMap {
    /// Builds a map from `(threshold, title)` pairs in any order.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        let mut breaks: Vec<(u32, String)> = entries.into_iter().collect();
        breaks.sort_by_key(|&(threshold, _)| threshold);
        for pair in breaks.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(VocabError::DuplicateThreshold(pair[0].0));
            }
        }
        Ok(Self { breaks })
    }

    /// Loads `chapters.json`: a JSON object whose keys are decimal entry
    /// numbers and whose values are chapter titles.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let raw: BTreeMap<String, String> =
            serde_json::from_reader(reader).map_err(|source| VocabError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, title) in raw {
            let threshold: u32 = key
                .parse()
                .map_err(|_| VocabError::InvalidThreshold(key.clone()))?;
            entries.push((threshold, title));
        }
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// The chapter for `main_number`: the greatest threshold `<=` it, with
    /// its title. `None` when the number is below every threshold.
    pub fn assign(&self, main_number: u32) -> Option<(u32, &str)> {
        let upper = self
            .breaks
            .partition_point(|&(threshold, _)| threshold <= main_number);
        upper
            .checked_sub(1)
            .map(|i| (self.breaks[i].0, self.breaks[i].1.as_str()))
    }

    /// Thresholds and titles in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.breaks
            .iter()
            .map(|(threshold, title)| (*threshold, title.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map() -> ChapterMap {
        ChapterMap::new(vec![
            (1, "第1章：基本動詞".to_string()),
            (341, "第13章：抽象概念".to_string()),
            (369, "第14章：人間関係".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn assigns_greatest_threshold_at_or_below() {
        let chapters = map();
        assert_eq!(chapters.assign(1), Some((1, "第1章：基本動詞")));
        assert_eq!(chapters.assign(340), Some((1, "第1章：基本動詞")));
        assert_eq!(chapters.assign(341), Some((341, "第13章：抽象概念")));
        assert_eq!(chapters.assign(368), Some((341, "第13章：抽象概念")));
        assert_eq!(chapters.assign(500), Some((369, "第14章：人間関係")));
    }

    #[test]
    fn below_every_threshold_is_unassigned() {
        let chapters = ChapterMap::new(vec![(10, "Ch1".to_string())]).unwrap();
        assert_eq!(chapters.assign(5), None);
        assert_eq!(chapters.assign(0), None);
        assert_eq!(chapters.assign(10), Some((10, "Ch1")));
    }

    #[test]
    fn empty_map_assigns_nothing() {
        let chapters = ChapterMap::default();
        assert!(chapters.is_empty());
        assert_eq!(chapters.assign(42), None);
    }

    #[test]
    fn rejects_duplicate_thresholds() {
        let result = ChapterMap::new(vec![(5, "A".to_string()), (5, "B".to_string())]);
        assert!(matches!(result, Err(VocabError::DuplicateThreshold(5))));
    }

    #[test]
    fn unsorted_input_is_ordered_at_construction() {
        let chapters = ChapterMap::new(vec![
            (369, "C".to_string()),
            (1, "A".to_string()),
            (341, "B".to_string()),
        ])
        .unwrap();
        let thresholds: Vec<u32> = chapters.iter().map(|(t, _)| t).collect();
        assert_eq!(thresholds, vec![1, 341, 369]);
    }

    #[test]
    fn loads_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"1": "第1章", "341": "第13章"}}"#).unwrap();

        let chapters = ChapterMap::from_json_file(&path).unwrap();
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters.assign(350), Some((341, "第13章")));
    }

    #[test]
    fn rejects_non_numeric_threshold_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"one": "第1章"}}"#).unwrap();

        assert!(matches!(
            ChapterMap::from_json_file(&path),
            Err(VocabError::InvalidThreshold(_))
        ));
    }
}
