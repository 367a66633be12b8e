// File: src/core/catalog.rs
use std::collections::HashMap;

use crate::core::chapters::ChapterMap;
use crate::core::identifier::{compare_entries, EntryId};
use crate::error::{Result, VocabError};

/// How `Catalog::new` treats two entries sharing a `(main, sub)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail fast with `DuplicateIdentifier`.
    Reject,
    /// Keep both; the stable sort leaves them in input order.
    Allow,
}

/// One item of the ordered index stream: a chapter opening, or an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem<'a> {
    Chapter { threshold: u32, title: &'a str },
    Entry(&'a EntryId),
}

/// The fully ordered entry list an index is built from.
///
/// Construction sorts the identifiers (main number ascending, main word
/// before its sub-words, sub-number ascending) and applies the duplicate
/// policy; after that the catalog is immutable and `stream` can be walked
/// any number of times.
#[derive(Debug, Clone)]
pub struct Catalog {
    ordered: Vec<EntryId>,
}

impl Catalog {
    pub fn new<I>(ids: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = EntryId>,
    {
        let ordered: Vec<EntryId> = ids.into_iter().collect();

        if policy == DuplicatePolicy::Reject {
            let mut seen: HashMap<(u32, u32), &EntryId> = HashMap::new();
            for id in &ordered {
                if let Some(first) = seen.insert(id.order_key(), id) {
                    return Err(VocabError::DuplicateIdentifier {
                        first: first.to_string(),
                        second: id.to_string(),
                        key: id.numeric_id(),
                    });
                }
            }
        }

        let mut ordered = ordered;
        ordered.sort_by(compare_entries);
        Ok(Self { ordered })
    }

    pub fn entries(&self) -> &[EntryId] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Lazy walk over the sorted entries, interleaved with chapter openings.
    ///
    /// A `Chapter` item is emitted exactly when the assigned threshold
    /// differs from the previously emitted one: one opening per transition,
    /// never two in a row, and chapters without members are skipped
    /// entirely. Entries below every threshold are emitted with no opening
    /// and do not reset the tracking.
    pub fn stream<'a>(&'a self, chapters: &'a ChapterMap) -> ChapterStream<'a> {
        ChapterStream {
            entries: self.ordered.iter(),
            chapters,
            current: None,
            pending: None,
        }
    }

    /// Number of chapter openings `stream` would emit.
    pub fn chapter_count(&self, chapters: &ChapterMap) -> usize {
        self.stream(chapters)
            .filter(|item| matches!(item, CatalogItem::Chapter { .. }))
            .count()
    }
}

pub struct ChapterStream<'a> {
    entries: std::slice::Iter<'a, EntryId>,
    chapters: &'a ChapterMap,
    current: Option<u32>,
    pending: Option<&'a EntryId>,
}

impl<'a> Iterator for ChapterStream<'a> {
    type Item = CatalogItem<'a>;

    fn next(&mut self) -> Option<CatalogItem<'a>> {
        if let Some(entry) = self.pending.take() {
            return Some(CatalogItem::Entry(entry));
        }
        let entry = self.entries.next()?;
        match self.chapters.assign(entry.main_number()) {
            Some((threshold, title)) if self.current != Some(threshold) => {
                self.current = Some(threshold);
                self.pending = Some(entry);
                Some(CatalogItem::Chapter { threshold, title })
            }
            _ => Some(CatalogItem::Entry(entry)),
        }
    }
}
