// File: src/core/engine.rs
use std::path::{Path, PathBuf};

use crate::core::catalog::{Catalog, DuplicatePolicy};
use crate::core::chapters::ChapterMap;
use crate::core::identifier::EntryId;
use crate::core::types::Vocabulary;
use crate::error::{Result, VocabError};
use crate::persistence::{load_chapters, load_vocabulary, scan_page_stems, write_text_atomic};
use crate::render;

/// Facade over the whole generation pipeline. The binaries stay thin; the
/// engine owns the loaded data and the output layout.
pub struct SiteEngine {
    vocabulary: Vocabulary,
    chapters: ChapterMap,
    pages_dir: PathBuf,
}

/// One written page, for progress reporting.
pub struct GeneratedPage {
    pub path: PathBuf,
    pub is_sub: bool,
}

/// Outcome of an index build.
pub struct IndexSummary {
    pub entries: usize,
    pub chapters: usize,
}

impl SiteEngine {
    pub fn new(
        vocabulary: Vocabulary,
        chapters: ChapterMap,
        pages_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vocabulary,
            chapters,
            pages_dir: pages_dir.into(),
        }
    }

    /// Full pipeline: vocabulary data plus chapter configuration.
    pub fn from_files(
        vocab_path: &Path,
        chapters_path: &Path,
        pages_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self::new(
            load_vocabulary(vocab_path)?,
            load_chapters(chapters_path)?,
            pages_dir,
        ))
    }

    /// Page generation only; no chapter configuration needed.
    pub fn from_vocabulary(vocab_path: &Path, pages_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(
            load_vocabulary(vocab_path)?,
            ChapterMap::default(),
            pages_dir,
        ))
    }

    /// Index build only; entries come from scanning the pages directory.
    pub fn from_pages(chapters_path: &Path, pages_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(
            Vocabulary { words: Vec::new() },
            load_chapters(chapters_path)?,
            pages_dir,
        ))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn chapters(&self) -> &ChapterMap {
        &self.chapters
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Renders every entry page into the pages directory.
    ///
    /// All identifiers are validated up front, so a malformed `number`
    /// field aborts the run before anything is written.
    pub fn generate_pages(&self) -> Result<Vec<GeneratedPage>> {
        let ids: Vec<EntryId> = self
            .vocabulary
            .words
            .iter()
            .map(|word| word.entry_id())
            .collect::<Result<_>>()?;

        let mut written = Vec::with_capacity(ids.len());
        for (word, id) in self.vocabulary.words.iter().zip(&ids) {
            let html = render::page::render_entry(word, id);
            let path = self.pages_dir.join(id.file_name());
            write_text_atomic(&path, &html)?;
            written.push(GeneratedPage {
                path,
                is_sub: id.is_sub(),
            });
        }
        Ok(written)
    }

    /// Scans the generated pages, orders them, and writes `index.html` and
    /// the `words.json` export. Duplicate `(main, sub)` pairs fail the
    /// build.
    pub fn build_index(&self, index_path: &Path, words_path: &Path) -> Result<IndexSummary> {
        let stems = scan_page_stems(&self.pages_dir)?;
        let ids = stems
            .iter()
            .map(|stem| EntryId::parse(stem))
            .collect::<Result<Vec<_>>>()?;
        let catalog = Catalog::new(ids, DuplicatePolicy::Reject)?;

        let dir_name = self
            .pages_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("data");
        let html = render::index::render_index(&catalog, &self.chapters, dir_name);
        write_text_atomic(index_path, &html)?;

        let records = render::index::word_records(&catalog);
        let json = serde_json::to_string_pretty(&records).map_err(|source| VocabError::Json {
            path: words_path.to_path_buf(),
            source,
        })?;
        write_text_atomic(words_path, &json)?;

        Ok(IndexSummary {
            entries: catalog.len(),
            chapters: catalog.chapter_count(&self.chapters),
        })
    }
}
