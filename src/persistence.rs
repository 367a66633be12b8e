// File: src/persistence.rs
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::chapters::ChapterMap;
use crate::core::types::Vocabulary;
use crate::error::{Result, VocabError};

/// Loads `vocabulary_data.json`.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| VocabError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `chapters.json`.
pub fn load_chapters(path: &Path) -> Result<ChapterMap> {
    ChapterMap::from_json_file(path)
}

/// Writes `contents` to `path` atomically: the data is staged in a temp
/// file next to the destination and renamed into place, so a reader never
/// observes a half-written page.
pub fn write_text_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| VocabError::Io(e.error))?;
    Ok(())
}

/// Filename stems of the generated pages in `dir` (every `*.html`).
/// Sorted lexicographically so scans are deterministic across platforms;
/// the catalog applies the real entry order afterwards.
pub fn scan_page_stems(dir: &Path) -> Result<Vec<String>> {
    let mut stems = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();
    Ok(stems)
}
