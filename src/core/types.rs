// File: src/core/types.rs
use serde::{Deserialize, Serialize};

use crate::core::identifier::EntryId;
use crate::error::Result;

/// Top-level shape of `vocabulary_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub words: Vec<WordEntry>,
}

/// A single vocabulary entry as authored in the data file.
///
/// `number` is the entry identifier without the lemma: `"422"` for a main
/// word, `"422-2"` for the second sub-word under entry 422. The rendered
/// page lands at `{number}-{word}.html`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub number: String,
    pub word: String,
    pub pos: String,
    pub meaning: String,
    pub nuance: String,
    pub etymology: String,
    /// Titled example groups. When absent, `examples` is rendered under the
    /// default `例文` heading.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub example_sections: Vec<ExampleSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<RelatedWord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<RelatedWord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleSection {
    pub title: String,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub en: String,
    pub ja: String,
    /// Substring of `en` to emphasize in the rendered sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedWord {
    pub word: String,
    pub trans: String,
    /// Relative link to another page, e.g. a sub-word pointing back at its
    /// main word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl WordEntry {
    /// Filename stem of the generated page, e.g. `422-2-degradation`.
    pub fn page_stem(&self) -> String {
        format!("{}-{}", self.number, self.word)
    }

    pub fn page_filename(&self) -> String {
        format!("{}.html", self.page_stem())
    }

    /// Parses the entry's identifier; fails on a malformed `number` field.
    pub fn entry_id(&self) -> Result<EntryId> {
        EntryId::parse(&self.page_stem())
    }
}
