// File: src/render/index.rs
//
// Assembles index.html from the ordered catalog stream: table of contents,
// chapter headers, the word list, and the client-side search/lazy-load
// script. Also produces the words.json payload.

use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, CatalogItem};
use crate::core::chapters::ChapterMap;

/// One record of the client-side data export (`words.json`), in catalog
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Canonical numeric id, e.g. `341-2`.
    pub id: String,
    /// Display name shown in the list, e.g. `341 2 violently`.
    pub display: String,
    /// Page filename, e.g. `341-2-violently.html`.
    pub file: String,
}

pub fn word_records(catalog: &Catalog) -> Vec<WordRecord> {
    catalog
        .entries()
        .iter()
        .map(|id| WordRecord {
            id: id.numeric_id(),
            display: id.display(),
            file: id.file_name(),
        })
        .collect()
}

const INDEX_CSS: &str = r#"        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.7; color: #333; max-width: 700px; margin: 0 auto; padding: 30px 20px; background-color: #f0f2f5; }
        h1 { color: #2c3e50; border-bottom: 3px solid #2c3e50; padding-bottom: 10px; }
        #searchBox { width: 100%; box-sizing: border-box; padding: 12px 15px; font-size: 1rem; border: 2px solid #ddd; border-radius: 8px; margin-bottom: 20px; }
        #searchBox:focus { outline: none; border-color: #2c3e50; }
        .toc { background: white; padding: 15px 20px; border-radius: 12px; margin-bottom: 25px; box-shadow: 0 2px 10px rgba(0,0,0,0.05); }
        .toc a { display: inline-block; margin-right: 15px; color: #2c3e50; text-decoration: none; font-size: 0.9rem; font-weight: bold; }
        .toc a:hover { text-decoration: underline; }
        #wordList { list-style: none; padding: 0; }
        .chapter-header { font-size: 1.1rem; font-weight: bold; color: white; background: #2c3e50; padding: 8px 15px; border-radius: 8px; margin: 20px 0 10px; }
        .word-item { background: white; margin-bottom: 6px; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06); }
        .word-item a { display: flex; justify-content: space-between; padding: 10px 15px; text-decoration: none; color: #333; }
        .word-item .word-id { color: #666; font-size: 0.85rem; margin-right: 10px; }
        .word-item .word-name { font-weight: bold; }
        .sub-word { margin-left: 25px; border-left: 3px solid #28a745; }
        .sub-word a .word-name { color: #28a745; }
        .hidden { display: none; }
"#;

// Batched reveal on scroll plus substring search over the list text. A
// non-empty query overrides the lazy batches; clearing it restores them.
const INDEX_SCRIPT: &str = r#"        const BATCH_SIZE = 50;
        const items = Array.from(document.querySelectorAll('#wordList li'));
        const searchBox = document.getElementById('searchBox');
        const sentinel = document.getElementById('listEnd');
        let visible = 0;

        function showNextBatch() {
            const limit = Math.min(visible + BATCH_SIZE, items.length);
            for (let i = visible; i < limit; i++) {
                items[i].classList.remove('hidden');
            }
            visible = limit;
        }

        const observer = new IntersectionObserver((entries) => {
            if (entries.some((e) => e.isIntersecting) && !searchBox.value) {
                showNextBatch();
            }
        });

        function applySearch() {
            const query = searchBox.value.trim().toLowerCase();
            if (!query) {
                items.forEach((item, i) => item.classList.toggle('hidden', i >= visible));
                return;
            }
            items.forEach((item) => {
                if (item.classList.contains('chapter-header')) {
                    item.classList.add('hidden');
                    return;
                }
                item.classList.toggle('hidden', !item.textContent.toLowerCase().includes(query));
            });
        }

        items.forEach((item) => item.classList.add('hidden'));
        showNextBatch();
        observer.observe(sentinel);
        searchBox.addEventListener('input', applySearch);
"#;

/// Renders the full index page. `pages_dir` is the directory the word pages
/// live in, relative to index.html (normally `data`).
pub fn render_index(catalog: &Catalog, chapters: &ChapterMap, pages_dir: &str) -> String {
    let mut toc = String::new();
    let mut list = String::new();

    for item in catalog.stream(chapters) {
        match item {
            CatalogItem::Chapter { threshold, title } => {
                toc.push_str(&format!(
                    "        <a href=\"#ch-{}\">{}</a>\n",
                    threshold, title
                ));
                list.push_str(&format!(
                    "        <li class=\"chapter-header\" id=\"ch-{}\">{}</li>\n",
                    threshold, title
                ));
            }
            CatalogItem::Entry(id) => {
                let class = if id.is_sub() {
                    "word-item sub-word"
                } else {
                    "word-item"
                };
                list.push_str(&format!(
                    "        <li class=\"{}\"><a href=\"{}/{}\"><span class=\"word-id\">{}</span><span class=\"word-name\">{}</span></a></li>\n",
                    class,
                    pages_dir,
                    id.file_name(),
                    id.as_str(),
                    id.display()
                ));
            }
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>English Vocabulary Note</title>
    <style>
{css}    </style>
</head>
<body>

    <h1>English Vocabulary Note</h1>
    <input type="search" id="searchBox" placeholder="単語を検索..." autocomplete="off">

    <nav class="toc">
{toc}    </nav>

    <ul id="wordList">
{list}    </ul>
    <div id="listEnd"></div>

    <script>
{script}    </script>

</body>
</html>"#,
        css = INDEX_CSS,
        toc = toc,
        list = list,
        script = INDEX_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DuplicatePolicy;
    use crate::core::identifier::EntryId;

    fn catalog(raws: &[&str]) -> Catalog {
        let ids = raws.iter().map(|r| EntryId::parse(r).unwrap());
        Catalog::new(ids, DuplicatePolicy::Reject).unwrap()
    }

    fn chapters() -> ChapterMap {
        ChapterMap::new(vec![
            (1, "第1章：基本動詞".to_string()),
            (341, "第13章：抽象概念".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn list_carries_chapter_headers_and_items_in_order() {
        let html = render_index(
            &catalog(&["341-violence", "1-run", "341-2-violently"]),
            &chapters(),
            "data",
        );

        let run = html.find("1-run.html").unwrap();
        let violence = html.find("341-violence.html").unwrap();
        let violently = html.find("341-2-violently.html").unwrap();
        assert!(run < violence && violence < violently);

        assert!(html.contains("<li class=\"chapter-header\" id=\"ch-1\">第1章：基本動詞</li>"));
        assert!(html.contains("<li class=\"chapter-header\" id=\"ch-341\">第13章：抽象概念</li>"));
    }

    #[test]
    fn sub_words_get_the_sub_class() {
        let html = render_index(&catalog(&["341-violence", "341-2-violently"]), &chapters(), "data");
        assert!(html.contains("<li class=\"word-item sub-word\"><a href=\"data/341-2-violently.html\""));
        assert!(html.contains("<li class=\"word-item\"><a href=\"data/341-violence.html\""));
    }

    #[test]
    fn toc_lists_only_visited_chapters() {
        let html = render_index(&catalog(&["1-run"]), &chapters(), "data");
        assert!(html.contains("<a href=\"#ch-1\">第1章：基本動詞</a>"));
        assert!(!html.contains("<a href=\"#ch-341\">"));
    }

    #[test]
    fn display_name_uses_spaces() {
        let html = render_index(&catalog(&["341-2-violently"]), &chapters(), "data");
        assert!(html.contains("<span class=\"word-name\">341 2 violently</span>"));
        assert!(html.contains("<span class=\"word-id\">341-2-violently</span>"));
    }

    #[test]
    fn word_records_follow_catalog_order() {
        let records = word_records(&catalog(&["341-2-violently", "1-run", "341-violence"]));
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "341", "341-2"]);
        assert_eq!(records[2].file, "341-2-violently.html");
        assert_eq!(records[2].display, "341 2 violently");
    }

    #[test]
    fn records_serialize_to_json_array() {
        let records = word_records(&catalog(&["1-run"]));
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"1","display":"1 run","file":"1-run.html"}]"#
        );
    }
}
