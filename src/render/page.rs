// File: src/render/page.rs
//
// Renders one vocabulary entry into a standalone note page. Main words and
// sub-words share a single skeleton; the variants differ only in palette
// and header labelling.

use crate::core::identifier::EntryId;
use crate::core::types::{Example, RelatedWord, WordEntry};

/// Accent palette of a page variant.
pub struct PageTheme {
    pub primary: &'static str,
    pub accent: &'static str,
    /// Underline-marker color behind the meaning line.
    pub marker: &'static str,
}

pub const MAIN_THEME: PageTheme = PageTheme {
    primary: "#2c3e50",
    accent: "#f4f7f6",
    marker: "#ffecb3",
};

pub const SUB_THEME: PageTheme = PageTheme {
    primary: "#28a745",
    accent: "#f4faf6",
    marker: "#d4edda",
};

// Shared stylesheet; the variant palette is injected through the :root
// custom properties.
const PAGE_CSS: &str = r#"        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.7; color: var(--text-main); max-width: 700px; margin: 0 auto; padding: 30px 20px; background-color: #f0f2f5; }
        .card { background: white; padding: 40px; border-radius: 16px; box-shadow: 0 4px 20px rgba(0,0,0,0.08); }

        /* ヘッダー部分 */
        .back-link { display: inline-block; margin-bottom: 25px; text-decoration: none; color: var(--primary-color); font-weight: bold; }
        .word-header { border-bottom: 3px solid var(--primary-color); padding-bottom: 15px; margin-bottom: 25px; }
        .word-number { font-size: 1rem; color: var(--text-sub); font-weight: bold; }
        .word-title { font-size: 3rem; margin: 5px 0; letter-spacing: 1px; }
        .pos-tag { display: inline-block; background: var(--primary-color); color: white; padding: 2px 12px; border-radius: 20px; font-size: 0.85rem; vertical-align: middle; margin-left: 10px; }

        /* コンテンツ部分 */
        .section-title { font-size: 1.1rem; font-weight: bold; color: var(--primary-color); margin-top: 25px; margin-bottom: 10px; display: flex; align-items: center; }
        .section-title::before { content: ""; display: inline-block; width: 4px; height: 18px; background: var(--primary-color); margin-right: 10px; border-radius: 2px; }

        .meaning-jp { font-size: 1.5rem; font-weight: bold; background: linear-gradient(transparent 70%, var(--marker-color) 70%); display: inline-block; margin-bottom: 10px; }
        .nuance-box { background: var(--accent-color); padding: 15px; border-radius: 8px; font-size: 0.95rem; border: 1px dashed var(--primary-color); }

        /* 例文 */
        .example-item { margin-bottom: 15px; padding-left: 15px; border-left: 3px solid #ddd; }
        .en { display: block; font-weight: 500; color: #444; }
        .ja { display: block; color: var(--text-sub); font-size: 0.9rem; }

        /* リスト */
        .info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-top: 20px; }
        .info-item { background: #f8f9fa; padding: 12px; border-radius: 8px; font-size: 0.9rem; }
        .info-label { display: block; font-weight: bold; color: var(--text-sub); font-size: 0.8rem; text-transform: uppercase; margin-bottom: 5px; }
        .list-unit { margin-bottom: 4px; border-bottom: 1px solid #eee; padding-bottom: 2px; }
        .list-unit:last-child { border-bottom: none; }
        .word-small { font-weight: bold; color: #444; }
        .trans-small { color: var(--text-sub); font-size: 0.85em; margin-left: 5px; }

        @media (max-width: 600px) { .info-grid { grid-template-columns: 1fr; } .word-title { font-size: 2.2rem; } }
"#;

fn example_section(title: &str, examples: &[Example]) -> String {
    let mut html = format!("        <div class=\"section-title\">{}</div>\n", title);
    for example in examples {
        let en = match &example.highlight {
            Some(h) if !h.is_empty() => example
                .en
                .replace(h.as_str(), &format!("<strong>{}</strong>", h)),
            _ => example.en.clone(),
        };
        html.push_str(&format!(
            "        <div class=\"example-item\">\n            <span class=\"en\">{}</span>\n            <span class=\"ja\">{}</span>\n        </div>\n",
            en, example.ja
        ));
    }
    html
}

fn examples_block(entry: &WordEntry) -> String {
    if entry.example_sections.is_empty() {
        example_section("例文", &entry.examples)
    } else {
        entry
            .example_sections
            .iter()
            .map(|section| example_section(&section.title, &section.examples))
            .collect()
    }
}

fn word_list(words: &[RelatedWord], link_color: &str) -> String {
    let mut html = String::new();
    for w in words {
        match &w.link {
            Some(link) if !link.is_empty() => {
                html.push_str(&format!(
                    "                <a href=\"{}\" style=\"text-decoration: none;\">\n                    <span class=\"word-small\" style=\"color: {};\">{}</span>\n                    <span class=\"trans-small\">({})</span>\n                </a>\n",
                    link, link_color, w.word, w.trans
                ));
            }
            _ => {
                html.push_str(&format!(
                    "                <div class=\"list-unit\"><span class=\"word-small\">{}</span><span class=\"trans-small\">({})</span></div>\n",
                    w.word, w.trans
                ));
            }
        }
    }
    html
}

/// Renders the full note page for `entry`. The identifier decides the
/// variant: sub-words get the green palette and the `(関連語)` header tag.
pub fn render_entry(entry: &WordEntry, id: &EntryId) -> String {
    let theme = if id.is_sub() { &SUB_THEME } else { &MAIN_THEME };
    let number_line = if id.is_sub() {
        format!("{} (関連語)", entry.number)
    } else {
        entry.number.clone()
    };
    let meaning_heading = if id.is_sub() { "意味" } else { "主な意味" };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{number} {word} - English Vocabulary Note</title>
    <style>
        :root {{ --primary-color: {primary}; --accent-color: {accent}; --marker-color: {marker}; --text-main: #333; --text-sub: #666; }}
{css}    </style>
</head>
<body>

    <a href="../index.html" class="back-link">← 一覧へ戻る</a>

    <div class="card">
        <div class="word-header">
            <span class="word-number"># {number_line}</span>
            <h1 class="word-title">{word} <span class="pos-tag">{pos}</span></h1>
        </div>

        <div class="section-title">{meaning_heading}</div>
        <div class="meaning-jp">{meaning}</div>
        <div class="nuance-box">
            <strong>ニュアンス：</strong> {nuance}
        </div>

{examples_sections}
        <div class="info-grid">
            <div class="info-item">
                <span class="info-label">語源</span>
                {etymology}
            </div>
            <div class="info-item">
                <span class="info-label">類義語 (Synonyms)</span>
{synonyms}            </div>
            <div class="info-item">
                <span class="info-label">対義語 (Antonyms)</span>
{antonyms}            </div>
            <div class="info-item">
                <span class="info-label">関連語</span>
{related}            </div>
        </div>
    </div>

</body>
</html>"#,
        number = entry.number,
        word = entry.word,
        pos = entry.pos,
        primary = theme.primary,
        accent = theme.accent,
        marker = theme.marker,
        css = PAGE_CSS,
        number_line = number_line,
        meaning_heading = meaning_heading,
        meaning = entry.meaning,
        nuance = entry.nuance,
        examples_sections = examples_block(entry),
        etymology = entry.etymology,
        synonyms = word_list(&entry.synonyms, theme.primary),
        antonyms = word_list(&entry.antonyms, theme.primary),
        related = word_list(&entry.related, theme.primary),
    )
}
