// Scans the generated pages and rebuilds index.html plus the words.json
// search export.
// Run with: cargo run --bin build_index [pages_dir]
use std::path::Path;
use std::process::ExitCode;

use crossterm::style::Stylize;
use vocab_core::core::engine::IndexSummary;
use vocab_core::SiteEngine;

const CHAPTERS_PATH: &str = "chapters.json";
const PAGES_DIR: &str = "data";
const INDEX_PATH: &str = "index.html";
const WORDS_JSON_PATH: &str = "words.json";

fn main() -> ExitCode {
    let pages_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| PAGES_DIR.to_string());

    match run(&pages_dir) {
        Ok(summary) => {
            println!(
                "{} {} を生成しました（{} 件 / {} 章）",
                "✓".green(),
                INDEX_PATH,
                summary.entries,
                summary.chapters
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(pages_dir: &str) -> vocab_core::Result<IndexSummary> {
    let engine = SiteEngine::from_pages(Path::new(CHAPTERS_PATH), pages_dir)?;
    engine.build_index(Path::new(INDEX_PATH), Path::new(WORDS_JSON_PATH))
}
