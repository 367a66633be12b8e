// Renders every entry of vocabulary_data.json into its own note page.
// Run with: cargo run --bin generate_pages [vocabulary_data.json]
use std::path::Path;
use std::process::ExitCode;

use crossterm::style::Stylize;
use vocab_core::SiteEngine;

const VOCAB_DATA_PATH: &str = "vocabulary_data.json";
const PAGES_DIR: &str = "data";

fn main() -> ExitCode {
    let vocab_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| VOCAB_DATA_PATH.to_string());

    match run(&vocab_path) {
        Ok(count) => {
            println!("\n合計 {} 件のHTMLファイルを生成しました。", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(vocab_path: &str) -> vocab_core::Result<usize> {
    let engine = SiteEngine::from_vocabulary(Path::new(vocab_path), PAGES_DIR)?;
    let pages = engine.generate_pages()?;
    for page in &pages {
        let kind = if page.is_sub { "サブ単語" } else { "メイン単語" };
        println!(
            "{} 生成完了 [{}]: {}",
            "✓".green(),
            kind,
            page.path.display()
        );
    }
    Ok(pages.len())
}
