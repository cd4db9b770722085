use std::{env, error::Error, fs, path::Path, process};

use tracing_subscriber::{fmt, EnvFilter};

use tf_idf_analyzer::{Analyzer, AnalyzerConfig, PageItem, StopwordFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn usage() -> ! {
    eprintln!("usage: tf-idf-analyzer <file.txt> [page] [page_size] [lang]");
    process::exit(2);
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else { usage() };
    let page: usize = match args.get(1) {
        Some(raw) => raw.parse()?,
        None => 1,
    };
    let page_size: usize = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 50,
    };
    let lang = args.get(3).map(String::as_str).unwrap_or("en");

    let config = AnalyzerConfig::default()
        .with_page_size(page_size)
        .with_stopwords(StopwordFilter::new(lang));
    let analyzer: Analyzer = Analyzer::with_config(config)?;

    // uploaded-file semantics: raw bytes in, UTF-8 decode inside the engine
    let bytes = fs::read(path)?;
    let filename = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());
    let result = analyzer.analyze_bytes(&bytes, page)?;

    println!("{filename}: {} distinct words", result.total_words);
    println!("note: IDF is 1.0 for every word, the document is its own entire corpus");
    println!("{:<24} {:>8} {:>8}", "word", "tf", "idf");
    for entry in &result.results {
        println!("{:<24} {:>8} {:>8.3}", entry.word, entry.tf, entry.idf);
    }

    let p = &result.pagination;
    if p.total_pages > 1 {
        let mut pager = String::new();
        for item in &p.visible_pages {
            match item {
                PageItem::Num(n) if *n == p.page => pager.push_str(&format!("[{n}] ")),
                PageItem::Num(n) => pager.push_str(&format!("{n} ")),
                PageItem::Gap => pager.push_str("... "),
            }
        }
        println!("page {}/{}  {}", p.page, p.total_pages, pager.trim_end());
    }

    Ok(())
}
