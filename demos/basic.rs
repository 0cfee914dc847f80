use tf_idf_stats::{get_statements, TfIdfAnalyzer, TfIdfConfig};
use tracing_subscriber::EnvFilter;

fn main() -> tf_idf_stats::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = "<h1>Rust</h1><p>Rust is fast and memory safe.</p>\
                <p>Rust has no garbage collector!</p><p>Is memory safety free?</p>";
    let documents = get_statements(text);

    let config = TfIdfConfig::default().without_stop_words("en");
    let analyzer: TfIdfAnalyzer = TfIdfAnalyzer::new(config)?;
    let result = analyzer.run(&documents)?;

    for (i, doc) in documents.iter().enumerate() {
        println!("[{i}] {doc}");
        for (term, weight) in result.top_terms(i, 3) {
            println!("    {term:<12} {weight:.4}");
        }
    }

    println!("\n{:<12} {:>5} {:>8} {:>8} {:>8}", "term", "docs", "tf_avg", "idf_avg", "tfidf_max");
    for (term, stat) in result.stats.iter() {
        println!(
            "{term:<12} {:>5} {:>8.4} {:>8.4} {:>8.4}",
            stat.doc_num, stat.tf_avg, stat.idf_avg, stat.tf_idf_max
        );
    }
    Ok(())
}
