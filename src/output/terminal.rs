// Colored terminal output for category lists, word charts and run summaries.

use colored::Colorize;
use indexmap::IndexMap;

use crate::pipeline::crawl::RunSummary;
use crate::words::category::CategoryId;
use crate::words::count::WordCount;

/// List discovered categories with their URLs.
pub fn display_categories(categories: &IndexMap<CategoryId, String>) {
    if categories.is_empty() {
        println!("No categories found. Check --site-url and the category selector.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Categories ({}) ===", categories.len()).bold()
    );
    println!();

    for (i, (id, url)) in categories.iter().enumerate() {
        println!(
            "  {:>3}. {:<24} {}",
            i + 1,
            id.as_str().bold(),
            super::truncate_chars(url, 80).dimmed()
        );
    }
    println!();
}

/// Show a category's top words as a bar chart, scaled to the most frequent one.
pub fn display_top_words(category: &CategoryId, counts: &WordCount, limit: usize) {
    let top = counts.most_common(limit);

    println!(
        "\n{}",
        format!(
            "=== Top words in {} ({} distinct, {} total) ===",
            category,
            counts.len(),
            counts.total()
        )
        .bold()
    );
    println!();

    if top.is_empty() {
        println!("  {}", "No words counted.".dimmed());
        println!();
        return;
    }

    let bar_width: usize = 30;
    let max = top[0].1.max(1);

    for (i, (word, count)) in top.iter().enumerate() {
        let filled = ((*count as f64 / max as f64) * bar_width as f64).round() as usize;
        let bar = format!("{}{}", "=".repeat(filled), " ".repeat(bar_width - filled.min(bar_width)));
        println!(
            "  {:>3}. {:<24} [{}] {}",
            i + 1,
            super::truncate_chars(word, 24),
            bar.bright_green(),
            count
        );
    }
    println!();
}

/// Summarize a crawl: per-category article and word counts, and where each
/// table was written.
pub fn display_run_summary(summary: &RunSummary) {
    if summary.categories.is_empty() {
        println!("No categories were crawled.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Crawl Summary ({} categories) ===", summary.categories.len()).bold()
    );
    println!();

    println!(
        "  {:<24} {:>8} {:>8} {:>8}  {}",
        "Category".dimmed(),
        "Articles".dimmed(),
        "Words".dimmed(),
        "Kept".dimmed(),
        "File".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for report in &summary.categories {
        let kept = if report.words_after == 0 {
            report.words_after.to_string().yellow()
        } else {
            report.words_after.to_string().normal()
        };
        println!(
            "  {:<24} {:>8} {:>8} {:>8}  {}",
            report.category.as_str(),
            report.articles,
            report.words_before,
            kept,
            report.path.display()
        );
    }

    let empty = summary
        .categories
        .iter()
        .filter(|r| r.words_after == 0)
        .count();
    if empty > 0 {
        println!();
        println!(
            "  {} {} categories have no words of their own after overlap removal",
            "~".yellow(),
            empty
        );
    }
    println!();
}
