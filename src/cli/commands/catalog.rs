//! Collection-wide views: statistics and vocabulary.

use crate::core::query::CatalogStats;
use crate::core::MovieStore;
use crate::models::vocabulary::{DEFAULT_TAGS, GENRES};
use crate::models::MediaType;
use crate::storage::Slot;
use anyhow::Result;
use colored::Colorize;

/// Show collection statistics.
pub fn show_stats<S: Slot>(store: &MovieStore<S>) -> Result<()> {
    let stats = CatalogStats::from_movies(store.movies());

    println!("{}", "Cinelog Statistics".bold().cyan());
    println!("{}", "=".repeat(50));
    println!();

    if stats.total == 0 {
        println!("{}", "Your log is empty.".yellow());
        return Ok(());
    }

    println!("  {} {}", "Entries:".bold(), stats.total);
    println!("  {} {}", "Films:".bold(), stats.films);
    println!("  {} {}", "Series:".bold(), stats.series);
    println!("  {} {}", "Scenes:".bold(), stats.scenes);
    if let Some(average) = stats.average_rating {
        println!("  {} {:.1}", "Average rating:".bold(), average);
    }
    println!();

    print_ranking("By Genre:", &stats.genres, stats.total);
    print_ranking("By Tag:", &stats.tags, stats.total);

    Ok(())
}

fn print_ranking(heading: &str, ranking: &[(String, usize)], total: usize) {
    if ranking.is_empty() {
        return;
    }

    println!("{}", heading.bold());
    for (name, count) in ranking.iter().take(10) {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((pct / 5.0) as usize);
        println!("  {:<20} {:<20} {} ({:.0}%)", name, bar, count, pct);
    }
    println!();
}

/// List the suggested genres, tags and media types.
pub fn show_vocabulary() -> Result<()> {
    println!("{}", "Genres:".bold());
    for genre in GENRES {
        println!("  {}", genre);
    }
    println!();

    println!("{}", "Tags:".bold());
    for tag in DEFAULT_TAGS {
        println!("  {}", tag);
    }
    println!();

    println!("{}", "Media types:".bold());
    for media_type in MediaType::ALL {
        println!("  {}", media_type);
    }

    Ok(())
}
