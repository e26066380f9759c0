//! Dataset statistics command

use serde::Serialize;

use crate::output::{format_csv, format_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Debug, Serialize)]
struct DatasetStats {
    data_dir: String,
    people: usize,
    movies: usize,
    credits: usize,
    skipped_credits: usize,
}

const STATS_HEADERS: &[&str] = &["data_dir", "people", "movies", "credits", "skipped_credits"];

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let stats = DatasetStats {
        data_dir: ctx.data_dir.display().to_string(),
        people: ctx.dataset.person_count(),
        movies: ctx.dataset.movie_count(),
        credits: ctx.dataset.star_count(),
        skipped_credits: ctx.report.skipped_stars,
    };

    match cli.format(&ctx.config) {
        OutputFormat::Json => println!("{}", format_output(&stats, OutputFormat::Json)?),
        OutputFormat::Csv => print!("{}", format_csv(STATS_HEADERS, &[stats])?),
        OutputFormat::Table => {
            println!("Dataset: {}", stats.data_dir);
            println!("People:  {}", stats.people);
            println!("Movies:  {}", stats.movies);
            println!("Credits: {}", stats.credits);
            if stats.skipped_credits > 0 {
                println!("Skipped credits: {}", stats.skipped_credits);
            }
        }
    }

    Ok(())
}
