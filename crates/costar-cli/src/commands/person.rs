//! Person lookup command

use clap::Args;
use serde::Serialize;

use crate::output::{format_csv, format_output, OutputFormat};
use crate::{AppContext, Cli};
use costar_core::{Dataset, Person};
use costar_search::{ExactNameResolver, NameResolver, Resolution};

#[derive(Args)]
pub struct PersonArgs {
    /// Person name (case-insensitive)
    pub name: String,
}

#[derive(Debug, Serialize)]
struct MovieView {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
}

#[derive(Debug, Serialize)]
struct PersonView {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth: Option<u16>,
    movies: Vec<MovieView>,
}

#[derive(Debug, Serialize)]
struct CreditRow<'a> {
    person_id: &'a str,
    name: &'a str,
    birth: Option<u16>,
    movie_id: &'a str,
    title: &'a str,
    year: Option<u16>,
}

const CREDIT_HEADERS: &[&str] = &["person_id", "name", "birth", "movie_id", "title", "year"];

fn person_view(dataset: &Dataset, person: &Person) -> PersonView {
    let mut movies: Vec<MovieView> = person
        .movies
        .iter()
        .filter_map(|id| dataset.movie(id))
        .map(|movie| MovieView {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            year: movie.year,
        })
        .collect();
    movies.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));

    PersonView {
        id: person.id.to_string(),
        name: person.name.clone(),
        birth: person.birth,
        movies,
    }
}

pub fn run(args: &PersonArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let ids = match ExactNameResolver::new().resolve(&args.name, &ctx.dataset)? {
        Resolution::NotFound => {
            super::path::suggest(&args.name, &ctx.dataset);
            anyhow::bail!("Person not found.");
        }
        Resolution::Unique(id) => vec![id],
        Resolution::Ambiguous(ids) => ids,
    };

    let views: Vec<PersonView> = ids
        .iter()
        .filter_map(|id| ctx.dataset.person(id))
        .map(|person| person_view(&ctx.dataset, person))
        .collect();
    tracing::info!("Found {} people named '{}'", views.len(), args.name);

    match cli.format(&ctx.config) {
        OutputFormat::Json => println!("{}", format_output(&views, OutputFormat::Json)?),
        OutputFormat::Csv => {
            let rows: Vec<CreditRow> = views
                .iter()
                .flat_map(|person| {
                    person.movies.iter().map(move |movie| CreditRow {
                        person_id: &person.id,
                        name: &person.name,
                        birth: person.birth,
                        movie_id: &movie.id,
                        title: &movie.title,
                        year: movie.year,
                    })
                })
                .collect();
            print!("{}", format_csv(CREDIT_HEADERS, &rows)?);
        }
        OutputFormat::Table => {
            for person in &views {
                let birth = person
                    .birth
                    .map(|b| format!(", born {}", b))
                    .unwrap_or_default();
                println!("{} (id {}{})", person.name, person.id, birth);
                if person.movies.is_empty() {
                    println!("  (no movies)");
                }
                for movie in &person.movies {
                    match movie.year {
                        Some(year) => println!("  - {} ({})", movie.title, year),
                        None => println!("  - {}", movie.title),
                    }
                }
            }
        }
    }

    Ok(())
}
