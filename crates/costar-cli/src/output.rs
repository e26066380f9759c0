//! Output formatting utilities

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use costar_core::{Dataset, PathResult, SearchStats};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
}

/// One printed line of a path: who starred with whom, and in what
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub from_id: String,
    pub from: String,
    pub to_id: String,
    pub to: String,
    pub movie_id: String,
    pub movie: String,
    pub year: Option<u16>,
}

impl StepReport {
    pub const HEADERS: &'static [&'static str] = &[
        "step", "from_id", "from", "to_id", "to", "movie_id", "movie", "year",
    ];
}

/// A path search result with ids resolved to names
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub source: PersonSummary,
    pub target: PersonSummary,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl PathReport {
    pub fn build(dataset: &Dataset, result: &PathResult, with_stats: bool) -> anyhow::Result<Self> {
        let name_of = |id: &costar_core::PersonId| -> anyhow::Result<String> {
            dataset
                .person(id)
                .map(|p| p.name.clone())
                .ok_or_else(|| anyhow::anyhow!("Person not found: {}", id))
        };

        let mut steps = Vec::new();
        let mut previous = result.source.clone();
        for (i, step) in result.path.iter().flatten().enumerate() {
            let movie = dataset
                .movie(&step.movie)
                .ok_or_else(|| anyhow::anyhow!("Movie not found: {}", step.movie))?;
            steps.push(StepReport {
                step: i + 1,
                from_id: previous.to_string(),
                from: name_of(&previous)?,
                to_id: step.person.to_string(),
                to: name_of(&step.person)?,
                movie_id: movie.id.to_string(),
                movie: movie.title.clone(),
                year: movie.year,
            });
            previous = step.person.clone();
        }

        Ok(Self {
            source: PersonSummary {
                id: result.source.to_string(),
                name: name_of(&result.source)?,
            },
            target: PersonSummary {
                id: result.target.to_string(),
                name: name_of(&result.target)?,
            },
            connected: result.path.is_some(),
            degrees: result.degrees(),
            steps,
            stats: with_stats.then(|| result.stats.clone()),
        })
    }
}

/// Format output based on format type
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Csv | OutputFormat::Table => {
            anyhow::bail!("{} output is not supported for this data", format)
        }
    }
}

/// Serialize rows as CSV. The header line is written even when there are
/// no rows; `headers` must match the field order of `T`.
pub fn format_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn format_path(report: &PathReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_output(report, format),
        OutputFormat::Csv => format_csv(StepReport::HEADERS, &report.steps),
        OutputFormat::Table => {
            let mut lines = Vec::new();
            match report.degrees {
                None => lines.push("Not connected.".to_string()),
                Some(degrees) => {
                    lines.push(format!("{} degrees of separation.", degrees));
                    for step in &report.steps {
                        lines.push(format!(
                            "{}: {} and {} starred in {}",
                            step.step, step.from, step.to, step.movie
                        ));
                    }
                }
            }
            if let Some(stats) = &report.stats {
                lines.push(format!(
                    "Explored {} people, generated {} nodes, peak frontier {}",
                    stats.nodes_explored, stats.nodes_generated, stats.max_frontier
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}
