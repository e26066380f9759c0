//! CSV dataset loader

use crate::error::{StorageError, StorageResult};
use costar_core::{Dataset, Movie, MovieId, Person, PersonId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts gathered while loading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    /// Star rows naming a person or movie that does not exist
    pub skipped_stars: usize,
}

/// Loads a dataset directory containing `people.csv`, `movies.csv` and
/// `stars.csv`
#[derive(Debug, Clone)]
pub struct CsvLoader {
    directory: PathBuf,
}

impl CsvLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Read all three files into a [`Dataset`].
    ///
    /// Credits that reference an unknown person or movie are skipped and
    /// counted in the report rather than failing the load.
    pub fn load(&self) -> StorageResult<(Dataset, LoadReport)> {
        if !self.directory.is_dir() {
            return Err(StorageError::DirectoryNotFound(self.directory.clone()));
        }
        tracing::debug!("Loading dataset from {:?}", self.directory);

        let mut dataset = Dataset::new();
        let mut report = LoadReport::default();

        for (line, row) in read_rows::<PersonRow>(&self.directory.join(PEOPLE_FILE))? {
            let mut person = Person::new(row.id, row.name);
            person.birth = parse_year(&row.birth, PEOPLE_FILE, line)?;
            if dataset.person(&person.id).is_some() {
                tracing::warn!("{} line {}: duplicate person id {}", PEOPLE_FILE, line, person.id);
            }
            dataset.add_person(person);
        }
        report.people = dataset.person_count();

        for (line, row) in read_rows::<MovieRow>(&self.directory.join(MOVIES_FILE))? {
            let mut movie = Movie::new(row.id, row.title);
            movie.year = parse_year(&row.year, MOVIES_FILE, line)?;
            if dataset.movie(&movie.id).is_some() {
                tracing::warn!("{} line {}: duplicate movie id {}", MOVIES_FILE, line, movie.id);
            }
            dataset.add_movie(movie);
        }
        report.movies = dataset.movie_count();

        for (line, row) in read_rows::<StarRow>(&self.directory.join(STARS_FILE))? {
            let person_id = PersonId::new(row.person_id);
            let movie_id = MovieId::new(row.movie_id);
            match dataset.add_star(&person_id, &movie_id) {
                Ok(()) => report.stars += 1,
                Err(e) => {
                    tracing::debug!("Skipping {} line {}: {}", STARS_FILE, line, e);
                    report.skipped_stars += 1;
                }
            }
        }

        if report.skipped_stars > 0 {
            tracing::warn!(
                "Skipped {} credits referencing unknown people or movies",
                report.skipped_stars
            );
        }
        tracing::info!(
            "Loaded {} people, {} movies and {} credits",
            report.people,
            report.movies,
            report.stars
        );

        Ok((dataset, report))
    }
}

/// Deserialize every record of a headed CSV file, paired with its line number
fn read_rows<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<(u64, T)>> {
    if !path.is_file() {
        return Err(StorageError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push((line, record.deserialize(Some(&headers))?));
    }
    Ok(rows)
}

/// Blank years are unknown; anything else must be a number
fn parse_year(value: &str, file: &str, line: u64) -> StorageResult<Option<u16>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u16>()
        .map(Some)
        .map_err(|_| StorageError::InvalidRecord {
            file: file.to_string(),
            line,
            reason: format!("invalid year '{}'", value),
        })
}
