//! In-memory dataset of people and movies

use crate::error::{Error, Result};
use crate::graph::CoStarGraph;
use crate::movie::{Movie, MovieId};
use crate::person::{Person, PersonId};
use std::collections::{BTreeSet, HashMap};

/// People, movies and the lower-cased name index, fully resident in memory.
///
/// Built once by a loader and then only read. Lookups by id are O(1);
/// movie and cast sets are ordered so neighbor iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    names: HashMap<String, BTreeSet<PersonId>>,
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person and index their name. Replaces any previous record
    /// with the same id, keeping its credits.
    pub fn add_person(&mut self, mut person: Person) {
        if let Some(previous) = self.people.remove(&person.id) {
            self.unindex_name(&previous.name, &previous.id);
            person.movies.extend(previous.movies);
        }
        self.names
            .entry(person.name.to_lowercase())
            .or_default()
            .insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    /// Add a movie. Replaces any previous record with the same id, keeping
    /// its cast.
    pub fn add_movie(&mut self, mut movie: Movie) {
        if let Some(previous) = self.movies.remove(&movie.id) {
            movie.stars.extend(previous.stars);
        }
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Record that a person starred in a movie.
    ///
    /// Both records must already exist; otherwise nothing is changed and
    /// the corresponding not-found error is returned.
    pub fn add_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> Result<()> {
        if !self.movies.contains_key(movie_id) {
            return Err(Error::MovieNotFound(movie_id.to_string()));
        }
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| Error::PersonNotFound(person_id.to_string()))?;
        person.movies.insert(movie_id.clone());

        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.stars.insert(person_id.clone());
        }
        Ok(())
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Ids of every person whose name matches, ignoring case
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of distinct (person, movie) credits
    pub fn star_count(&self) -> usize {
        self.movies.values().map(|m| m.stars.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn unindex_name(&mut self, name: &str, id: &PersonId) {
        let key = name.to_lowercase();
        if let Some(ids) = self.names.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.names.remove(&key);
            }
        }
    }
}

impl CoStarGraph for Dataset {
    fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    fn neighbors_for_person(&self, id: &PersonId) -> Vec<(MovieId, PersonId)> {
        let Some(person) = self.people.get(id) else {
            return Vec::new();
        };

        let mut neighbors = Vec::new();
        for movie_id in &person.movies {
            let Some(movie) = self.movies.get(movie_id) else {
                continue;
            };
            for star in movie.stars.iter().filter(|star| *star != id) {
                neighbors.push((movie_id.clone(), star.clone()));
            }
        }
        neighbors
    }
}
