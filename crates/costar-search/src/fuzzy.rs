//! Fuzzy name suggestions using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};
use std::collections::HashSet;

use costar_core::Dataset;

/// Suggests known names close to one that failed to resolve
pub struct FuzzySuggester {
    pub limit: usize,
}

impl FuzzySuggester {
    pub fn new() -> Self {
        Self { limit: 5 }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Distinct names ranked by match score, best first
    pub fn suggest(&self, name: &str, dataset: &Dataset) -> Vec<String> {
        let query = name.trim();
        if query.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();
        let mut seen = HashSet::new();

        let mut scored: Vec<(u32, &str)> = dataset
            .people()
            .filter(|person| seen.insert(person.name.to_lowercase()))
            .filter_map(|person| {
                pattern
                    .score(Utf32Str::new(&person.name, &mut buf), &mut matcher)
                    .map(|score| (score, person.name.as_str()))
            })
            .collect();

        // Sort by score descending, then name for a stable order
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        tracing::debug!("Fuzzy match for '{}' found {} names", query, scored.len());
        scored
            .into_iter()
            .take(self.limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

impl Default for FuzzySuggester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costar_core::Person;

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new();
        for (id, name) in [
            ("1", "Kevin Bacon"),
            ("2", "Kevin Costner"),
            ("3", "Tom Hanks"),
            ("4", "Tom Hanks"),
        ] {
            dataset.add_person(Person::new(id, name));
        }
        dataset
    }

    #[test]
    fn test_suggests_partial_names() {
        let suggestions = FuzzySuggester::new().suggest("bacon", &dataset());
        assert_eq!(suggestions.first().map(String::as_str), Some("Kevin Bacon"));
        assert!(!suggestions.iter().any(|s| s == "Tom Hanks"));
    }

    #[test]
    fn test_duplicate_names_suggested_once() {
        let suggestions = FuzzySuggester::new().suggest("hanks", &dataset());
        assert_eq!(suggestions, vec!["Tom Hanks".to_string()]);
    }

    #[test]
    fn test_limit_caps_suggestions() {
        let suggestions = FuzzySuggester::new().with_limit(1).suggest("kevin", &dataset());
        assert_eq!(suggestions.len(), 1);
    }
}
