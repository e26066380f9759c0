//! Interactive prompts for names and disambiguation

use std::io::{BufRead, Write};

use costar_core::{Dataset, PersonId};
use costar_search::{choose_candidate, describe_candidates, NameResolver, Resolution};

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, without the trailing newline
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("No input provided");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Resolve a typed name to one person, asking which one is meant when
    /// several people share it. `None` means no such person.
    pub fn resolve_person(
        &mut self,
        name: &str,
        dataset: &Dataset,
        resolver: &dyn NameResolver,
    ) -> anyhow::Result<Option<PersonId>> {
        match resolver.resolve(name, dataset)? {
            Resolution::NotFound => Ok(None),
            Resolution::Unique(id) => Ok(Some(id)),
            Resolution::Ambiguous(ids) => {
                writeln!(self.output, "Which '{}'?", name.trim())?;
                for candidate in describe_candidates(dataset, &ids) {
                    writeln!(
                        self.output,
                        "ID: {}, Name: {}, Birth: {}",
                        candidate.id,
                        candidate.name,
                        candidate.birth.map(|b| b.to_string()).unwrap_or_default()
                    )?;
                }
                let answer = self.ask("Intended Person ID: ")?;
                match choose_candidate(&ids, &answer) {
                    Ok(id) => Ok(Some(id)),
                    Err(e) => {
                        tracing::debug!("Rejected disambiguation answer: {}", e);
                        Ok(None)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costar_core::Person;
    use costar_search::ExactNameResolver;
    use std::io::Cursor;

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.add_person(Person::new("102", "Kevin Bacon").with_birth(1958));
        dataset.add_person(Person::new("1", "Chris Evans").with_birth(1981));
        dataset.add_person(Person::new("2", "Chris Evans"));
        dataset
    }

    fn prompter<'a>(
        input: &str,
        output: &'a mut Vec<u8>,
    ) -> Prompter<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), output)
    }

    #[test]
    fn test_ask_strips_newline() {
        let mut output = Vec::new();
        let answer = prompter("Kevin Bacon\r\n", &mut output).ask("Name: ").unwrap();

        assert_eq!(answer, "Kevin Bacon");
        assert_eq!(output, b"Name: ");
    }

    #[test]
    fn test_ask_fails_at_end_of_input() {
        let mut output = Vec::new();
        assert!(prompter("", &mut output).ask("Name: ").is_err());
    }

    #[test]
    fn test_unique_name_needs_no_prompt() {
        let mut output = Vec::new();
        let id = prompter("", &mut output)
            .resolve_person("kevin bacon", &dataset(), &ExactNameResolver::new())
            .unwrap();

        assert_eq!(id, Some(PersonId::from("102")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_ambiguous_name_prompts_for_id() {
        let mut output = Vec::new();
        let id = prompter("2\n", &mut output)
            .resolve_person("Chris Evans", &dataset(), &ExactNameResolver::new())
            .unwrap();
        assert_eq!(id, Some(PersonId::from("2")));

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Which 'Chris Evans'?\n\
             ID: 1, Name: Chris Evans, Birth: 1981\n\
             ID: 2, Name: Chris Evans, Birth: \n\
             Intended Person ID: "
        );
    }

    #[test]
    fn test_wrong_id_means_not_found() {
        let mut output = Vec::new();
        let id = prompter("102\n", &mut output)
            .resolve_person("Chris Evans", &dataset(), &ExactNameResolver::new())
            .unwrap();
        assert_eq!(id, None);
    }
}
