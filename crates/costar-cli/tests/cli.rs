use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PEOPLE: &str = "id,name,birth
102,Kevin Bacon,1958
129,Tom Cruise,1962
144,Cary Elwes,1962
158,Tom Hanks,1956
163,Dustin Hoffman,1937
193,Demi Moore,1962
200,Bill Paxton,1955
420,Valeria Golino,1965
705,Robin Wright,1966
914612,Emma Watson,1990
9001,Chris Evans,1981
9002,Chris Evans,
";

const MOVIES: &str = "id,title,year
104257,A Few Good Men,1992
109830,Forrest Gump,1994
112384,Apollo 13,1995
93779,The Princess Bride,1987
95953,Rain Man,1988
";

const STARS: &str = "person_id,movie_id
102,104257
102,112384
129,104257
129,95953
144,93779
158,109830
158,112384
163,95953
193,104257
200,112384
420,95953
705,109830
705,93779
9001,95953
404,95953
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("people.csv"), PEOPLE).unwrap();
        fs::write(data.join("movies.csv"), MOVIES).unwrap();
        fs::write(data.join("stars.csv"), STARS).unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("degrees").unwrap();
        cmd.env("COSTAR_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.dir.path().join("data"));
        cmd
    }
}

#[test]
fn test_path_between_named_people() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Tom Cruise", "Tom Hanks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading data...\nData loaded.\n"))
        .stdout(predicate::str::contains(
            "2 degrees of separation.\n\
             1: Tom Cruise and Kevin Bacon starred in A Few Good Men\n\
             2: Kevin Bacon and Tom Hanks starred in Apollo 13\n",
        ));
}

#[test]
fn test_interactive_prompts_when_names_omitted() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .write_stdin("kevin bacon\nTOM HANKS\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Name: "))
        .stdout(predicate::str::contains(
            "1: Kevin Bacon and Tom Hanks starred in Apollo 13",
        ));
}

#[test]
fn test_ambiguous_name_asks_for_id() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Chris Evans", "Dustin Hoffman"])
        .write_stdin("9001\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Which 'Chris Evans'?"))
        .stdout(predicate::str::contains("ID: 9001, Name: Chris Evans, Birth: 1981"))
        .stdout(predicate::str::contains("ID: 9002, Name: Chris Evans, Birth: \n"))
        .stdout(predicate::str::contains(
            "1: Chris Evans and Dustin Hoffman starred in Rain Man",
        ));
}

#[test]
fn test_not_connected() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Emma Watson", "Kevin Bacon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not connected."));
}

#[test]
fn test_same_person_is_zero_degrees() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Kevin Bacon", "kevin bacon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 degrees of separation."));
}

#[test]
fn test_unknown_person_fails_with_suggestion() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Kevin Bacn", "Tom Hanks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Person not found."))
        .stderr(predicate::str::contains("Did you mean: Kevin Bacon?"));
}

#[test]
fn test_json_output() {
    let fixture = Fixture::new();

    let output = fixture
        .cmd()
        .args(["--format", "json", "path", "Robin Wright", "Kevin Bacon", "--stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["connected"], true);
    assert_eq!(value["degrees"], 2);
    assert_eq!(value["steps"][0]["movie"], "Forrest Gump");
    assert_eq!(value["steps"][0]["to"], "Tom Hanks");
    assert_eq!(value["steps"][1]["to"], "Kevin Bacon");
    assert!(value["stats"]["nodes_explored"].as_u64().unwrap() > 0);
}

#[test]
fn test_dfs_strategy_still_finds_a_path() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Cary Elwes", "Bill Paxton", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("degrees of separation."))
        .stdout(predicate::str::contains("and Bill Paxton starred in Apollo 13"));
}

#[test]
fn test_explore_limit_aborts() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["path", "Cary Elwes", "Bill Paxton", "--max-explored", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search aborted after exploring 1 people"));
}

#[test]
fn test_person_command() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["person", "kevin bacon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kevin Bacon (id 102, born 1958)"))
        .stdout(predicate::str::contains("  - A Few Good Men (1992)\n  - Apollo 13 (1995)"));
}

#[test]
fn test_stats_command() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["--quiet", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("People:  12"))
        .stdout(predicate::str::contains("Movies:  5"))
        .stdout(predicate::str::contains("Credits: 14"))
        .stdout(predicate::str::contains("Skipped credits: 1"))
        .stdout(predicate::str::contains("Loading data...").not());
}

#[test]
fn test_missing_dataset_fails() {
    let fixture = Fixture::new();

    Command::cargo_bin("degrees")
        .unwrap()
        .env("COSTAR_CONFIG", fixture.dir.path().join("config.toml"))
        .args(["--data-dir", "/nonexistent/costar", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dataset"));
}

#[test]
fn test_config_set_and_get() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["config", "set", "strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set strategy = dfs"));

    fixture
        .cmd()
        .args(["config", "get", "strategy"])
        .assert()
        .success()
        .stdout("dfs\n");

    fixture
        .cmd()
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_format_applies_to_output() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["config", "set", "format", "csv"])
        .assert()
        .success();

    fixture
        .cmd()
        .args(["path", "Tom Hanks", "Kevin Bacon"])
        .assert()
        .success()
        .stdout("step,from_id,from,to_id,to,movie_id,movie,year\n1,158,Tom Hanks,102,Kevin Bacon,112384,Apollo 13,1995\n");
}

#[test]
fn test_completions() {
    Command::cargo_bin("degrees")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("degrees"));
}

#[test]
fn test_csv_distinguishes_zero_degrees_from_no_path() {
    let fixture = Fixture::new();
    let header = "step,from_id,from,to_id,to,movie_id,movie,year\n";

    fixture
        .cmd()
        .args(["--format", "csv", "path", "Kevin Bacon", "Kevin Bacon"])
        .assert()
        .success()
        .stdout(header);

    fixture
        .cmd()
        .args(["--format", "csv", "path", "Emma Watson", "Kevin Bacon"])
        .assert()
        .failure()
        .stdout(header)
        .stderr(predicate::str::contains("Not connected."));
}
