//! Shortest path command

use std::io::{self, Write};

use clap::Args;

use crate::config::Strategy;
use crate::output::{format_path, OutputFormat, PathReport};
use crate::prompt::Prompter;
use crate::{AppContext, Cli};
use costar_core::{Dataset, Discipline, PathFinder, PathQuery, PersonId};
use costar_search::{ExactNameResolver, NameResolver};

#[derive(Args, Default)]
pub struct PathArgs {
    /// Name of the first person (prompted for when omitted)
    pub source: Option<String>,

    /// Name of the second person (prompted for when omitted)
    pub target: Option<String>,

    /// Search strategy (default from config, else bfs)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Give up after exploring this many people
    #[arg(long)]
    pub max_explored: Option<usize>,

    /// Include search statistics in the output
    #[arg(long)]
    pub stats: bool,
}

impl From<Strategy> for Discipline {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => Discipline::Queue,
            Strategy::Dfs => Discipline::Stack,
        }
    }
}

pub fn run(args: &PathArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = cli.format(&ctx.config);
    let resolver = ExactNameResolver::new();

    // Prompts share stdout with table output; structured output keeps
    // stdout clean by prompting on stderr.
    let stdin = io::stdin();
    let prompt_out: Box<dyn Write> = match format {
        OutputFormat::Table => Box::new(io::stdout()),
        _ => Box::new(io::stderr()),
    };
    let mut prompter = Prompter::new(stdin.lock(), prompt_out);

    let source = resolve(&mut prompter, args.source.as_deref(), &ctx.dataset, &resolver)?;
    let target = resolve(&mut prompter, args.target.as_deref(), &ctx.dataset, &resolver)?;

    let strategy = args.strategy.unwrap_or(ctx.config.strategy);
    let mut query = PathQuery::new(source, target).with_discipline(strategy.into());
    if let Some(limit) = args.max_explored {
        query = query.with_max_explored(limit);
    }

    let result = PathFinder::execute(&query, &ctx.dataset)?;
    tracing::info!(
        "Search with {} explored {} people",
        strategy,
        result.stats.nodes_explored
    );

    let report = PathReport::build(&ctx.dataset, &result, args.stats)?;
    let rendered = format_path(&report, format)?;
    println!("{}", rendered.trim_end());

    // Header-only CSV already means zero degrees
    if format == OutputFormat::Csv && !report.connected {
        anyhow::bail!("Not connected.");
    }

    Ok(())
}

fn resolve<R: io::BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: Option<&str>,
    dataset: &Dataset,
    resolver: &dyn NameResolver,
) -> anyhow::Result<PersonId> {
    let name = match name {
        Some(name) => name.to_string(),
        None => prompter.ask("Name: ")?,
    };

    match prompter.resolve_person(&name, dataset, resolver)? {
        Some(id) => Ok(id),
        None => {
            suggest(&name, dataset);
            anyhow::bail!("Person not found.")
        }
    }
}

#[cfg(feature = "fuzzy")]
pub(crate) fn suggest(name: &str, dataset: &Dataset) {
    let suggestions = costar_search::FuzzySuggester::new().suggest(name, dataset);
    if !suggestions.is_empty() {
        eprintln!("Did you mean: {}?", suggestions.join(", "));
    }
}

#[cfg(not(feature = "fuzzy"))]
pub(crate) fn suggest(_name: &str, _dataset: &Dataset) {}
