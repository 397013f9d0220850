//! Approximate a concept over a comma-separated decision table.
//!
//! The first line of the input holds the column names; the last column is the
//! decision. Values are split on commas without any quoting rules.
//!
//! ```text
//! cargo run --example approximate -- demos/flu.csv --concept yes --subset headache,temperature
//! ```

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use log::info;

use roughset_rs::{AttributeSubset, ConceptSet, Config, DecisionTable, InformationSystem, Region};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rough set regions of a decision concept")]
struct Cli {
    /// Input table, comma-separated, with a header line.
    path: PathBuf,

    /// Attributes inducing the indiscernibility relation (default: all).
    #[arg(long, value_delimiter = ',')]
    subset: Vec<String>,

    /// Decision values forming the concept (default: all).
    #[arg(long, value_delimiter = ',')]
    concept: Vec<String>,

    /// Header of the class id column in the diagnostic tables.
    #[arg(long, default_value = roughset_rs::config::DEFAULT_CLASS_COLUMN)]
    class_column: String,

    /// Print the indiscernibility and diversity tables.
    #[arg(long)]
    tables: bool,

    /// Disable memoization of partitions and diversities.
    #[arg(long)]
    no_cache: bool,
}

fn split(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn read_table(cli: &Cli) -> color_eyre::Result<DecisionTable> {
    let text = std::fs::read_to_string(&cli.path)?;
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or_else(|| eyre!("{} is empty", cli.path.display()))?;
    let mut names = split(header);
    let Some(decision_name) = names.pop() else {
        bail!("missing decision column");
    };
    if names.is_empty() {
        bail!("table needs at least one attribute besides the decision");
    }

    let mut rows = Vec::new();
    let mut decisions = Vec::new();
    for line in lines {
        let mut cells = split(line);
        match cells.pop() {
            Some(decision) => decisions.push(decision),
            None => bail!("empty line in table"),
        }
        rows.push(cells);
    }
    info!("read {} rows with {} attributes", rows.len(), names.len());

    let config = Config::default()
        .with_class_column(cli.class_column.clone())
        .with_cache(!cli.no_cache);
    let system = InformationSystem::new(names, rows, config)?;
    Ok(DecisionTable::with_decision_name(system, decision_name, decisions)?)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    let time_total = std::time::Instant::now();

    let table = read_table(&cli)?;
    let subset = if cli.subset.is_empty() {
        AttributeSubset::all()
    } else {
        AttributeSubset::of(cli.subset.iter().map(String::as_str))
    };
    let concept = if cli.concept.is_empty() {
        ConceptSet::all()
    } else {
        ConceptSet::of(cli.concept.iter().map(String::as_str))
    };

    println!("decision = {}", table.decision_name());
    println!("concepts = {:?}", table.concepts());

    if cli.tables {
        println!("----------------------------------");
        print!("{}", table.system().indiscernibility(&subset, true)?);
        println!("----------------------------------");
        print!("{}", table.diversity_table(&subset)?);
    }

    let approx = table.approximate(&concept, &subset)?;
    println!("----------------------------------");
    for region in Region::ALL {
        println!("{:>8}: {:?}", region.to_string(), approx.region(region));
    }
    println!("accuracy = {:.3}", approx.accuracy());
    println!("quality = {:.3}", approx.quality());

    let boundary = table.select(approx.boundary())?;
    if !boundary.is_empty() {
        println!("----------------------------------");
        println!("boundary objects:");
        let decisions = boundary.decisions().unwrap_or_default();
        for (i, row) in boundary.row_ids().iter().enumerate() {
            let decision = decisions.get(i).copied().unwrap_or_default();
            println!("- {}: {:?} -> {}", row, boundary.attributes()[i], decision);
        }
    }

    let partitions = table.system().partition_cache();
    info!(
        "partition cache: {} hits, {} misses",
        partitions.hits(),
        partitions.misses()
    );

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
