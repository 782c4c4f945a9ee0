//! Page replacement simulator CLI.
//!
//! ```text
//! pagesim --frames 3 1 2 3 4 1 2 5 1 2 3 4 5
//! echo "7 0 1 2 0 3" | pagesim -f 3 --policy fifo,lru
//! ```

use std::error::Error;
use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use env_logger::Env;
use log::debug;

use pagesim::common::config::DEFAULT_FRAME_COUNT;
use pagesim::input::parse_reference_string;
use pagesim::report::{BestPolicyLine, ResultTable, Summary};
use pagesim::{compare, compare_parallel, PageId, Policy, SimulationConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (FIFO, LRU, Optimal)",
    long_about = None,
)]
struct Cli {
    /// Number of frames.
    #[arg(short = 'f', long, default_value_t = DEFAULT_FRAME_COUNT as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Policies to run, comma separated (default: all, in FIFO, LRU, Optimal order).
    #[arg(short = 'p', long = "policy", value_delimiter = ',')]
    policies: Vec<Policy>,

    /// Run each policy on its own thread.
    #[arg(long)]
    parallel: bool,

    /// Print totals only, without the step tables.
    #[arg(short = 's', long)]
    summary: bool,

    /// Reference string. Read from one line of stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    pages: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // Validate frames before touching the reference string.
    let config = SimulationConfig::from_signed(cli.frames)?;
    let pages = read_pages(&cli.pages)?;
    let policies = if cli.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        cli.policies
    };

    debug!(
        "simulating {:?} over {} references with {} frames",
        policies,
        pages.len(),
        config.frame_count()
    );

    let comparison = if cli.parallel {
        compare_parallel(&pages, config.frame_count(), &policies)?
    } else {
        compare(&pages, config.frame_count(), &policies)?
    };

    for result in &comparison.results {
        if cli.summary {
            println!("Algorithm: {}", result.policy_name);
            print!("{}", Summary(result));
        } else {
            print!("{}", ResultTable(result));
        }
        println!();
    }

    if let Some(best) = comparison.best() {
        println!("{}", BestPolicyLine(best));
    }

    Ok(())
}

fn read_pages(args: &[String]) -> Result<Vec<PageId>, Box<dyn Error>> {
    if !args.is_empty() {
        return Ok(parse_reference_string(&args.join(" "))?);
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_reference_string(&line)?)
}
