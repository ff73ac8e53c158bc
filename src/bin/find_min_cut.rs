//! Finds the minimum cut of a graph read from an adjacency-list file.
//!
//! Usage examples:
//!   find_min_cut
//!   find_min_cut kargerMinCut.txt --trials 1000 --seed 7
//!   find_min_cut kargerMinCut.txt --parallel --convergence convergence.txt

use algos_mincut::cs::graph::{read_adjacency_list, Graph, MinCut, MinCutConfig};
use algos_mincut::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "find_min_cut", about = "Randomized minimum cut by contraction")]
struct Cli {
    /// Adjacency-list file, one `vertex neighbor neighbor ...` per line.
    /// Runs a five-vertex demo graph when omitted.
    input: Option<PathBuf>,

    /// Number of trials (default ceil(n^2 ln n)).
    #[arg(long)]
    trials: Option<usize>,

    /// Upper bound on the number of trials.
    #[arg(long)]
    max_trials: Option<usize>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop starting new trials after this many milliseconds.
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Run trials on all cores.
    #[arg(long)]
    parallel: bool,

    /// Write the best-so-far cut size after each trial to this file.
    #[arg(long)]
    convergence: Option<PathBuf>,
}

fn demo_graph() -> Result<Graph<u64>> {
    Graph::from_rows(&[
        vec![1, 3],
        vec![2, 3],
        vec![3, 1, 2, 4, 5],
        vec![4, 3, 5],
        vec![5, 3, 4],
    ])
}

fn run(cli: &Cli) -> Result<MinCut<u64>> {
    let graph = match &cli.input {
        Some(path) => Graph::build(&read_adjacency_list::<u64, _>(path)?)?,
        None => {
            println!("No input given, using the demo graph");
            demo_graph()?
        }
    };

    let config = MinCutConfig {
        trials: cli.trials,
        max_trials: cli.max_trials,
        seed: cli.seed,
        deadline: cli.deadline_ms.map(Duration::from_millis),
        parallel: cli.parallel,
    };
    let cut = graph.find_min_cut_with(&config)?;

    if let Some(path) = &cli.convergence {
        let series: String = cut
            .convergence
            .iter()
            .map(|size| format!("{}\n", size))
            .collect();
        fs::write(path, series)?;
    }
    Ok(cut)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(cut) => {
            println!("Minimum cut: {}", cut.cut_size);
            println!("First subgraph:");
            println!("{:?}", cut.partition_a);
            println!("Second subgraph:");
            println!("{:?}", cut.partition_b);
            println!(
                "Trials: {} run, {} aborted",
                cut.trials_run, cut.trials_aborted
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
