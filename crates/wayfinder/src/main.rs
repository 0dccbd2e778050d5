use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use knn_graph::{Algorithm, DEFAULT_NEIGHBORS, GraphBuilder, HeuristicKind};
use log::error;
use wayfinder::{Error, compare, input::load_coordinates, report::Report};

/// Compare route searches on a k-nearest-neighbor graph of named places.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Places as '.json' (array of {name, latitude, longitude}) or '.geojson'
    in_file: PathBuf,

    /// Name of the start place
    #[arg(short, long)]
    start: String,

    /// Name of the goal place
    #[arg(short, long)]
    goal: String,

    /// Outgoing edges per place
    #[arg(short = 'k', long, default_value_t = DEFAULT_NEIGHBORS)]
    neighbors: usize,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    All,
    Bfs,
    Greedy,
    AStarGreatCircle,
    AStarFlatPlane,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::All => Algorithm::ALL.to_vec(),
            Self::Bfs => vec![Algorithm::BreadthFirst],
            Self::Greedy => vec![Algorithm::GreedyBestFirst],
            Self::AStarGreatCircle => vec![Algorithm::AStar(HeuristicKind::GreatCircle)],
            Self::AStarFlatPlane => vec![Algorithm::AStar(HeuristicKind::FlatPlane)],
        }
    }
}

fn run(cli: &Cli) -> Result<Report, Error> {
    let coordinates = load_coordinates(&cli.in_file)?;
    let graph = GraphBuilder::new()
        .coordinates(coordinates)
        .neighbors(cli.neighbors)
        .build()?;

    let runs = compare::compare(&graph, &cli.start, &cli.goal, &cli.algorithm.algorithms())?;

    Ok(Report::new(&graph, &cli.start, &cli.goal, &runs))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).unwrap();
    tracing_log::LogTracer::init().unwrap();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("could not serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}
