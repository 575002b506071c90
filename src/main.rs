mod error;
mod evaluate;
mod parse;
mod types;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Arg, ArgAction, Command};
use log::debug;

use error::Result;
use types::TourVerification;

fn build_cli() -> Command {
    // Coordinate file
    let locations_arg = Arg::new("locations")
        .required(true)
        .value_parser(PathBuf::from_str)
        .help(
            "Path to the city coordinate file: 6 header lines, then one `<id> <x> <y>` record per city."
        );
    // Tour file
    let path_arg = Arg::new("path")
        .required(true)
        .value_parser(PathBuf::from_str)
        .help(
            "Path to the tour file: 5 header lines, then the visiting order as whitespace-separated city ids."
        );
    // City count, supplied by the caller rather than derived from the files
    let count_arg = Arg::new("count")
        .required(true)
        .value_parser(clap::value_parser!(u64))
        .help("Number of cities. Must match the contents of both files.");
    let json_arg = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Print the result as a single-line JSON report instead of the plain distance line.");
    let verbose_arg = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Log pipeline progress to stderr.");

    return Command::new("tsp-verify")
        .about(
            "Computes the total Euclidean length of a closed TSP tour from a coordinate file and a tour-order file."
        )
        .arg(locations_arg)
        .arg(path_arg)
        .arg(count_arg)
        .arg(json_arg)
        .arg(verbose_arg);
}

fn init_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(filter_level)
        .target(env_logger::Target::Stderr)
        .init();
}

/// The whole pipeline: load coordinates, build the distance matrix, load
/// the tour, sum its closed length.
fn verify_tour(locations_path: &Path, tour_path: &Path, num_cities: u64) -> Result<f64> {
    let cities = parse::read_cities(locations_path, num_cities)?;
    let distances = evaluate::build_distance_matrix(&cities);
    debug!(
        "distance matrix is {}x{}",
        distances.nrows(),
        distances.ncols()
    );

    let tour = parse::read_tour(tour_path, num_cities)?;

    return Ok(evaluate::calculate_cost_of_tour(&tour, &distances));
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let locations_path = matches.get_one::<PathBuf>("locations").unwrap();
    let tour_path = matches.get_one::<PathBuf>("path").unwrap();
    let num_cities: u64 = *matches.get_one("count").unwrap();
    let as_json: bool = *matches.get_one("json").unwrap();

    let tot_distance = verify_tour(locations_path, tour_path, num_cities)?;

    if as_json {
        let report = TourVerification {
            num_cities,
            tot_distance,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("distance: {:.6}", tot_distance);
    }

    return Ok(());
}

fn main() {
    let matches = build_cli().get_matches();

    let verbose: bool = *matches.get_one("verbose").unwrap();
    init_logging(verbose);

    if let Err(e) = run(&matches) {
        eprintln!("The following error occurred: {}", e);
        std::process::exit(1);
    }
}
