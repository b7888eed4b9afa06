use std::env;
use std::error::Error;
use std::fmt::Display;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use clap::{App, Arg, ArgGroup};
use log::info;
use separator::Separatable;

use puzzle_solver::config::{Puzzle, SolverConfig};
use puzzle_solver::{fs, parser};
use puzzle_solver::solver::{self, Hint};
use puzzle_solver::{astro, hoppers, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("puzzle-solver")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("astro")
                .short("-a")
                .long("--astro")
                .help("Parse as an Astro level (detected automatically by default)"),
        ).arg(
            Arg::with_name("hoppers")
                .short("-f")
                .long("--hoppers")
                .help("Parse as a Hoppers level (detected automatically by default)"),
        ).group(ArgGroup::with_name("puzzle").arg("astro").arg("hoppers"))
        .arg(
            Arg::with_name("verbose")
                .short("-v")
                .long("--verbose")
                .help("Print stats every time the search reaches a new depth"),
        ).arg(
            Arg::with_name("stats")
                .short("-s")
                .long("--stats")
                .help("Print stats for each depth after solving"),
        ).arg(
            Arg::with_name("timeout")
                .short("-t")
                .long("--timeout")
                .value_name("SECONDS")
                .takes_value(true)
                .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|err| err.to_string()))
                .help("Give up after this many seconds"),
        ).arg(
            Arg::with_name("hint")
                .long("--hint")
                .help("Only print the next step of a shortest solution"),
        ).arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let text = fs::read_file(path).unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!("Can't read file {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });

    let puzzle = if matches.is_present("astro") {
        Puzzle::Astro
    } else if matches.is_present("hoppers") {
        Puzzle::Hoppers
    } else {
        parser::detect_puzzle(&text)
    };
    info!("Solving {} as {}", path, puzzle);

    let config = SolverConfig {
        timeout: matches
            .value_of("timeout")
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs),
        cancel: None,
        print_status: matches.is_present("verbose"),
    };
    let options = Options {
        config,
        hint: matches.is_present("hint"),
        stats: matches.is_present("stats"),
    };

    println!("File: {}", path);
    let res = match puzzle {
        Puzzle::Astro => run::<astro::Board>(&text, &options),
        Puzzle::Hoppers => run::<hoppers::Board>(&text, &options),
    };
    if let Err(err) = res {
        println!("{}", err);
        process::exit(1);
    }
}

struct Options {
    config: SolverConfig,
    hint: bool,
    stats: bool,
}

fn run<S>(text: &str, options: &Options) -> Result<(), Box<dyn Error>>
where
    S: Solve + Display + FromStr,
    S::Err: Error + 'static,
{
    let start = text
        .parse::<S>()
        .map_err(|err| format!("Failed to parse: {}", err))?;
    println!("{}", start);

    println!("Solving...");
    if options.hint {
        match solver::hint_with(&start, &options.config)? {
            Hint::AlreadySolved => println!("Already solved"),
            Hint::Next(state) => println!("Next step:\n{}", state),
            Hint::NoSolution => println!("No solution"),
        }
        return Ok(());
    }

    let solution = start.solve(&options.config)?;
    println!(
        "Total configs: {}",
        solution.stats.total_generated().separated_string()
    );
    println!(
        "Unique configs: {}",
        solution.stats.total_unique_visited().separated_string()
    );
    if options.stats {
        println!("{}", solution.stats);
    }

    match solution.path {
        Some(path) => {
            for (i, state) in path.iter().enumerate() {
                println!("Step {}:\n{}", i, state);
            }
        }
        None => println!("No solution"),
    }
    Ok(())
}
