mod error;
mod policies;
mod rand_generator;
mod utils;

use clap::{App, Arg};
use regex::Regex;

use error::SimError;
use policies::Direction;
use rand_generator::RequestGenerator;
use utils::read_request_file;

// SCAN always starts its sweep toward larger track numbers.
const SCAN_DIRECTION: Direction = Direction::Right;

fn valid_integer(value: &str) -> Result<(), String> {
    let re = Regex::new(r"^-?\d+$").unwrap();
    if !re.is_match(value) {
        Err(format!("not an integer: {}", value))
    } else {
        Ok(())
    }
}

fn parse_args() -> Result<(i64, Option<String>, usize, i64, Option<u64>), SimError> {
    let matches = App::new("Disk Scheduling Simulator")
        .arg(
            Arg::with_name("initial_position")
                .required(true)
                .index(1)
                .validator(valid_integer)
                .help("Initial position of the disk arm"),
        )
        .arg(
            Arg::with_name("file")
                .short('f')
                .long("file")
                .takes_value(true)
                .help("File with disk track requests"),
        )
        .arg(
            Arg::with_name("num_requests")
                .short('n')
                .long("num-requests")
                .takes_value(true)
                .default_value("100")
                .help("Number of random requests when no file is given"),
        )
        .arg(
            Arg::with_name("disk_size")
                .short('d')
                .long("disk-size")
                .takes_value(true)
                .default_value("5000")
                .help("Number of tracks on the disk"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for the random request generator"),
        )
        .get_matches();

    let disk_size = matches
        .value_of("disk_size")
        .unwrap()
        .parse::<i64>()
        .map_err(|_| SimError::Configuration("disk size must be an integer".to_string()))?;
    if disk_size <= 0 {
        return Err(SimError::bad_disk_size(disk_size));
    }

    let initial_position = matches
        .value_of("initial_position")
        .unwrap()
        .parse::<i64>()
        .map_err(|_| SimError::InvalidInput("initial position out of integer range".to_string()))?;
    if initial_position >= disk_size || initial_position <= -disk_size {
        return Err(SimError::InvalidInput(format!(
            "initial position {} outside the range {} to {}",
            initial_position,
            -(disk_size - 1),
            disk_size - 1
        )));
    }

    let num_requests = matches
        .value_of("num_requests")
        .unwrap()
        .parse::<usize>()
        .map_err(|_| {
            SimError::Configuration("number of requests must be a non-negative integer".to_string())
        })?;

    let seed = match matches.value_of("seed") {
        Some(seed) => Some(
            seed.parse::<u64>()
                .map_err(|_| SimError::Configuration("seed must be a non-negative integer".to_string()))?,
        ),
        None => None,
    };

    let file = matches.value_of("file").map(|f| f.to_string());
    Ok((initial_position, file, num_requests, disk_size, seed))
}

fn run() -> Result<(), SimError> {
    let (initial_position, file, num_requests, disk_size, seed) = parse_args()?;

    let requests = match file {
        Some(filename) => read_request_file(&filename)?,
        None => {
            let mut generator = RequestGenerator::new(disk_size, seed)?;
            let requests = generator.generate(num_requests);
            if requests.is_empty() {
                return Err(SimError::empty_requests());
            }
            requests
        }
    };

    println!("FCFS: {}", policies::fcfs(initial_position, &requests)?);
    println!("SSTF: {}", policies::sstf(initial_position, &requests)?);
    println!(
        "SCAN: {}",
        policies::scan(initial_position, &requests, disk_size, SCAN_DIRECTION)?
    );
    println!("C-SCAN: {}", policies::c_scan(initial_position, &requests, disk_size)?);
    println!("LOOK: {}", policies::look(initial_position, &requests)?);
    println!("C-LOOK: {}", policies::c_look(initial_position, &requests)?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
