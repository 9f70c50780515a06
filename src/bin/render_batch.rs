use log::{info, warn};
use myroom_tools as myroom;
use myroom::compose::{compose, CommandRequest};

extern crate clap;
use clap::{Arg, Command};

fn main() {
    tracing_subscriber::fmt::init();
    let matches = Command::new("render_batch")
        .about("Render a JSON array of command requests to wire strings.")
        .arg(
            Arg::new("FILE")
                .required(true)
                .help("JSON file containing an array of command requests"),
        )
        .get_matches();

    let path = matches.get_one::<String>("FILE").unwrap();
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            return;
        }
    };
    let requests: Vec<CommandRequest> = match serde_json::from_str(&data) {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("Failed to parse {}: {}", path, e);
            return;
        }
    };
    info!("Rendering {} requests", requests.len());
    let mut failed = 0;
    for (index, request) in requests.iter().enumerate() {
        match compose(request) {
            Ok(cmd) => println!("{}", cmd),
            Err(e) => {
                warn!("Request {} skipped: {}", index, e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        eprintln!("{} of {} requests failed", failed, requests.len());
    }
}
