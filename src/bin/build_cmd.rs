use log::debug;
use myroom_tools as myroom;
use myroom::compose::{compose, CommandRequest};

extern crate clap;
use clap::{value_parser, Arg, Command};

fn main() {
    tracing_subscriber::fmt::init();
    let matches = Command::new("build_cmd")
        .about("Build a single integration command string and print it.")
        .arg(
            Arg::new("OP")
                .required(true)
                .help("Operation. '?'/'get' or '#'/'set'"),
        )
        .arg(
            Arg::new("FAMILY")
                .required(true)
                .help("Command family. area, ethernet, integrationid, output, reset, sysvar or timeclock"),
        )
        .arg(
            Arg::new("ACTION")
                .help("Action within the family, e.g. occupancy-state or ip-address"),
        )
        .arg(
            Arg::new("id")
                .short('i')
                .long("id")
                .value_parser(value_parser!(u32))
                .help("Integration id of the target device"),
        )
        .arg(
            Arg::new("address")
                .short('a')
                .long("address")
                .help("IP address parameter"),
        )
        .arg(
            Arg::new("serial")
                .short('s')
                .long("serial")
                .help("Device serial number"),
        )
        .arg(
            Arg::new("level")
                .short('l')
                .long("level")
                .value_parser(value_parser!(u8))
                .help("Output level in percent"),
        )
        .arg(
            Arg::new("fade")
                .short('f')
                .long("fade")
                .help("Fade time, raw token or HH:MM:SS"),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .help("Delay time, raw token or HH:MM:SS"),
        )
        .arg(
            Arg::new("state")
                .long("state")
                .value_parser(value_parser!(u32))
                .help("Variable state value"),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .value_parser(value_parser!(u32))
                .help("Time clock event index"),
        )
        .arg(
            Arg::new("enable")
                .long("enable")
                .help("Event enable state. 'enable' or 'disable'"),
        )
        .get_matches();

    let request = CommandRequest {
        operation: matches.get_one::<String>("OP").unwrap().clone(),
        family: matches.get_one::<String>("FAMILY").unwrap().clone(),
        action: matches.get_one::<String>("ACTION").cloned(),
        integration_id: matches.get_one::<u32>("id").copied(),
        address: matches.get_one::<String>("address").cloned(),
        serial_number: matches.get_one::<String>("serial").cloned(),
        level: matches.get_one::<u8>("level").copied(),
        fade: matches.get_one::<String>("fade").cloned(),
        delay: matches.get_one::<String>("delay").cloned(),
        variable_state: matches.get_one::<u32>("state").copied(),
        event_index: matches.get_one::<u32>("index").copied(),
        enable_state: matches.get_one::<String>("enable").cloned(),
    };
    debug!("Request: {:?}", request);
    match compose(&request) {
        Ok(cmd) => println!("{}", cmd),
        Err(e) => {
            eprintln!("Failed to build command: {}", e);
        }
    }
}
