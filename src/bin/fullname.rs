//! Command-line interface for fullname
//! This binary splits a personal name string into its parts.
//!
//! Usage:
//!   fullname parse `<name>` [--part `<part>`] [--fix-case] [--lenient] [--format `<format>`]

use clap::{Arg, ArgAction, Command};
use fullname::{Name, Options, ParseOutput, Parser, Part};

fn main() {
    let matches = Command::new("fullname")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for splitting personal name strings into their parts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a single name string")
                .arg(
                    Arg::new("name")
                        .help("The name string to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("part")
                        .long("part")
                        .short('p')
                        .help("Part to print: all, title, first, middle, last, nick, suffix or error")
                        .default_value("all"),
                )
                .arg(
                    Arg::new("fix-case")
                        .long("fix-case")
                        .action(ArgAction::SetTrue)
                        .help("Normalize the casing of every word before parsing"),
                )
                .arg(
                    Arg::new("lenient")
                        .long("lenient")
                        .action(ArgAction::SetTrue)
                        .help("Collect errors in the result instead of aborting"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('plain' or 'json')")
                        .default_value("plain"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let name = parse_matches.get_one::<String>("name").unwrap();
            let part = parse_matches.get_one::<String>("part").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let fix_case = parse_matches.get_flag("fix-case");
            let lenient = parse_matches.get_flag("lenient");
            handle_parse_command(name, part, format, fix_case, lenient);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(name: &str, part: &str, format: &str, fix_case: bool, lenient: bool) {
    let options = Options {
        part: Part::from_name(part),
        fix_case,
        stop_on_error: !lenient,
        ..Options::default()
    };
    let parser = Parser::with_options(options);
    let output = parser.parse(Some(name)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    match format {
        "json" => print_json(&output),
        _ => print_plain(&output),
    }
}

fn print_json(output: &ParseOutput) {
    let rendered = match output {
        ParseOutput::All(name) => serde_json::to_string_pretty(name),
        ParseOutput::Text(text) => serde_json::to_string_pretty(text),
        ParseOutput::Errors(errors) => serde_json::to_string_pretty(errors),
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_plain(output: &ParseOutput) {
    match output {
        ParseOutput::All(name) => print_record(name),
        ParseOutput::Text(Some(text)) => println!("{}", text),
        ParseOutput::Text(None) => {}
        ParseOutput::Errors(errors) => {
            for error in errors {
                println!("{}", error);
            }
        }
    }
}

fn print_record(name: &Name) {
    let fields = [
        ("title", name.academic_title()),
        ("initial", name.leading_initial()),
        ("first", name.first_name()),
        ("middle", name.middle_name()),
        ("last", name.last_name()),
        ("nick", name.nicknames()),
        ("suffix", name.suffix()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }
    for error in name.errors() {
        println!("error: {}", error);
    }
}
