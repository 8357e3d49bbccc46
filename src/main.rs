use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::{debug, Level};

use stylevars::formatting::{self, Dialect};
use stylevars::{loading, output, problem};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("stylevars")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Generate stylesheet variable files from design tokens.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug output."),
        )
        .subcommand(
            Command::new("render")
                .about("Render a token file as a list of variable declarations")
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .default_value("css")
                        .value_parser(|s: &str| s.parse::<Dialect>())
                        .help(format!(
                            "The stylesheet language to generate: {}.",
                            Dialect::ALL
                                .map(|dialect| dialect.name())
                                .join(", ")
                        )),
                )
                .arg(
                    Arg::new("output-references")
                        .short('r')
                        .long("output-references")
                        .action(ArgAction::SetTrue)
                        .help("Write references as uses of the variables they refer to rather than as resolved values. Tokens are reordered so that every variable is declared before it is used."),
                )
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .action(ArgAction::SetTrue)
                        .help("Omit the \"Do not edit directly\" comment at the top of the output."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .default_value("-")
                        .help("The file to write to. The default, -, is standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the resolved tokens, as a JSON array. Use - to read from standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting stylevars {}", VERSION);

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let dialect = submatches
                .get_one::<Dialect>("format")
                .copied()
                .unwrap_or(Dialect::Css);
            let output_references = submatches.get_flag("output-references");
            let with_header = !submatches.get_flag("no-header");

            // both arguments have values, required or defaulted
            let filename = submatches
                .get_one::<String>("filename")
                .map(String::as_str)
                .unwrap_or("-");
            let target = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("-");

            render(
                Path::new(filename),
                Path::new(target),
                dialect,
                output_references,
                with_header,
            );
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: stylevars [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn render(filename: &Path, target: &Path, dialect: Dialect, output_references: bool, with_header: bool) {
    debug!(?filename, %dialect, output_references, "Rendering");

    let content = match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let dictionary = match loading::parse(filename, &content) {
        Ok(dictionary) => dictionary,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let listing = match formatting::render_variables(dialect, &dictionary, output_references) {
        Ok(listing) => listing,
        Err(error) => {
            eprintln!("{}", problem::concise_render_error(&error, filename));
            std::process::exit(1);
        }
    };

    let result = output::document(dialect, &listing, with_header)
        .and_then(|text| output::write(target, &text));

    if let Err(error) = result {
        eprintln!("{}", problem::concise_output_error(&error));
        std::process::exit(1);
    }
}
