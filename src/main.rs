//! Command line entry point for tally-sort

use std::process;
use clap::{Arg, ArgAction, ArgMatches, Command};

use tally_sort::{
    args::normalize_args,
    config::{DataType, SortConfig, SortConfigBuilder, SortingType},
    error::SortResult,
    logger, run,
};

fn main() {
    match try_main() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) if e.is_configuration() => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("tally-sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn try_main() -> SortResult<i32> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let normalized = normalize_args(&args);

    let matches = build_cli().get_matches_from(&normalized.args);

    // Selector values are checked before anything else is reported
    let config = parse_config_from_matches(&matches)?;
    logger::init(config.debug);

    for flag in &normalized.skipped {
        eprintln!("\"{flag}\" is not a valid parameter. It will be skipped.");
    }

    log::debug!(
        "data type {}, sorting type {}",
        config.data_type,
        config.sorting_type
    );
    run(&config)
}

fn build_cli() -> Command {
    Command::new("tally-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("tally-sort [-dataType long|line|word] [-sortingType natural|byCount] [-inputFile FILE] [-outputFile FILE]")
        .about("Sort numbers, lines or words naturally or by occurrence count")
        .long_about("Sort numbers, lines or words naturally or by occurrence count.\n\nThe single-dash spellings -dataType, -sortingType, -inputFile and -outputFile are accepted as aliases of the long options below. Unknown flags are reported and ignored.")
        .arg(Arg::new("data-type")
            .long("data-type")
            .help("Kind of token to read: long, line or word (default: word)")
            .value_name("TYPE")
            .num_args(0..=1)
            .default_missing_value(""))
        .arg(Arg::new("sorting-type")
            .long("sorting-type")
            .help("Ordering: natural or byCount (default: natural)")
            .value_name("TYPE")
            .num_args(0..=1)
            .default_missing_value(""))
        .arg(Arg::new("input-file")
            .long("input-file")
            .help("Read input from FILE instead of standard input")
            .value_name("FILE")
            .num_args(0..=1)
            .default_missing_value(""))
        .arg(Arg::new("output-file")
            .long("output-file")
            .help("Append the report to FILE instead of standard output")
            .value_name("FILE")
            .num_args(0..=1)
            .default_missing_value(""))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log pipeline progress to standard error")
            .action(ArgAction::SetTrue))
}

/// Value of a selector: `None` when absent, `Some(None)` when given bare
fn selector<'a>(matches: &'a ArgMatches, id: &str) -> Option<Option<&'a str>> {
    matches
        .get_one::<String>(id)
        .map(|value| Some(value.as_str()).filter(|v| !v.is_empty()))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let sorting_type: SortingType = SortConfig::resolve_selector(selector(matches, "sorting-type"))?;
    let data_type: DataType = SortConfig::resolve_selector(selector(matches, "data-type"))?;

    let path = |id: &str| selector(matches, id).flatten().map(str::to_string);

    let mut builder = SortConfigBuilder::new()
        .data_type(data_type)
        .sorting_type(sorting_type);
    if let Some(input) = path("input-file") {
        builder = builder.input_file(input);
    }
    if let Some(output) = path("output-file") {
        builder = builder.output_file(output);
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    Ok(builder.build())
}
