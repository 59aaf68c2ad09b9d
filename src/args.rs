//! Rewriting of the single-dash command line into the canonical clap form

use log::debug;

/// Legacy selector spellings and the long option each one maps to
const SELECTORS: [(&str, &str); 4] = [
    ("-dataType", "--data-type"),
    ("-sortingType", "--sorting-type"),
    ("-inputFile", "--input-file"),
    ("-outputFile", "--output-file"),
];

/// Flags passed through to clap untouched
const PASSTHROUGH: [&str; 5] = ["--debug", "--help", "-h", "--version", "-V"];

/// Command line after legacy rewriting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    /// Arguments ready for clap, program name first
    pub args: Vec<String>,
    /// Unrecognized flags, in the order they appeared
    pub skipped: Vec<String>,
}

fn canonical(arg: &str) -> Option<&'static str> {
    SELECTORS
        .iter()
        .find(|(legacy, long)| arg == *legacy || arg == *long)
        .map(|(_, long)| *long)
}

/// Selector named by `arg`, plus its value when written as `--flag=value`
fn split_selector(arg: &str) -> Option<(&'static str, Option<&str>)> {
    if let Some(long) = canonical(arg) {
        return Some((long, None));
    }
    let (flag, value) = arg.split_once('=')?;
    canonical(flag).map(|long| (long, Some(value)))
}

fn is_recognized_flag(arg: &str) -> bool {
    split_selector(arg).is_some() || PASSTHROUGH.contains(&arg)
}

/// Convert `-dataType long` style arguments into `--data-type=long`.
///
/// `--data-type=long` and `-dataType=long` are taken as they are. Otherwise a
/// selector takes the next argument as its value unless that argument is
/// another recognized flag. A selector with no value is forwarded bare so
/// the caller can tell "absent" from "present but empty". Only the first
/// occurrence of a selector counts.
pub fn normalize_args(args: &[String]) -> NormalizedArgs {
    let mut normalized = NormalizedArgs::default();
    let mut iter = args.iter().peekable();

    if let Some(program) = iter.next() {
        normalized.args.push(program.clone());
    }

    let mut seen: Vec<&'static str> = Vec::new();

    while let Some(arg) = iter.next() {
        if let Some((long, inline)) = split_selector(arg) {
            let value = match inline {
                Some(inline) => Some(inline),
                None => match iter.peek() {
                    Some(next) if !is_recognized_flag(next) => iter.next().map(String::as_str),
                    _ => None,
                },
            };

            if seen.contains(&long) {
                debug!("ignoring repeated {arg}");
                continue;
            }
            seen.push(long);

            match value {
                Some(value) => normalized.args.push(format!("{long}={value}")),
                None => normalized.args.push(long.to_string()),
            }
            continue;
        }

        if PASSTHROUGH.contains(&arg.as_str()) {
            normalized.args.push(arg.clone());
        } else if arg.starts_with('-') && arg.len() > 1 {
            normalized.skipped.push(arg.clone());
        } else {
            debug!("ignoring stray argument {arg:?}");
        }
    }

    normalized
}
