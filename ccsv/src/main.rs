//! # ccsv
//!
//! A CLI for printing typed numeric columns as comma-separated rows.
//!
//! ## Overview
//!
//! ccsv is built on top of ccsvlib. Each positional argument describes one
//! column as `KIND:VALUES` or `KIND:@FILE`; the columns are checked for equal
//! length and then printed side by side, one row per line.
//!
//! ## Usage
//!
//! ```bash
//! # Two inline columns
//! ccsv int:1,2,3 double:0.5,0.25,0.125
//!
//! # Read values from files (comma/whitespace separated)
//! ccsv longlong:@ids.txt float:@scores.txt
//!
//! # Write to a file instead of stdout
//! ccsv -o out.csv uint:1,2 ulong:3,4
//!
//! # List the supported kinds
//! ccsv kinds
//! ccsv kinds --json
//! ```

mod render;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use ccsvlib::{Column, ColumnBuf, Kind, RowPrinter};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("ccsv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print typed numeric columns as comma-separated rows")
        .arg(
            Arg::new("columns")
                .value_name("COLUMN")
                .action(ArgAction::Append)
                .help("Column as KIND:VALUES or KIND:@FILE (e.g. int:1,2,3)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write rows to FILE instead of stdout"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Diagnostics level (written to stderr)"),
        )
        .subcommand(
            Command::new("kinds").about("List supported column kinds").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print as JSON"),
            ),
        )
}

/// Install the stderr subscriber at the requested level
fn init_tracing(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let matches = matches.subcommand().map_or(matches, |(_, sub)| sub);
    let level: Level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn")
        .parse()
        .map_err(|e| anyhow!("invalid log level: {e}"))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Parse a `KIND:VALUES` or `KIND:@FILE` argument into an owned column
fn parse_column_arg(arg: &str) -> Result<ColumnBuf, anyhow::Error> {
    let (kind, values) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("invalid column '{arg}': expected KIND:VALUES or KIND:@FILE"))?;
    let kind: Kind = kind.parse()?;

    let buf = match values.strip_prefix('@') {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read column file '{path}'"))?;
            ColumnBuf::parse(kind, &text)?
        }
        None => ColumnBuf::parse(kind, values)?,
    };

    tracing::debug!(%kind, rows = buf.len(), "parsed column");
    Ok(buf)
}

/// Handler for the default (print) command
fn print_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let buffers = matches
        .get_many::<String>("columns")
        .into_iter()
        .flatten()
        .map(|arg| parse_column_arg(arg))
        .collect::<Result<Vec<_>, _>>()?;
    let columns: Vec<Column<'_>> = buffers.iter().map(ColumnBuf::as_column).collect();

    // Validate before any output is opened
    let printer = RowPrinter::new(&columns)?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create '{path}'"))?;
            printer.print(&mut BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            printer.print(&mut BufWriter::new(stdout.lock()))?;
        }
    }

    tracing::info!(
        rows = printer.row_count(),
        columns = printer.column_count(),
        "printed rows"
    );
    Ok(())
}

/// Handler for `kinds`
fn kinds_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let kinds = render::kind_infos();
    if matches.get_flag("json") {
        println!("{}", render::render_kinds_json(&kinds)?);
    } else {
        print!("{}", render::render_kinds_text(&kinds));
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if let Err(e) = init_tracing(&matches) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match matches.subcommand() {
        Some(("kinds", sub)) => kinds_handler(sub),
        _ => print_handler(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_parse_inline_column() {
        let buf = parse_column_arg("int:1,2,3").unwrap();
        assert_eq!(buf, ColumnBuf::Int(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_negative_values() {
        let buf = parse_column_arg("longlong:-1,-2").unwrap();
        assert_eq!(buf, ColumnBuf::LongLong(vec![-1, -2]));
    }

    #[test]
    fn test_parse_missing_kind_separator() {
        let err = parse_column_arg("1,2,3").unwrap_err();
        assert!(err.to_string().contains("expected KIND:VALUES"));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = parse_column_arg("quad:1").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ccsvlib::CcsvError>(),
            Some(ccsvlib::CcsvError::UnknownType(_))
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_column_arg("int:@/nonexistent/values.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read column file"));
    }

    #[test]
    fn test_kinds_subcommand_matches() {
        let matches = build_command()
            .try_get_matches_from(["ccsv", "kinds", "--json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "kinds");
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_columns_collected_in_order() {
        let matches = build_command()
            .try_get_matches_from(["ccsv", "int:1", "double:2", "-o", "out.csv"])
            .unwrap();
        let columns: Vec<&String> = matches.get_many::<String>("columns").unwrap().collect();
        assert_eq!(columns, ["int:1", "double:2"]);
        assert_eq!(
            matches.get_one::<String>("output").map(String::as_str),
            Some("out.csv")
        );
    }
}
