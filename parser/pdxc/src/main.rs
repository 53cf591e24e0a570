//! Headless parser front end.
//!
//! Parses one file and prints its diagnostics to stderr. Exit codes:
//! `1` for usage or load failures, `2` when parsing reported errors,
//! `0` otherwise (warnings alone stay successful).

use std::io::IsTerminal;
use std::process::ExitCode;

use pdx_parse::{CsvParser, DiagnosticRenderer, Parser};

/// Which grammar to run over the input.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
enum Mode {
    #[default]
    Simple,
    Event,
    Decision,
    LuaDefines,
    Csv,
}

struct Options {
    mode: Mode,
    handle_strings: bool,
    path: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(options) = parse_args() else {
        print_usage();
        return ExitCode::from(1);
    };
    let Some(path) = options.path else {
        print_usage();
        return ExitCode::from(1);
    };

    match options.mode {
        Mode::Csv => run_csv(&path, options.handle_strings),
        mode => run_script(&path, mode),
    }
}

fn parse_args() -> Option<Options> {
    let mut options = Options {
        mode: Mode::Simple,
        handle_strings: false,
        path: None,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--event" => options.mode = Mode::Event,
            "--decision" => options.mode = Mode::Decision,
            "--lua" => options.mode = Mode::LuaDefines,
            "--csv" => options.mode = Mode::Csv,
            "--strings" => options.handle_strings = true,
            "--help" | "-h" => return None,
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {arg}");
                return None;
            }
            _ if options.path.is_none() => options.path = Some(arg),
            _ => {
                eprintln!("only one input file is supported");
                return None;
            }
        }
    }
    Some(options)
}

fn print_usage() {
    eprintln!("usage: pdxc [--event|--decision|--lua|--csv] [--strings] <filename>");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  (default)    plain script parse");
    eprintln!("  --event      event files (country_event / province_event)");
    eprintln!("  --decision   decision files (political_decisions)");
    eprintln!("  --lua        Lua defines files");
    eprintln!("  --csv        delimiter-separated tables (';')");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strings    CSV only: parse quoted string fields");
}

fn run_script(path: &str, mode: Mode) -> ExitCode {
    let mut parser = Parser::from_file(path);
    if parser.has_fatal_error() {
        print_errors(&parser);
        return ExitCode::from(1);
    }

    match mode {
        Mode::Simple => parser.simple_parse(),
        Mode::Event => parser.event_parse(),
        Mode::Decision => parser.decision_parse(),
        Mode::LuaDefines => parser.lua_defines_parse(),
        Mode::Csv => unreachable!("csv handled separately"),
    };

    print_errors(&parser);
    if parser.has_error() {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn run_csv(path: &str, handle_strings: bool) -> ExitCode {
    let mut parser = CsvParser::from_file(path);
    if parser.has_fatal_error() {
        print_csv_errors(&parser);
        return ExitCode::from(1);
    }

    parser.parse_csv(handle_strings);

    print_csv_errors(&parser);
    if parser.has_error() {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn print_errors(parser: &Parser) {
    if parser.get_errors().is_empty() {
        return;
    }
    let renderer = DiagnosticRenderer::new(parser.diagnostics(), parser.source_file())
        .with_colors(std::io::stderr().is_terminal());
    let mut stderr = std::io::stderr().lock();
    let _ = renderer.render_all(&mut stderr);
}

fn print_csv_errors(parser: &CsvParser) {
    if parser.get_errors().is_empty() {
        return;
    }
    let renderer = DiagnosticRenderer::new(parser.diagnostics(), parser.source_file())
        .with_colors(std::io::stderr().is_terminal());
    let mut stderr = std::io::stderr().lock();
    let _ = renderer.render_all(&mut stderr);
}
