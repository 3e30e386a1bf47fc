// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process;

use pico_args::Arguments;
use xaml2svg::{Indent, LogSink, Options, WriteOptions};

const HELP: &str = "\
xaml2svg converts WPF DrawingImage icons into SVG files.

Every DrawingImage with a key that ends with an icon size
(8, 12, 16, 24, 32, 48, 64, 96 or 128) is written as <out-dir>/<key>.svg.

USAGE:
  xaml2svg [OPTIONS] <in-xaml> <out-dir>

OPTIONS:
  -h, --help                    Prints help information
  -V, --version                 Prints version information

  --indent INDENT               Sets the XML nodes indent
                                [values: none, 0, 1, 2, 3, 4, tabs] [default: 2]
  --attrs-indent INDENT         Sets the XML attributes indent
                                [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --fallback-color COLOR        Sets the color used instead of unsupported brushes
                                [default: red]

  --quiet                       Disables warnings

ARGS:
  <in-xaml>                     Input file
  <out-dir>                     Output directory. Created when missing
";

#[derive(Debug)]
struct Args {
    indent: Indent,
    attrs_indent: Indent,
    fallback_color: String,

    quiet: bool,

    input: PathBuf,
    output: PathBuf,
}

fn collect_args() -> Result<Args, String> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let args = parse_args(&mut input).map_err(|e| e.to_string())?;

    let rest = input.finish();
    if !rest.is_empty() {
        return Err(format!("unexpected arguments: {:?}", rest));
    }

    Ok(args)
}

fn parse_args(input: &mut Arguments) -> Result<Args, pico_args::Error> {
    Ok(Args {
        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(Indent::Spaces(2)),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)?
            .unwrap_or(Indent::None),
        fallback_color: input
            .opt_value_from_str("--fallback-color")?
            .unwrap_or_else(|| "red".to_string()),

        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.free_from_str()?,
    })
}

fn parse_indent(s: &str) -> Result<Indent, String> {
    let indent = match s {
        "none" => Indent::None,
        "0" => Indent::Spaces(0),
        "1" => Indent::Spaces(1),
        "2" => Indent::Spaces(2),
        "3" => Indent::Spaces(3),
        "4" => Indent::Spaces(4),
        "tabs" => Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

fn check_args(args: &Args) -> Result<(), String> {
    if !args.input.is_file() {
        return Err(format!("'{}' is not a file", args.input.display()));
    }

    let is_xaml = args
        .input
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("xaml"));
    if !is_xaml {
        return Err(format!("'{}' is not a XAML file", args.input.display()));
    }

    if args.output.is_file() {
        return Err(format!("'{}' is a file", args.output.display()));
    }

    Ok(())
}

fn main() {
    let args = match collect_args().and_then(|args| check_args(&args).map(|_| args)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.\n", e);
            eprint!("{}", HELP);
            process::exit(2);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), xaml2svg::Error> {
    let opt = Options {
        fallback_color: args.fallback_color,
        ..Options::default()
    };

    let wopt = WriteOptions {
        indent: args.indent,
        attributes_indent: args.attrs_indent,
        ..WriteOptions::default()
    };

    let paths = xaml2svg::convert_file(&args.input, &args.output, &opt, &wopt, &mut LogSink)?;
    log::info!("Written {} files.", paths.len());

    Ok(())
}

/// A simple stdout/stderr logger.
///
/// Warnings are diagnostics, so they are printed to stdout.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error: {}", args),
                log::Level::Warn => println!("Warning: {}", args),
                log::Level::Info => println!("Info: {}", args),
                log::Level::Debug => println!("Debug: {}", args),
                log::Level::Trace => println!("Trace: {}", args),
            }
        }
    }

    fn flush(&self) {}
}
