// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let opt = favicon_gen::Options::default();

    let paths = favicon_gen::load_paths(&args.in_svg).map_err(|e| e.to_string())?;
    let pixmap = favicon_gen::render(&paths, &opt).map_err(|e| e.to_string())?;
    favicon_gen::save_png(&pixmap, &args.out_png).map_err(|e| e.to_string())
}

const HELP: &str = "\
favicon-gen rasterizes the stroked outline of an SVG icon into a PNG favicon.

USAGE:
  favicon-gen [OPTIONS] [<in-svg>] [<out-png>]

  favicon-gen
  favicon-gen icon.svg favicon.png

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  --quiet                       Disables warnings

ARGS:
  <in-svg>                      Input file
                                [default: src/app/icon.svg]
  <out-png>                     Output file
                                [default: src/app/favicon.png]
";

#[derive(Debug)]
struct CliArgs {
    quiet: bool,

    input: Option<path::PathBuf>,
    output: Option<path::PathBuf>,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let args = CliArgs {
        quiet:  input.contains("--quiet"),

        input:  input.opt_free_from_str()?,
        output: input.opt_free_from_str()?,
    };

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {:?}", remaining),
        });
    }

    Ok(args)
}

struct Args {
    in_svg: path::PathBuf,
    out_png: path::PathBuf,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    let in_svg = args
        .input
        .unwrap_or_else(|| path::PathBuf::from(favicon_gen::DEFAULT_INPUT));
    let out_png = args
        .output
        .unwrap_or_else(|| path::PathBuf::from(favicon_gen::DEFAULT_OUTPUT));

    Ok(Args {
        in_svg,
        out_png,
        quiet: args.quiet,
    })
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
