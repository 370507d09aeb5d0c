use std::process::exit;
use std::str::FromStr;

use getopts::{Matches, Options};

use crate::MockConfig;

pub struct Args {
    pub output: String,
    pub config: MockConfig,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("l", "lines", "number of scan lines (default 30)", "N");
    opts.optopt("p", "points", "points per line (default 60)", "N");
    opts.optopt("m", "mean", "mean raw sample (default 1000)", "F");
    opts.optopt("s", "std-dev", "standard deviation of samples (default 25)", "F");
    opts.optopt("", "seed", "random seed (default 0)", "N");
    opts.optflag("h", "help", "print this help menu");
    opts
}

fn opt_value<T: FromStr>(matches: &Matches, name: &str, default: T) -> Result<T, String> {
    match matches.opt_str(name) {
        None => Ok(default),
        Some(v) => v.parse::<T>().map_err(|_| format!("invalid {}: {}", name, v)),
    }
}

pub fn try_parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let matches = options().parse(args).map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        return Ok(None);
    }
    let output = matches.free.first().cloned().ok_or("missing output file")?;

    let defaults = MockConfig::default();
    let config = MockConfig {
        line_count: opt_value(&matches, "lines", defaults.line_count)?,
        point_count: opt_value(&matches, "points", defaults.point_count)?,
        mean: opt_value(&matches, "mean", defaults.mean)?,
        std_dev: opt_value(&matches, "std-dev", defaults.std_dev)?,
        seed: opt_value(&matches, "seed", defaults.seed)?,
        ..defaults
    };
    Ok(Some(Args { output, config }))
}

pub fn parse_args(command_prefix: &str, args: &[String]) -> Args {
    match try_parse_args(args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_help(command_prefix);
            exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            print_help(command_prefix);
            exit(2);
        }
    }
}

fn print_help(command_prefix: &str) {
    print!("{}", options().usage(format!("Usage: {} [options] <output>", command_prefix).as_str()));
}
