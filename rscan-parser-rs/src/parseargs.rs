use std::process::exit;

use getopts::Options;

use crate::constants::{DEFAULT_SCALE, DEFAULT_STEP_ANGLE_DEG};
use crate::faces::FaceWinding;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutType {
    Obj,
    Ply,
    Csv,
    Pcd,
}

impl OutType {
    pub fn extension(&self) -> &'static str {
        match self {
            OutType::Obj => "obj",
            OutType::Ply => "ply",
            OutType::Csv => "csv",
            OutType::Pcd => "pcd",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Args {
    pub input: String,
    pub out_type: OutType,
    pub out_dir: Option<String>,
    pub object_name: Option<String>,
    pub scale: f64,
    pub step_angle_deg: f64,
    pub winding: FaceWinding,
    pub allow_partial: bool,
    pub build: bool,
    pub quiet: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("o", "output", "output type", "obj|ply|csv|pcd");
    opts.optopt("d", "out-dir", "output directory (default: next to the input)", "DIR");
    opts.optopt("n", "name", "object name", "NAME");
    opts.optopt("s", "scale", "sample to distance factor (default 0.01)", "F");
    opts.optopt("a", "step-angle", "angle of one step in degrees (default 1.8)", "DEG");
    opts.optflag("l", "legacy-winding", "use the legacy face index formula (flips odd lines)");
    opts.optflag("p", "partial", "accept scans that stopped before the last line");
    opts.optflag("b", "build", "attach a build order revealing faces over time");
    opts.optflag("q", "quiet", "hide the progress bar");
    opts.optflag("h", "help", "print this help menu");
    opts
}

/// Parses the command line, or explains why it cannot.
pub fn try_parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let opts = options();
    let matches = opts.parse(args).map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        return Ok(None);
    }
    let input = matches.free.first().cloned().ok_or("missing input file")?;

    let out_type = match matches.opt_str("o").as_deref() {
        None | Some("obj") => OutType::Obj,
        Some("ply") => OutType::Ply,
        Some("csv") => OutType::Csv,
        Some("pcd") => OutType::Pcd,
        Some(other) => return Err(format!("unknown output type: {}", other)),
    };
    let scale = parse_number(matches.opt_str("s"), "scale", DEFAULT_SCALE)?;
    let step_angle_deg = parse_number(matches.opt_str("a"), "step-angle", DEFAULT_STEP_ANGLE_DEG)?;
    let object_name = matches.opt_str("n");
    if let Some(name) = &object_name {
        if name.is_empty() || name.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(format!("invalid object name: {:?}", name));
        }
    }
    let winding = if matches.opt_present("l") {
        FaceWinding::Legacy
    } else {
        FaceWinding::Consistent
    };

    Ok(Some(Args {
        input,
        out_type,
        out_dir: matches.opt_str("d"),
        object_name,
        scale,
        step_angle_deg,
        winding,
        allow_partial: matches.opt_present("p"),
        build: matches.opt_present("b"),
        quiet: matches.opt_present("q"),
    }))
}

fn parse_number(value: Option<String>, name: &str, default: f64) -> Result<f64, String> {
    match value {
        None => Ok(default),
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(format!("invalid {}: {}", name, v)),
        },
    }
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
    print!("{}", options().usage(format!("Usage: {} [options] <input>", command_prefix).as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let parsed = try_parse_args(&args(&["scan.dat"])).unwrap().unwrap();
        assert_eq!(parsed.input, "scan.dat");
        assert_eq!(parsed.out_type, OutType::Obj);
        assert_eq!(parsed.scale, 0.01);
        assert_eq!(parsed.step_angle_deg, 1.8);
        assert_eq!(parsed.winding, FaceWinding::Consistent);
        assert!(!parsed.allow_partial && !parsed.build && !parsed.quiet);
        assert!(parsed.out_dir.is_none() && parsed.object_name.is_none());
    }

    #[test]
    fn all_options() {
        let parsed = try_parse_args(&args(&[
            "-o", "ply", "-d", "out", "-n", "room", "-s", "0.001", "-a", "0.9", "-l", "-p", "-b", "-q", "scan.dat",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(parsed.out_type, OutType::Ply);
        assert_eq!(parsed.out_dir.as_deref(), Some("out"));
        assert_eq!(parsed.object_name.as_deref(), Some("room"));
        assert_eq!(parsed.scale, 0.001);
        assert_eq!(parsed.step_angle_deg, 0.9);
        assert_eq!(parsed.winding, FaceWinding::Legacy);
        assert!(parsed.allow_partial && parsed.build && parsed.quiet);
    }

    #[test]
    fn help_and_errors() {
        assert!(try_parse_args(&args(&["-h"])).unwrap().is_none());
        assert!(try_parse_args(&args(&[])).is_err());
        assert!(try_parse_args(&args(&["-o", "stl", "scan.dat"])).is_err());
        assert!(try_parse_args(&args(&["-s", "abc", "scan.dat"])).is_err());
        assert!(try_parse_args(&args(&["-s", "inf", "scan.dat"])).is_err());
    }

    #[test]
    fn object_name_cannot_break_records() {
        assert!(try_parse_args(&args(&["-n", "room\nv 0 0 0", "scan.dat"])).is_err());
        assert!(try_parse_args(&args(&["-n", "two words", "scan.dat"])).is_err());
        assert!(try_parse_args(&args(&["-n", "", "scan.dat"])).is_err());
        assert!(try_parse_args(&args(&["-n", "room_2", "scan.dat"])).is_ok());
    }

    #[test]
    fn extensions() {
        assert_eq!(OutType::Obj.extension(), "obj");
        assert_eq!(OutType::Pcd.extension(), "pcd");
    }
}
