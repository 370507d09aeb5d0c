use std::path::Path;

use rscan_mock_rs::{generate_scan, parseargs::parse_args, write_scan};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args("rscan-mock-rs", &args[1..]);
    let result = generate_scan(&args.config).and_then(|scan| write_scan(&scan, Path::new(&args.output)));
    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
