use rscan_parser_rs::{parseargs::parse_args, run::run};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args("rscan-parser-rs", &args[1..]);
    if let Err(e) = run(args) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
