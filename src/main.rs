use bonjour::{
    cli::{get_log_level_from_verbose, run, Args},
    error::default_error_handler,
};
use clap::Parser;

fn main() {
    let args = Args::parse();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
