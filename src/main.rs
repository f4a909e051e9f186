use clap::Parser;

use dotart::cli::{self, Args, CliError, Command};
use dotart::config::Config;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    match &args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref())
        }
        None => {
            let config = Config::load(args.config.as_deref())?;
            cli::run_convert(&args, &config)
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
