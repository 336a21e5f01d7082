use clap::Parser;
use log::LevelFilter;
use rand::{SeedableRng, rngs::StdRng};
use referee::{Config, run_match};
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use std::{
    error::Error,
    fs::{self, File},
    path::PathBuf,
    process::ExitCode,
};

#[derive(Parser, Debug)]
struct Args {
    config: PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_text = fs::read_to_string(&args.config)?;
    let config = Config::from_toml(&config_text)?;
    let config_dir = args
        .config
        .parent()
        .ok_or("Config file has no parent directory")?;

    let log_path = config_dir.join(&config.log);
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir)?;
    }
    let log_file = File::create(log_path)?;

    CombinedLogger::init(vec![
        WriteLogger::new(LevelFilter::Debug, simplelog::Config::default(), log_file),
        TermLogger::new(
            LevelFilter::Info,
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    ])?;

    run_matches(&config)?;
    Ok(())
}

fn run_matches(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::from_os_rng();

    for (match_idx, match_config) in config.r#match.iter().enumerate() {
        let match_id = format!("{match_idx}");
        log::info!(
            "Match {match_id}: {} vs {}",
            match_config.players[0],
            match_config.players[1]
        );

        let match_result = run_match(
            &match_id,
            match_config.num_games,
            config.num_threads,
            match_config.max_plies,
            config.weights(match_config),
            &mut rng,
        );
        log::info!("{match_result}");
    }
    Ok(())
}
