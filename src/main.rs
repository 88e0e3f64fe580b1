use linkcost::billing::{
    compute,
    format::{render_explanation, render_report},
};
use linkcost::cli::Cli;
use linkcost::config::{Config, ConfigLoader, InputData, OutputFormat};
use linkcost::debug_println;
use linkcost::session::Session;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let config_path = cli.config.as_deref();

    // Handle configuration commands
    if cli.init {
        Config::init(config_path)?;
        return Ok(());
    }

    if cli.print {
        let config = ConfigLoader::load_effective(config_path);
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_path(path)?,
            None => Config::load()?,
        };
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Defaults < config file < env < stdin < --set
    let mut config = ConfigLoader::load_effective(config_path);

    let input = if cli.stdin {
        let stdin = io::stdin();
        Some(serde_json::from_reader::<_, InputData>(stdin.lock())?)
    } else {
        None
    };
    config.apply_overrides(input.as_ref(), &cli.set)?;

    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.explain {
        config.output.explain = true;
    }

    if cli.interactive {
        let mut session = Session::new(config.contract, config.usage);
        let stdin = io::stdin();
        session.run_interactive(stdin.lock(), io::stdout().lock())?;
        return Ok(());
    }

    let breakdown = compute(&config.contract, &config.usage);
    debug_println!("compute: {:?}", breakdown);

    match config.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        OutputFormat::Text => {
            println!("{}", render_report(&config.contract, &config.usage, &breakdown));
            if config.output.explain {
                println!();
                println!("{}", render_explanation(&config.contract, &config.usage));
            }
        }
    }

    Ok(())
}
