//! navtoggle - two-section terminal page driven by navigation triggers.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use navtoggle::script::{format_snapshot, parse_sequence, require_non_empty, run_script};
use navtoggle::ui::TerminalUI;
use navtoggle::{AppConfig, Application, PageTree};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("navtoggle")
        .version(navtoggle::VERSION)
        .about("A terminal page with VM and NES sections toggled from a navigation bar")
        .long_about(
            "navtoggle shows a navigation bar with two triggers. Activating VM toggles the \
             welcome section's visibility; activating NES removes the welcome section and \
             toggles the NES section in and out of the layout.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (defaults to <config_dir>/navtoggle/config.toml)"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome or high-contrast"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Write logs to a file instead of stderr"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_name("SEQUENCE")
                .help("Run triggers headlessly (e.g. \"vm,nes\") and print the final state"),
        )
        .arg(
            Arg::new("dump-config")
                .long("dump-config")
                .action(ArgAction::SetTrue)
                .conflicts_with("script")
                .help("Print the effective configuration as TOML and exit"),
        )
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<AppConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = AppConfig::load(path.map(PathBuf::as_path))?;
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.clone();
        config.validate()?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.get_one::<PathBuf>("log-file"))?;
    let config = load_config(&matches)?;

    if matches.get_flag("dump-config") {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Some(sequence) = matches.get_one::<String>("script") {
        let triggers = require_non_empty(parse_sequence(sequence)?)?;
        let snapshot = run_script(PageTree::from_config(&config), &triggers)?;
        print!("{}", format_snapshot(&snapshot));
        return Ok(());
    }

    let ui_renderer = Box::new(TerminalUI::with_theme(config.color_theme()?)?);
    let mut app = Application::new(&config, ui_renderer)?;
    app.run().await?;

    Ok(())
}
