use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use feint_cli::{CliContext, commands, logging, readline};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let ctx = CliContext::new();
    commands::greet(&ctx).await;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "staged error dialog shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add a scenario to the playback list
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        message: String,
        /// info, warning or error
        #[arg(long, default_value = "info")]
        icon: String,
        /// ok, ok-cancel or yes-no
        #[arg(long, default_value = "ok")]
        buttons: String,
        /// Milliseconds to wait before the dialog appears (default 1000)
        #[arg(long)]
        delay_ms: Option<String>,
    },
    /// Remove the scenario at a position (1-based)
    Remove {
        #[arg(short, long)]
        position: usize,
    },
    /// Change the delay of the scenario at a position
    SetDelay {
        #[arg(short, long)]
        position: usize,
        #[arg(long)]
        delay_ms: String,
    },
    /// Show the scenario list in presentation order
    List,
    /// Play every scenario in order
    Run,
    /// Hide the shell while scenarios run
    HideWindow { state: Toggle },
    /// Loop a custom sound during runs
    UseSound { state: Toggle },
    /// Pick the sound file to loop
    SelectSound {
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Playback volume, 0-100
    Volume { level: u8 },
    /// Switch the UI language (no argument toggles)
    Language { language: Option<String> },
    /// Show current settings
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "feint".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Add {
            title,
            message,
            icon,
            buttons,
            delay_ms,
        }) => commands::add_scenario(ctx, title, message, icon, buttons, delay_ms).await?,
        Some(Commands::Remove { position }) => commands::remove_scenario(ctx, position).await?,
        Some(Commands::SetDelay { position, delay_ms }) => {
            commands::set_delay(ctx, position, delay_ms).await?
        }
        Some(Commands::List) => commands::list_scenarios(ctx).await?,
        Some(Commands::Run) => commands::run_scenarios(ctx).await?,
        Some(Commands::HideWindow { state }) => {
            commands::set_hide_window(ctx, state.is_on()).await?
        }
        Some(Commands::UseSound { state }) => commands::set_use_sound(ctx, state.is_on()).await?,
        Some(Commands::SelectSound { path }) => commands::select_sound(ctx, path).await?,
        Some(Commands::Volume { level }) => commands::set_volume(ctx, level).await?,
        Some(Commands::Language { language }) => commands::set_language(ctx, language).await?,
        Some(Commands::Config) => commands::show_config(ctx).await?,
        Some(Commands::Exit) => {
            commands::exit(ctx).await;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
