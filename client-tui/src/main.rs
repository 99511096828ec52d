use clap::Parser;
use client_tui::{config, Config, ThemeName};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Terminal tic-tac-toe with move history and time travel.
#[derive(Parser)]
#[command(name = "tictactoe-tui", version, about)]
struct Cli {
    /// Path to a JSON config file (defaults to <config dir>/tictactoe/config.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the rolling log file.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Colour theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// List history newest first.
    #[arg(long, conflicts_with = "ascending")]
    descending: bool,

    /// List history oldest first, even if the config file says otherwise.
    #[arg(long)]
    ascending: bool,

    /// Status text shown when the board fills without a winner.
    #[arg(long)]
    draw_label: Option<String>,
}

impl Cli {
    fn overrides(self) -> config::Overrides {
        config::Overrides {
            config_path: self.config,
            log_dir: self.log_dir,
            theme: self.theme,
            descending: match (self.descending, self.ascending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            draw_label: self.draw_label,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load(&cli.overrides());
    let config = loaded.config;

    // Set up tracing with file output in the log directory
    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "tictactoe-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        theme = ?config.theme,
        order = ?config.history_order,
        log_dir = %config.log_dir.display(),
        "Tic-tac-toe TUI starting up"
    );

    client_tui::ui::run_app(&config)?;

    tracing::info!("Tic-tac-toe TUI shutting down");
    Ok(())
}
