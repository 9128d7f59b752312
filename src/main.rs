//! mcformat - compose Minecraft color and format codes in the terminal.
//!
//! # Usage
//!
//! ```bash
//! mcformat "&4Hello &lworld"
//! mcformat --notation bedrock
//! echo "&aGreen" | mcformat --html
//! mcformat --codes
//! ```

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mcformat::app::App;
use mcformat::codes;
use mcformat::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use mcformat::markup;
use mcformat::notation::Notation;
use mcformat::perf;
use mcformat::theme;

/// Compose Minecraft color and format codes with a live preview
#[derive(Parser, Debug)]
#[command(name = "mcformat", version, about, long_about = None)]
struct Cli {
    /// Initial text, using & or § codes
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Escape character emitted by the palette (java = &, bedrock = §)
    #[arg(long, value_enum)]
    notation: Option<Notation>,

    /// Color theme (auto queries the terminal background)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Close five spans on every reset, as older generators did
    #[arg(long)]
    legacy_reset: bool,

    /// HTML-escape literal text in generated markup
    #[arg(long)]
    escape_html: bool,

    /// Print the markup for TEXT (or stdin) and exit
    #[arg(long)]
    html: bool,

    /// Print the code table as JSON and exit
    #[arg(long, conflicts_with = "html")]
    codes: bool,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed render and event debug lines to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The saveable subset of the command line.
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            theme: self.theme,
            notation: self.notation,
            legacy_reset: self.legacy_reset,
            escape_html: self.escape_html,
            perf: self.perf,
            render_debug_log: self.render_debug_log.clone(),
        }
    }
}

fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("MCFORMAT_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize render debug log {}: {}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    if cli.codes {
        println!("{}", codes::table_json().context("Failed to serialize code table")?);
        return Ok(());
    }

    let options = effective.render_options();
    if cli.html {
        let _scope = perf::scope("cli.html");
        let source = read_input(cli.text)?;
        println!("{}", markup::render_with(&source, options));
        return Ok(());
    }

    let theme = theme::resolve(effective.theme.unwrap_or(ThemeMode::Auto));

    // Run the application
    let mut app = App::new(cli.text.unwrap_or_default())
        .with_notation(effective.notation.unwrap_or_default())
        .with_theme(theme)
        .with_render_options(options);

    app.run().context("Application error")
}
