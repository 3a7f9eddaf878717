//! Counter CLI - launches the counter widget in a window
//!
//! Usage:
//!   counter-app                          Open the counter
//!   counter-app --min 0 --max 30         Open with custom bounds
//!   counter-app attributes --count 50    Print the reconciled attributes
//!   counter-app schema                   Print the editor property schema
//!   counter-app config --write --max 30  Persist flags to the config file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use counter_core::{parse_attribute, reflect, AttributeUpdate, Command, PropertySchema};
use counter_gui::{CounterApp, CounterConfig, CounterSettings};
use tracing::{debug, info};

mod tracing_setup;

#[derive(Parser)]
#[command(name = "counter-app")]
#[command(version = counter_core::VERSION)]
#[command(about = "A bounded counter with plus and minus buttons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    attributes: AttributeArgs,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

/// Host attribute overrides; numeric values go through the same parsing
/// as attributes written by an embedding page
#[derive(Args, Debug, Default)]
struct AttributeArgs {
    /// Starting value
    #[arg(long, global = true, allow_hyphen_values = true)]
    count: Option<String>,

    /// Lowest reachable value
    #[arg(long, global = true, allow_hyphen_values = true)]
    min: Option<String>,

    /// Highest reachable value
    #[arg(long, global = true, allow_hyphen_values = true)]
    max: Option<String>,

    /// Start with the emphasis tint on
    #[arg(long, global = true)]
    fancy: bool,

    /// Heading above the counter (defaults to the localized title)
    #[arg(long, global = true)]
    title: Option<String>,

    /// Locale for the title, e.g. `ar` or `es-MX`
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Text shown under the buttons
    #[arg(long, global = true)]
    slot: Option<String>,
}

impl AttributeArgs {
    /// Flags as attribute writes, in host order
    fn writes(&self) -> Vec<(&'static str, Option<String>)> {
        let mut writes = Vec::new();
        for (name, value) in [("count", &self.count), ("min", &self.min), ("max", &self.max)] {
            if let Some(value) = value {
                writes.push((name, Some(value.clone())));
            }
        }
        if self.fancy {
            writes.push(("fancy", Some(String::new())));
        }
        if let Some(title) = &self.title {
            writes.push(("title", Some(title.clone())));
        }
        writes
    }

    /// Store the flags in a configuration. Unlike a boot, an invalid value
    /// is an error here rather than being ignored.
    fn merge_into(&self, config: &mut CounterConfig) -> Result<()> {
        let section = &mut config.counter;
        for (name, value) in self.writes() {
            let update = parse_attribute(name, value.as_deref()).with_context(|| format!("Invalid --{name}"))?;
            match update {
                AttributeUpdate::Command(Command::SetValue(count)) => section.count = Some(count),
                AttributeUpdate::Command(Command::SetMin(min)) => section.min = Some(min),
                AttributeUpdate::Command(Command::SetMax(max)) => section.max = Some(max),
                AttributeUpdate::Command(Command::SetEmphasis(fancy)) => section.fancy = fancy,
                AttributeUpdate::Command(Command::Increment | Command::Decrement) => {}
                AttributeUpdate::Title(title) => section.title = Some(title),
            }
        }
        if let Some(slot) = &self.slot {
            section.slot = Some(slot.clone());
        }
        if let Some(locale) = &self.locale {
            config.theme.locale = Some(locale.clone());
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the editor property schema as JSON
    Schema,

    /// Reconcile the configured attributes and print them without opening a window
    Attributes,

    /// Print the configuration with the flags applied
    Config {
        /// Save it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

/// Merge the configuration file and command-line flags into boot settings
fn resolve_settings(cli: &Cli) -> Result<CounterSettings> {
    let config = match &cli.config {
        Some(path) => CounterConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CounterConfig::load(),
    };

    let mut settings = CounterSettings::from_config(&config).context("Invalid configuration")?;

    for (name, value) in cli.attributes.writes() {
        settings = settings.with_attribute(name, value);
    }
    if let Some(locale) = &cli.attributes.locale {
        settings = settings.with_locale(locale.clone());
    }
    if let Some(slot) = &cli.attributes.slot {
        settings.slot = Some(slot.clone());
    }

    debug!(attributes = ?settings.attributes, "resolved settings");
    Ok(settings)
}

/// Configuration file contents with the command-line flags merged in.
/// When writing, a missing explicit file starts from defaults.
fn effective_config(cli: &Cli, write: bool) -> Result<CounterConfig> {
    let mut config = match &cli.config {
        Some(path) if write && !path.exists() => CounterConfig::default(),
        Some(path) => CounterConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CounterConfig::load(),
    };
    cli.attributes.merge_into(&mut config)?;
    Ok(config)
}

/// Lines printed by the `attributes` command
fn attribute_report(settings: CounterSettings) -> Vec<String> {
    let (app, _) = CounterApp::new(settings);

    let mut lines: Vec<String> = reflect(app.widget().state())
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| if v.is_empty() { name.to_string() } else { format!("{name}={v}") }))
        .collect();
    lines.push(format!("title={}", app.display_title()));
    lines
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Some(Commands::Schema) => {
            let json = PropertySchema::counter()
                .to_json()
                .context("Failed to serialize property schema")?;
            println!("{json}");
        }

        Some(Commands::Attributes) => {
            for line in attribute_report(resolve_settings(&cli)?) {
                println!("{line}");
            }
        }

        Some(Commands::Config { write }) => {
            let config = effective_config(&cli, write)?;
            if write {
                match &cli.config {
                    Some(path) => config.save_to(path),
                    None => config.save(),
                }
                .context("Failed to write config")?;
                info!("configuration written");
            }
            print!("{}", config.to_toml().context("Failed to serialize config")?);
        }

        None => {
            let settings = resolve_settings(&cli)?;
            counter_gui::run(settings).context("Counter window failed")?;
        }
    }

    Ok(())
}
