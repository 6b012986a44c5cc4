//! Vendfsm CLI
//!
//! Runs the vending machine controller over scripted or random input and
//! prints each notice on stdout.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use vendfsm::config::{InputMode, LogFormat, RunConfig};
use vendfsm::machine::Controller;
use vendfsm::output::ConsoleSink;
use vendfsm::Error;

#[derive(Parser)]
#[command(
    name = "vendfsm",
    about = "Event-driven vending machine controller",
    version
)]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read inputs from a script (tokens separated by ';', ',' or whitespace)
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    script: Option<PathBuf>,

    /// Generate random inputs
    #[arg(long)]
    random: bool,

    /// Seed for random input
    #[arg(long)]
    seed: Option<u64>,

    /// Random inputs before the machine is stopped
    #[arg(long, value_name = "N")]
    max_inputs: Option<usize>,

    /// Log filter, e.g. "info" or "vendfsm::machine=trace"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Print the final controller snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

impl Cli {
    fn into_config(self) -> vendfsm::Result<(RunConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_path(path)?,
            None => RunConfig::default(),
        };

        if let Some(path) = self.script {
            config.input = InputMode::Script;
            config.script = Some(path);
        }
        if self.random {
            config.input = InputMode::Random;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max) = self.max_inputs {
            config.max_inputs = max;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }

        Ok((config, self.snapshot))
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> vendfsm::Result<()> {
    let (config, snapshot) = cli.into_config()?;
    config.validate()?;
    vendfsm::logging::init(&config.log)?;

    let mut source = config.input_source()?;
    let mut controller = Controller::with_history_limit(ConsoleSink::stdout(), config.history_limit);
    let processed = controller.run(source.as_mut())?;

    let sink = controller.sink_mut();
    if let Some(source) = sink.take_error() {
        return Err(Error::Output {
            failures: sink.failures(),
            source,
        });
    }

    info!(
        processed,
        transitions = controller.history().len(),
        "machine halted"
    );

    if snapshot {
        println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    }
    Ok(())
}
