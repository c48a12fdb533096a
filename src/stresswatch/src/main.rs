#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use stresswatch::{
    StressMonitor, VitalSigns,
    algos::{random_quote, suggestions_for_label},
    model::{ArtifactPaths, ModelClassifier},
    types::Reading,
};

#[derive(Parser)]
#[command(name = "stresswatch", version, about = "Stress level check from SpO₂ and heart rate")]
pub struct StressWatchCli {
    /// Directory holding stress_model.json, scaler.json and label_encoder.json
    #[arg(env = "STRESSWATCH_MODEL_DIR", long, default_value = "models")]
    pub model_dir: PathBuf,
    #[arg(env = "STRESSWATCH_MODEL", long)]
    pub model: Option<PathBuf>,
    #[arg(env = "STRESSWATCH_SCALER", long)]
    pub scaler: Option<PathBuf>,
    #[arg(env = "STRESSWATCH_LABEL_ENCODER", long)]
    pub label_encoder: Option<PathBuf>,
    #[clap(subcommand)]
    pub subcommand: StressWatchCommand,
}

#[derive(clap::Args, Clone, Copy, Debug)]
pub struct ReadingArgs {
    /// SpO₂ (%)
    #[arg(long, default_value_t = Reading::DEFAULT_SPO2, value_parser = clap::value_parser!(u8).range(40..=100))]
    pub spo2: u8,
    /// Heart rate (BPM)
    #[arg(long, default_value_t = Reading::DEFAULT_HEART_RATE, value_parser = clap::value_parser!(u8).range(30..=200))]
    pub heart_rate: u8,
}

impl From<ReadingArgs> for Reading {
    fn from(args: ReadingArgs) -> Self {
        Reading::new(f64::from(args.spo2), f64::from(args.heart_rate))
    }
}

#[derive(Subcommand)]
pub enum StressWatchCommand {
    ///
    /// Predict stress level and evaluate oxygen and heartbeat
    ///
    Predict {
        #[command(flatten)]
        reading: ReadingArgs,
        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
        /// Skip the motivational quote
        #[arg(long)]
        no_quote: bool,
    },
    ///
    /// Evaluate oxygen and heartbeat without loading the model
    ///
    Evaluate {
        #[command(flatten)]
        reading: ReadingArgs,
    },
    ///
    /// Print suggested activities for a stress label
    ///
    Suggest { label: String },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

impl StressWatchCli {
    fn artifact_paths(&self) -> ArtifactPaths {
        let defaults = ArtifactPaths::in_dir(&self.model_dir);
        ArtifactPaths {
            model: self.model.clone().unwrap_or(defaults.model),
            scaler: self.scaler.clone().unwrap_or(defaults.scaler),
            label_encoder: self.label_encoder.clone().unwrap_or(defaults.label_encoder),
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        eprintln!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = StressWatchCli::parse();

    match cli.subcommand {
        StressWatchCommand::Predict {
            reading,
            json,
            no_quote,
        } => {
            let paths = cli.artifact_paths();
            let classifier = ModelClassifier::load(&paths)
                .with_context(|| format!("Loading model artifacts from {:?}", paths))?;
            let monitor = StressMonitor::new(classifier);

            let assessment = monitor.assess(reading.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                if !no_quote {
                    println!("{}\n", random_quote(&mut rand::rng()));
                }
                println!("{}", assessment);
            }

            Ok(())
        }
        StressWatchCommand::Evaluate { reading } => {
            let reading: Reading = reading.into();
            info!("Evaluating {:?}", reading);
            println!("{}", VitalSigns::evaluate(&reading));
            Ok(())
        }
        StressWatchCommand::Suggest { label } => {
            for tip in suggestions_for_label(&label) {
                println!("- {}", tip);
            }
            Ok(())
        }
        StressWatchCommand::Completions { shell } => {
            let mut command = StressWatchCli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
