use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect_model, predict_offline, serve};

#[derive(Parser)]
#[command(name = "previsor")]
#[command(about = "Temperature forecast service over a pre-trained model")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the serialized model definition (JSON)
        ///
        /// The model is loaded once at startup; a missing or malformed file
        /// aborts startup before the server binds.
        #[arg(short, long, env = "MODEL_PATH", default_value = "modelo_temp_prophet.json")]
        model_path: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load a model definition and log its summary
    Inspect {
        /// Path to the serialized model definition (JSON)
        #[arg(short, long, env = "MODEL_PATH", default_value = "modelo_temp_prophet.json")]
        model_path: String,
    },
    /// Run a one-shot forecast and emit the CSV export
    ///
    /// Runs the same extend/predict/slice/format pipeline as the server,
    /// without starting it.
    Predict {
        /// Path to the serialized model definition (JSON)
        #[arg(short, long, env = "MODEL_PATH", default_value = "modelo_temp_prophet.json")]
        model_path: String,

        /// Forecast horizon in days (values below 1 are clamped to 1)
        #[arg(short, long, default_value_t = 1)]
        days: i64,

        /// Write the CSV to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { model_path, bind_address } => {
                serve(&model_path, &bind_address).await?;
            }
            Commands::Inspect { model_path } => {
                inspect_model(&model_path)?;
            }
            Commands::Predict { model_path, days, output } => {
                predict_offline(&model_path, days, output.as_deref())?;
            }
        }
        Ok(())
    }
}
