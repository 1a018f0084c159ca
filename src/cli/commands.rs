use clap::{Parser, Subcommand};

use crate::pattern::{Params, Pattern};

#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Waymark path pattern CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a path against a pattern and print extracted parameters as JSON
    Match {
        /// Pattern text, e.g. "/products(/<id>) i"
        pattern: String,

        /// Concrete path to match
        path: String,
    },
    /// Render a concrete path from a pattern and parameter values
    Build {
        /// Pattern text
        pattern: String,

        /// JSON object mapping parameter names to values or value arrays
        #[arg(short, long, default_value = "{}")]
        values: String,
    },
    /// Parse a pattern and print its canonical serialization
    Print {
        /// Pattern text
        pattern: String,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Match { pattern, path } => {
            let pattern = Pattern::new(pattern)?;
            match pattern.match_path(path) {
                Some(params) => println!("{}", serde_json::to_string_pretty(&params)?),
                None => {
                    eprintln!("no match");
                    std::process::exit(1);
                }
            }
        }
        Commands::Build { pattern, values } => {
            let pattern = Pattern::new(pattern)?;
            let values: Params = serde_json::from_str(values)?;
            println!("{}", pattern.build(&values));
        }
        Commands::Print { pattern } => {
            println!("{}", Pattern::new(pattern)?);
        }
    }
    Ok(())
}
