use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "gentables",
    version,
    about = "Extract tables from pipe-delimited model output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Check(CheckArgs),
    Config(ConfigArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Records,
    Markdown,
    Csv,
    Pipe,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Records => "records",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::Pipe => "pipe",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Raw model response; `-` reads stdin.
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Fail on the first table whose rows disagree with its header.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Info string carried in the `records` payload.
    #[arg(long, default_value = "")]
    pub info: String,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(long, default_value = "gentables.json")]
    pub output: PathBuf,

    #[arg(long, default_value_t = false)]
    pub force: bool,
}
