use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fieldmask_core::AbstractTypePolicy;

#[derive(Parser)]
#[command(name = "fieldmask")]
#[command(about = "Compute the field mask paths a GraphQL query selects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "FIELDMASK_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON array
    #[default]
    Json,
    /// One entry per line
    Lines,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AbstractTypes {
    /// Interface and union typed fields contribute nothing
    Omit,
    /// Expand every possible type, prefixed with its name
    PerPossibleType,
}

impl From<AbstractTypes> for AbstractTypePolicy {
    fn from(value: AbstractTypes) -> Self {
        match value {
            AbstractTypes::Omit => Self::Omit,
            AbstractTypes::PerPossibleType => Self::PerPossibleType,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the field mask paths selected below a field
    Paths(PathsArgs),
    /// List object types, or the possible types of an interface or union
    Types(TypesArgs),
}

#[derive(clap::Args)]
pub struct PathsArgs {
    /// Path to the schema SDL file
    #[arg(long)]
    pub schema: PathBuf,
    /// Path to the query document
    #[arg(long)]
    pub query: PathBuf,
    /// Response path of the field, dot separated (e.g. viewer.friends)
    #[arg(long)]
    pub field: String,
    /// Object type the field resolves to
    #[arg(long = "type")]
    pub type_name: String,
    /// Operation name, required when the document has several operations
    #[arg(long)]
    pub operation: Option<String>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the configured handling of interface and union fields
    #[arg(long)]
    pub abstract_types: Option<AbstractTypes>,
    /// Drop repeated paths
    #[arg(long)]
    pub dedup: bool,
    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(clap::Args)]
pub struct TypesArgs {
    /// Path to the schema SDL file
    #[arg(long)]
    pub schema: PathBuf,
    /// Interface or union whose possible types to list
    #[arg(long = "type")]
    pub type_name: Option<String>,
    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,
}
