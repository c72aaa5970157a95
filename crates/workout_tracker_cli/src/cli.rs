use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "workout-tracker")]
#[command(about = "Summarise workouts from raw fitness-tracker sensor packages", long_about = None)]
pub struct Cli {
    /// Packages in the form TAG:v1,v2,... (e.g. RUN:15000,1,75)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// JSON file holding an array of {"tag": ..., "values": [...]} objects
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Measure swimming distance with the stroke length
    #[arg(long)]
    pub swim_stroke_distance: bool,

    /// Print the JSON schema of the input or output format and exit
    #[arg(long, value_enum, value_name = "WHICH")]
    pub print_schema: Option<SchemaKind>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Array accepted by --input
    Packages,
    /// Object printed per workout by --format json
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One formatted summary line per workout
    Text,
    /// One JSON object per workout
    Json,
}
