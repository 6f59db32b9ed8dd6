//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gundrill_core::resolver::RawJobInput;

/// Gun-drilling standard time calculator
#[derive(Debug, Parser)]
#[command(name = "gundrill", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Engine settings file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Calculation history file
    #[arg(long, global = true, value_name = "FILE", default_value = "gundrill_history.json")]
    pub history_file: PathBuf,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate the standard time for a job
    Calc(CalcArgs),
    /// Enter a job field by field
    Interactive(InteractiveArgs),
    /// Show grinding interval, cutting suggestion and FMJ plan for a grade
    Lookup(LookupArgs),
    /// List known material grades
    Materials(OutputArgs),
    /// List archived calculations, newest first
    History(HistoryArgs),
}

/// Job fields as free text; anything left out resolves to a default
#[derive(Debug, Default, Args)]
pub struct JobArgs {
    #[arg(long, short = 'm', default_value = "")]
    pub material: String,
    /// Drill size in inches (`0.375` or `0.375"`)
    #[arg(long, short = 'd', default_value = "")]
    pub drill_size: String,
    /// Length to drill in inches
    #[arg(long, short = 'l', default_value = "")]
    pub length: String,
    /// Feed rate in in/min
    #[arg(long, default_value = "")]
    pub feed_rate: String,
    #[arg(long, default_value = "")]
    pub rpm: String,
    /// Number of identical features (holes)
    #[arg(long, short = 'n', default_value = "")]
    pub features: String,
    /// Re-grind interval override in inches
    #[arg(long, default_value = "")]
    pub grinding_interval: String,
    /// Add the FMJ port surcharge
    #[arg(long)]
    pub fmj: bool,
    #[arg(long, default_value = "")]
    pub custom_setup_time: String,
    #[arg(long, default_value = "")]
    pub custom_grinding_time: String,
    #[arg(long, default_value = "")]
    pub job_id: String,
    #[arg(long, default_value = "")]
    pub part_name: String,
}

impl JobArgs {
    pub fn to_raw(&self) -> RawJobInput {
        RawJobInput {
            job_id: self.job_id.clone(),
            part_name: self.part_name.clone(),
            material_grade: self.material.clone(),
            drill_size: self.drill_size.clone(),
            length_to_drill: self.length.clone(),
            rpm: self.rpm.clone(),
            feed_rate: self.feed_rate.clone(),
            number_of_features: self.features.clone(),
            grinding_interval_override: self.grinding_interval.clone(),
            include_fmj_port: self.fmj,
            custom_setup_time: self.custom_setup_time.clone(),
            custom_grinding_time: self.custom_grinding_time.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub job: JobArgs,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub run: RunArgs,
}

/// Options shared by commands that run a calculation
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Reject missing or unusable fields instead of substituting defaults
    #[arg(long)]
    pub strict: bool,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Append the result to the history file
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(long, short = 'm')]
    pub material: String,
    /// Drill size in inches (`0.375` or `0.375"`)
    #[arg(long, short = 'd')]
    pub drill_size: Option<String>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only entries for this job id
    #[arg(long)]
    pub job_id: Option<String>,
    /// Show at most this many entries
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
    #[arg(long)]
    pub json: bool,
}
