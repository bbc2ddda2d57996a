// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "fast-billboards")]
#[command(about = "Free-fly billboard camera, replayed from recorded input", long_about = None)]
pub struct Cli {
    /// JSON config file; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON input script: a list of frames, each a list of input events
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Override the resource directory from the config
    #[arg(long = "res-dir")]
    pub res_dir: Option<PathBuf>,

    /// Skip printing the JSON report
    #[arg(long = "no-report", default_value = "false")]
    pub no_report: bool,
}
