use clap::Parser;

use crate::application::data::LogLevel;

/// Converts the service tree to the 2015-style module layout and the common
/// tree to the 2018-style layout. The conversion itself takes no arguments:
/// both root paths are fixed.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
