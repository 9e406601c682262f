use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::layout::ConvertError;
use crate::layout::flatten_module_files;
use crate::layout::nest_module_files;

pub struct Application;

impl Application {
    /// Runs both conversion passes in order: the service tree is nested into
    /// the 2015-style layout, then the common tree is flattened into the
    /// 2018-style layout. A failed move aborts the run; moves already
    /// performed are not rolled back.
    pub fn run() -> Result<(), ApplicationError> {
        let config = RuntimeConfig::default();
        debug!("Using config: {:?}", config);

        info!(
            "Nesting module files under {}",
            config.service_root.best_effort_path_display()
        );
        nest_module_files(&config.service_root).context(ServiceConversionSnafu)?;

        info!(
            "Flattening module files under {}",
            config.common_root.best_effort_path_display()
        );
        flatten_module_files(&config.common_root).context(CommonConversionSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure while converting the service tree"))]
    ServiceConversionError { source: ConvertError },
    #[snafu(display("Critical failure while converting the common tree"))]
    CommonConversionError { source: ConvertError },
}
