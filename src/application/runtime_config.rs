use std::path::PathBuf;

// Service code keeps the 2015-style mod layout; common code gets the
// 2018-style layout. Both paths are fixed, relative to the tool's location.
const SERVICE_ROOT: &str = "../service";
const COMMON_ROOT: &str = "../common";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub service_root: PathBuf,
    pub common_root: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            service_root: PathBuf::from(SERVICE_ROOT),
            common_root: PathBuf::from(COMMON_ROOT),
        }
    }
}
