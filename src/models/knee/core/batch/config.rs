use std::path::{Path, PathBuf};

use crate::support::mot::MotLayout;

/// Configuration for batch knee kinematics aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Line layout shared by every simulation's `.mot` file.
    pub layout: MotLayout,

    /// Directory name prefix; simulation `i` lives in `<prefix><i>`.
    pub sim_dir_prefix: String,

    /// File name of the persisted array, written in the root directory.
    pub output_file: String,

    /// Whether to persist the aggregated array.
    pub save: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            layout: MotLayout::default(),
            sim_dir_prefix: "sim_dir.".to_owned(),
            output_file: "kneeKinArray.npy".to_owned(),
            save: true,
        }
    }
}

impl BatchConfig {
    /// Path of simulation `sim`'s motion file: `<root>/<sim_dir_prefix><sim>/<prefix><sim>.mot`.
    pub(super) fn mot_path(&self, root: &Path, prefix: &str, sim: usize) -> PathBuf {
        root.join(format!("{}{sim}", self.sim_dir_prefix))
            .join(format!("{prefix}{sim}.mot"))
    }

    pub(super) fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_file)
    }
}
