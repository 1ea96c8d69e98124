use serde::{Deserialize, Serialize};

use figfit::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::ETSConfig;
use crate::opt::SearchStats;

#[derive(Serialize, Deserialize, Clone)]
pub struct ETSOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub stats: SearchStats,
    pub config: ETSConfig,
}
