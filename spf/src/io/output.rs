use serde::{Deserialize, Serialize};

use trapack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::SPFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct SPFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SPFConfig,
}
