use super::types::{Config, OutputConfig, OutputFormat};
use crate::billing::{ContractConfig, UsageProfile};

impl Default for Config {
    fn default() -> Self {
        let explain = std::env::var("LINKCOST_EXPLAIN").is_ok();
        Config {
            contract: ContractConfig::default(),
            usage: UsageProfile::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                explain,
            },
        }
    }
}
