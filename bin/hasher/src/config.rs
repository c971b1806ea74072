use serde::{Deserialize, Serialize};
use std::path::Path;
use withdrawal::Withdrawal;

/// Withdrawals to encode, as read from a TOML file.
///
/// ```toml
/// [[withdrawals]]
/// nonce = "0x1afbd"
/// sender = "0x4200000000000000000000000000000000000010"
/// target = "0x99c9fc46f92e8a1c0dec1b1747d010903e884be1"
/// value = "0x0"
/// gasLimit = "0x0"
/// data = "0x"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Withdrawals in file order. `sender` and `target` may be omitted.
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}
