//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::blocks::DEFAULT_BLOCK_SIZES;
use crate::error::{GenerateError, GenerateResult};

/// Tunables for puzzle generation.
///
/// Every field has a default, so a partial TOML table deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Word-pair attempts per cryptarithm round.
    pub cryptarithm_attempts: usize,
    /// Rounds of attempts before cryptarithm generation gives up.
    pub cryptarithm_rounds: usize,
    /// Reject cryptarithms whose equation admits more than one assignment.
    pub require_unique_cryptarithm: bool,
    /// Weighted block-size list for Porta and Nihilist output.
    pub block_sizes: Vec<usize>,
    /// Group width of Hill 3×3 ciphertext.
    pub hill3_group: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cryptarithm_attempts: 5000,
            cryptarithm_rounds: 4,
            require_unique_cryptarithm: false,
            block_sizes: DEFAULT_BLOCK_SIZES.to_vec(),
            hill3_group: 6,
        }
    }
}

impl GeneratorConfig {
    /// Checks that every field is usable.
    pub fn validate(&self) -> GenerateResult<()> {
        if self.cryptarithm_attempts == 0 || self.cryptarithm_rounds == 0 {
            return Err(GenerateError::InvalidConfig(
                "cryptarithm attempts and rounds must be positive".into(),
            ));
        }
        if self.block_sizes.is_empty() || self.block_sizes.contains(&0) {
            return Err(GenerateError::InvalidConfig(
                "block sizes must be a non-empty list of positive sizes".into(),
            ));
        }
        if self.hill3_group == 0 {
            return Err(GenerateError::InvalidConfig(
                "hill3_group must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_sizes.len(), 16);
    }

    #[test]
    fn rejects_zero_block_size() {
        let config = GeneratorConfig {
            block_sizes: vec![4, 0],
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_empty_search_budget() {
        let config = GeneratorConfig {
            cryptarithm_rounds: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
