//! Minimizer options
//!
//! Options can be built in code or loaded from JSON; missing fields take their
//! defaults.

use crate::error::{Error, Result};
use crate::function::MAX_DOMAIN_SIZE;
use serde::{Deserialize, Serialize};

/// Options controlling a minimization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimizerOptions {
    /// Largest accepted domain; bigger functions fail with `DomainTooLarge`
    #[serde(default = "default_max_variables")]
    pub max_variables: usize,

    /// Maximum number of minimal solutions returned (0 = all of them)
    #[serde(default)]
    pub max_solutions: usize,
}

fn default_max_variables() -> usize {
    20
}

impl Default for MinimizerOptions {
    fn default() -> Self {
        MinimizerOptions {
            max_variables: default_max_variables(),
            max_solutions: 0,
        }
    }
}

impl MinimizerOptions {
    /// Parse options from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let options: MinimizerOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_variables == 0 {
            return Err(Error::Config(
                "max_variables must be at least 1".to_string(),
            ));
        }
        if self.max_variables > MAX_DOMAIN_SIZE {
            return Err(Error::Config(format!(
                "max_variables must not exceed {}, got {}",
                MAX_DOMAIN_SIZE, self.max_variables
            )));
        }
        Ok(())
    }

    /// Whether `count` solutions should be cut down
    pub(crate) fn solution_limit(&self) -> Option<usize> {
        (self.max_solutions > 0).then_some(self.max_solutions)
    }
}
