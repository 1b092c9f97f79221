//! Configuration for the film catalog module

use serde::Deserialize;

/// Film catalog configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Longest accepted title, in characters
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Upper bound of the accepted rating range (lower bound is 0.0)
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_title_length: default_max_title_length(),
            max_rating: default_max_rating(),
        }
    }
}

fn default_max_title_length() -> usize {
    255
}

fn default_max_rating() -> f64 {
    10.0
}
