use serde::{Deserialize, Serialize};

/// Sizing for the probe set used to combine postings lists
///
/// One probe set is built per AND/OR evaluation and discarded afterwards,
/// so the initial capacity only matters for avoiding early regrowth on
/// large postings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetConfig {
    /// Initial slot count of the open-addressing table
    pub initial_capacity: usize,
    /// Grow the table once occupancy exceeds this percentage
    pub max_load_percent: u8,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            // Prime, for better distribution under linear probing
            initial_capacity: 101,
            max_load_percent: 75,
        }
    }
}

impl SetConfig {
    /// Create a config with a custom initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SetConfig::default();
        assert_eq!(config.initial_capacity, 101);
        assert_eq!(config.max_load_percent, 75);
    }

    #[test]
    fn test_with_capacity() {
        let config = SetConfig::with_capacity(17);
        assert_eq!(config.initial_capacity, 17);
        assert_eq!(config.max_load_percent, 75);
    }
}
