use crate::core::types::NR_LOOPS;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Acquire/release pairs per trial
    pub iterations: u64,
    /// Whether to run every strategy once, untimed, before the first round
    pub warmup: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: NR_LOOPS,
            warmup: true,
        }
    }
}

impl BenchConfig {
    /// Default configuration with a different loop count
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, 100_000_000);
        assert!(config.warmup);

        let small = BenchConfig::with_iterations(1000);
        assert_eq!(small.iterations, 1000);
        assert!(small.warmup);
    }
}
