use serde::Deserialize;

const ENV_PREFIX: &str = "MEDIAN_";

/// Demo settings, read from `MEDIAN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_sequence")]
    pub sequence: Vec<i64>,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How many random values to stream through a finder, 0 to skip
    #[serde(default)]
    pub random_stream: usize,
}

fn default_sequence() -> Vec<i64> {
    vec![1, 2, -1, 3, 5]
}

fn default_window_size() -> usize {
    3
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            window_size: default_window_size(),
            log_level: default_log_level(),
            random_stream: 0,
        }
    }
}

impl DemoConfig {
    /**
    Loads a `.env` file when one exists, then reads the prefixed variables.
    Variables already set in the process win over the file.
    */
    pub fn load() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::DemoConfig;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_reads_prefixed_values() {
        let config = DemoConfig::from_vars(vars(&[
            ("MEDIAN_SEQUENCE", "4,-2,8"),
            ("MEDIAN_WINDOW_SIZE", "2"),
            ("MEDIAN_LOG_LEVEL", "debug"),
            ("MEDIAN_RANDOM_STREAM", "10"),
        ]))
        .unwrap();
        assert_eq!(config.sequence, vec![4, -2, 8]);
        assert_eq!(config.window_size, 2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.random_stream, 10);
    }

    #[test]
    fn test_rejects_bad_window_size() {
        let result = DemoConfig::from_vars(vars(&[("MEDIAN_WINDOW_SIZE", "three")]));
        assert!(result.is_err());
    }
}
