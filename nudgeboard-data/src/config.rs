fn default_simulated_delay_ms() -> u64 {
    500
}

#[derive(Clone, serde::Deserialize)]
pub struct Config {
    /// Artificial latency before the mock snapshot resolves.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}
