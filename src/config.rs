use std::net::SocketAddr;

#[derive(serde::Deserialize)]
pub(crate) struct Config {
    pub server_addr: SocketAddr,
    pub healthcheck_addr: SocketAddr,

    pub ai_config: nudgeboard_ai::gemini::Config,
    #[serde(default)]
    pub data_config: nudgeboard_data::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let env_config = config::Environment::default()
            .separator("__")
            .try_parsing(true);

        let mut conf_builder = config::Config::builder().add_source(env_config);

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        conf_builder
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap_or_else(|e| panic!("Error parsing config: {e}"))
    }
}
