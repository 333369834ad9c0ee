#[derive(serde::Deserialize)]
pub struct StaticConfiguration {
    pub application_port: u16,
}

pub fn get_static_configuration() -> Result<StaticConfiguration, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(
            config::File::new("configuration.yaml", config::FileFormat::Yaml)
        )
        .build()?;

    settings.try_deserialize::<StaticConfiguration>()
}
