use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub upstream: UpstreamSettings,
    pub extractor: ExtractorSettings,
    #[serde(default)]
    pub debug_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExtractorSettings {
    /// Path or name of the plotdigitizer binary.
    pub binary: String,
    pub timeout_secs: u64,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/settings"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
