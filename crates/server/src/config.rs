use std::{collections::HashMap, fs};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub recommend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            recommend_url: "http://localhost:8000/travel/recommend".into(),
        }
    }
}

/// Layered settings: defaults, then `server.toml`, then environment
/// variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Ok(v) = std::env::var("RECOMMEND_URL") {
        settings.recommend_url = v;
    }
    if let Ok(v) = std::env::var("APP__RECOMMEND_URL") {
        settings.recommend_url = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = file_cfg.get("recommend_url") {
        settings.recommend_url = v.clone();
    }
}

pub fn parse_recommend_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Url::parse(&Settings::default().recommend_url)
            .context("default recommend url is invalid");
    }

    Url::parse(raw).with_context(|| format!("invalid recommend url '{raw}'"))
}
