use std::path::PathBuf;

use mesmur_application::SiteSettings;

pub const PUBLIC_DIR_VAR: &str = "MESMUR_PUBLIC_DIR";
pub const VIEWPORT_WIDTH_VAR: &str = "MESMUR_VIEWPORT_WIDTH";
pub const LOG_LEVEL_VAR: &str = "MESMUR_LOG";
pub const HERO_FOLDER_VAR: &str = "MESMUR_HERO_FOLDER";
pub const WORLD_FOLDER_VAR: &str = "MESMUR_WORLD_FOLDER";
pub const SENTINEL_VAR: &str = "MESMUR_SENTINEL";
pub const MAX_VIEWPORT_WIDTH: f32 = 7680.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub public_dir: PathBuf,
    pub viewport_width: f32,
    pub log_level: String,
    pub site: SiteSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            viewport_width: 1024.0,
            log_level: "info".to_string(),
            site: SiteSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(dir) = lookup(PUBLIC_DIR_VAR).filter(|value| !value.trim().is_empty()) {
            config.public_dir = PathBuf::from(dir);
        }
        if let Some(width) = lookup(VIEWPORT_WIDTH_VAR) {
            config.viewport_width = parse_width(&width)
                .map_err(|error| format!("{VIEWPORT_WIDTH_VAR}: {error}"))?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|value| !value.trim().is_empty()) {
            config.log_level = level;
        }
        // Blank folder names are passed through so target validation can reject them.
        if let Some(folder) = lookup(HERO_FOLDER_VAR) {
            config.site.hero_folder = folder;
        }
        if let Some(folder) = lookup(WORLD_FOLDER_VAR) {
            config.site.world_folder = folder;
        }
        if let Some(sentinel) = lookup(SENTINEL_VAR) {
            config.site.sentinel = sentinel;
        }
        Ok(config)
    }
}

pub fn parse_width(value: &str) -> Result<f32, String> {
    let width = value
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid viewport width: {value}"))?;
    if !width.is_finite() || width <= 0.0 {
        return Err(format!("viewport width must be positive: {value}"));
    }
    if width > MAX_VIEWPORT_WIDTH {
        return Err(format!(
            "viewport width must not exceed {MAX_VIEWPORT_WIDTH}: {value}"
        ));
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config_reads_local_public_dir() {
        let config = AppConfig::default();
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.viewport_width, 1024.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (PUBLIC_DIR_VAR, "site/public"),
            (VIEWPORT_WIDTH_VAR, "412"),
            (LOG_LEVEL_VAR, "debug"),
            (HERO_FOLDER_VAR, "Champions"),
            (SENTINEL_VAR, "backdrop"),
        ]))
        .expect("config");
        assert_eq!(config.site.hero_folder, "Champions");
        assert_eq!(config.site.world_folder, "LevelImages");
        assert_eq!(config.site.sentinel, "backdrop");
        assert_eq!(config.public_dir, PathBuf::from("site/public"));
        assert_eq!(config.viewport_width, 412.0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_width_is_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "wide")])).is_err());
        assert!(parse_width("0").is_err());
        assert!(parse_width("-3").is_err());
        assert!(parse_width("NaN").is_err());
        assert!(parse_width("1e30").is_err());
        assert!(AppConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "99999")])).is_err());
        assert_eq!(parse_width(" 768 "), Ok(768.0));
        assert_eq!(parse_width("7680"), Ok(MAX_VIEWPORT_WIDTH));
    }
}
