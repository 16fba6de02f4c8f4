//! Tests for configuration system

use chefbuddy::config::{Config, LogFormat};
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(Some("config/default.toml".to_string()))?;

    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.pantry.alert_days, 3);
    assert_eq!(config.recipes.browse_limit, 12);
    assert_eq!(config.recipes.recommend_limit, 4);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_missing_file_uses_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("nope.toml");

    let config = Config::load(Some(missing.display().to_string()))?;

    assert!(config.api.token.is_none());
    assert!(config.recipes.catalog.is_none());
    assert!(config.dietary_keywords.is_none());
    assert!(config.pantry.shelf_life.is_empty());
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_reads_pantry_and_keyword_sections() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("chefbuddy.toml");
    std::fs::write(
        &path,
        r#"
[database]
url = "sqlite:other.db"
max_connections = 2

[api]
token = "secret"

[logging]
format = "json"

[pantry]
alert_days = 5
fallback_days = 30

[pantry.shelf_life]
dairy = 10
pickles = 365

[dietary_keywords]
meat = ["seitan"]
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.api.token.as_deref(), Some("secret"));
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.pantry.alert_days, 5);
    assert_eq!(config.pantry.fallback_days, Some(30));
    assert_eq!(config.pantry.shelf_life.get("pickles"), Some(&365));

    let keywords = config.dietary_keywords.expect("keyword section");
    assert_eq!(keywords.meat, vec!["seitan"]);
    assert!(!keywords.dairy.is_empty());

    Ok(())
}

#[test]
fn test_config_rejects_non_positive_shelf_life() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("chefbuddy.toml");
    std::fs::write(&path, "[pantry.shelf_life]\ndairy = 0\n")?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(config.validate().is_err());

    Ok(())
}
