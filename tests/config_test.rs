use clap::Parser;
use schema_builder::cli::Cli;
use schema_builder::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_settings_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("schema-builder.toml");

    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080

[preview]
indent = 4

[logging]
level = "debug"
"#;
    fs::write(&config_path, toml)?;

    let settings = Settings::from_file(&config_path)?;
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.preview.indent, 4);
    assert_eq!(settings.logging.level, "debug");

    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("schema-builder.toml");
    fs::write(&config_path, "[server]\nport = 4000\n")?;

    let settings = Settings::from_file(&config_path)?;
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.preview.indent, 2);
    assert_eq!(settings.logging.level, "info");

    Ok(())
}

#[test]
fn test_cli_overrides_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("schema-builder.toml");
    fs::write(&config_path, "[server]\nhost = \"0.0.0.0\"\nport = 4000\n\n[preview]\nindent = 4\n")?;

    let cli = Cli::parse_from([
        "schema-builder",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "5000",
        "--indent",
        "0",
    ]);
    let settings = Settings::new_with_cli(&cli)?;
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.preview.indent, 0);

    Ok(())
}

#[test]
fn test_invalid_file_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("schema-builder.toml");
    fs::write(&config_path, "[preview]\nindent = 16\n")?;

    let err = Settings::from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));

    Ok(())
}
