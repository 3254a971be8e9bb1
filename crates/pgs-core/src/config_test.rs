use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_full_config() {
    let yaml = r#"
username: app
password: hunter2
database: app_development
host: localhost
port: 5433
dump_file: db/dump.sql
migration_folder: db/migrate
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.username, "app");
    assert_eq!(config.password, "hunter2");
    assert_eq!(config.database, "app_development");
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 5433);
    assert_eq!(config.dump_file, "db/dump.sql");
    assert_eq!(config.migration_folder, "db/migrate");
}

#[test]
fn test_port_defaults_when_omitted() {
    let yaml = r#"
username: app
database: app_development
host: localhost
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.port, 5432);
    assert!(config.password.is_empty());
}

#[test]
fn test_load_missing_file_is_config_not_found() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("pgshift.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_reads_yaml_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pgshift.yml");
    fs::write(&path, "username: u\ndatabase: d\nhost: h\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.username, "u");
    assert_eq!(config.database, "d");
    assert_eq!(config.host, "h");
}

#[test]
fn test_load_rejects_unknown_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pgshift.yml");
    fs::write(&path, "username: u\nsocket: /tmp/pg\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::YamlParse(_)));
}

#[test]
fn test_validate_requires_connection_fields() {
    let mut config = Config {
        username: "u".to_string(),
        database: "d".to_string(),
        host: "h".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_ok());

    config.database.clear();
    let err = config.validate().unwrap_err();
    match err {
        CoreError::ConfigInvalid { message } => assert!(message.contains("database")),
        other => panic!("unexpected error: {other}"),
    }
}
