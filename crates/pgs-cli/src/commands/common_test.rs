use super::*;
use std::fs;
use tempfile::tempdir;

fn global_with_config(path: &Path) -> GlobalArgs {
    GlobalArgs {
        config: path.display().to_string(),
        ..GlobalArgs::default()
    }
}

#[test]
fn test_load_config_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pgshift.yml");
    fs::write(&path, "username: u\ndatabase: d\nhost: h\n").unwrap();

    let config = load_config(&global_with_config(&path)).unwrap();
    assert_eq!(config.database, "d");
    assert_eq!(config.port, 5432);
}

#[test]
fn test_overrides_take_precedence_over_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pgshift.yml");
    fs::write(&path, "username: u\ndatabase: d\nhost: h\nport: 5432\n").unwrap();

    let mut global = global_with_config(&path);
    global.database = Some("other".to_string());
    global.port = Some(6000);

    let config = load_config(&global).unwrap();
    assert_eq!(config.database, "other");
    assert_eq!(config.port, 6000);
    assert_eq!(config.username, "u");
}

#[test]
fn test_override_can_complete_a_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pgshift.yml");
    fs::write(&path, "username: u\nhost: h\n").unwrap();

    // Without the override the config is invalid
    assert!(load_config(&global_with_config(&path)).is_err());

    let mut global = global_with_config(&path);
    global.database = Some("d".to_string());
    let config = load_config(&global).unwrap();
    assert_eq!(config.database, "d");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let global = global_with_config(&dir.path().join("absent.yml"));
    assert!(load_config(&global).is_err());
}
