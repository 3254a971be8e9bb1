use super::*;

#[test]
fn test_connection_string_quotes_each_field() {
    let config = Config {
        username: "u".to_string(),
        database: "d".to_string(),
        password: "p".to_string(),
        host: "h".to_string(),
        port: 6543,
        ..Config::default()
    };

    let s = connection_string(&config);
    assert!(s.contains("user='u'"));
    assert!(s.contains("dbname='d'"));
    assert!(s.contains("password='p'"));
    assert!(s.contains("host='h'"));
    assert!(s.contains("sslmode=disable"));

    // The port field is carried in the config but deliberately not encoded.
    assert!(!s.contains("port"));
    assert!(!s.contains("6543"));
}

#[test]
fn test_connection_string_with_empty_password() {
    let config = Config {
        username: "u".to_string(),
        database: "d".to_string(),
        host: "h".to_string(),
        ..Config::default()
    };

    assert!(connection_string(&config).contains("password=''"));
}
