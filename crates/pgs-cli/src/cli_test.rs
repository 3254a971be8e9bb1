use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_migrate_with_overrides() {
    let cli = Cli::try_parse_from([
        "pgs",
        "migrate",
        "--database",
        "appdb",
        "--migration-folder",
        "db/migrate",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Migrate));
    assert_eq!(cli.global.database.as_deref(), Some("appdb"));
    assert_eq!(cli.global.migration_folder.as_deref(), Some("db/migrate"));
    assert_eq!(cli.global.config, "pgshift.yml");
}

#[test]
fn test_init_is_an_alias_for_initialize() {
    let cli = Cli::try_parse_from(["pgs", "init"]).unwrap();
    assert!(matches!(cli.command, Commands::Initialize));
}
