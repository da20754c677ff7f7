//! Configuration file loading for the CLI

use std::io::Write;

use tictactoe_solver::{
    Error,
    cli::config::{OpponentKind, SelfPlayConfig, Side, SolverConfig},
    search::{MoveOrder, SearchConfig},
};

#[test]
fn missing_path_uses_defaults() {
    let config = SolverConfig::load_or_default(None).unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.search.move_order, MoveOrder::RowMajor);
    assert_eq!(config.self_play.opponent, OpponentKind::Minimax);
}

#[test]
fn loads_partial_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "search": {{ "move_order": "shuffled", "seed": 42 }}, "self_play": {{ "opponent": "random" }} }}"#
    )
    .unwrap();

    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(
        config.search,
        SearchConfig::new()
            .with_move_order(MoveOrder::Shuffled)
            .with_seed(42)
    );
    assert_eq!(
        config.self_play,
        SelfPlayConfig {
            opponent: OpponentKind::Random,
            ..SelfPlayConfig::default()
        }
    );
    assert_eq!(config.self_play.side, Side::X);
}

#[test]
fn roundtrips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.json");
    let config = SolverConfig {
        search: SearchConfig::new().with_seed(3),
        self_play: SelfPlayConfig {
            games: 4,
            opponent: OpponentKind::Random,
            side: Side::O,
        },
    };
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    assert_eq!(SolverConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SolverConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("read config file"));
}

#[test]
fn malformed_file_is_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ \"search\": {{ \"move_order\": \"spiral\" }} }}").unwrap();
    let err = SolverConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
