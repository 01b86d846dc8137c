use std::fs;
use std::time::Duration;

use voice_chess::config::{ColorChoice, Config};
use voice_chess::core::Side;
use voice_chess::session::SessionConfig;
use voice_chess::Error;

#[test]
fn omitted_sections_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[game]
user_color = "black"
think_time_ms = [500, 100]

[speech]
corrections = [["pawn for", "pawn f4"]]
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.game.user_color, ColorChoice::Black);
    assert_eq!(Side::from(config.game.user_color), Side::Black);
    assert_eq!(
        config.game.think_time(),
        (Duration::from_millis(100), Duration::from_millis(500))
    );
    assert_eq!(
        config.speech.corrections,
        vec![("pawn for".to_string(), "pawn f4".to_string())]
    );
    assert!(config.speech.prompt_each_turn);
    assert_eq!(config.opponent.seed, None);
    assert!(!config.display.show_board);

    let session = SessionConfig::from(&config);
    assert!(session.prompt_each_turn);
    assert_eq!(session.think_time.1, Duration::from_millis(500));
}

#[test]
fn missing_file_is_the_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.game.user_color, ColorChoice::White);

    assert!(matches!(
        Config::load(&dir.path().join("absent.toml")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn malformed_toml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[game]\nuser_color = 3\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("config.toml"));
}
