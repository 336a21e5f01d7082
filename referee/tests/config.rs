use checkers::Weights;
use referee::Config;

#[test]
fn test_config() {
    let config = Config::from_toml(
        r#"
log = "logs/referee.log"
num_threads = 2

[player.a]

[player.b]
weights = { skip = 50.0 }

[[match]]
players = ["a", "b"]
num_games = 10
max_plies = 100
"#,
    )
    .unwrap();

    assert_eq!(config.num_threads, 2);
    assert_eq!(config.r#match.len(), 1);
    let [a, b] = config.weights(&config.r#match[0]);
    assert_eq!(a, Weights::default());
    assert_eq!(b.skip, 50.0);
    assert_eq!(b.skip_on_next, Weights::default().skip_on_next);
}

#[test]
fn test_config_errors() {
    let unknown_player = r#"
log = "referee.log"
num_threads = 1

[player.a]

[[match]]
players = ["a", "c"]
num_games = 1
max_plies = 10
"#;
    assert!(Config::from_toml(unknown_player).is_err());

    let unknown_field = r#"
log = "referee.log"
num_threads = 1
threads = 3
player = {}
match = []
"#;
    assert!(Config::from_toml(unknown_field).is_err());

    let unknown_weight = r#"
log = "referee.log"
num_threads = 1
match = []

[player.a]
weights = { bogus = 1.0 }
"#;
    assert!(Config::from_toml(unknown_weight).is_err());
}
