use super::*;
use std::path::Path;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_means_chat() {
    let args = parse_args(&["chatline"]);
    assert!(args.command.is_none());
    assert!(args.endpoint.is_none());
    assert!(args.debug_log.is_none());
}

#[test]
fn global_flags_parse_before_and_after_subcommands() {
    let argv = [
        "chatline",
        "--debug-log",
        "/tmp/chatline.log",
        "say",
        "hello",
    ];
    let args = parse_args(&argv);
    assert_eq!(
        args.debug_log.as_deref(),
        Some(Path::new("/tmp/chatline.log"))
    );

    let args = parse_args(&["chatline", "config", "--endpoint", "http://localhost:9000"]);
    assert!(matches!(args.command, Some(Commands::Config)));
    assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn say_collects_every_word() {
    let argv = ["chatline", "say", "what", "is", "-1", "plus", "one"];
    match parse_args(&argv).command {
        Some(Commands::Say { prompt }) => {
            assert_eq!(prompt.join(" "), "what is -1 plus one");
        }
        _ => panic!("expected say subcommand for argv={argv:?}"),
    }
}

#[test]
fn set_joins_multi_word_values() {
    let argv = ["chatline", "set", "agent-label", "Support", "Bot"];
    match parse_args(&argv).command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "agent-label");
            assert_eq!(value, vec!["Support", "Bot"]);
        }
        _ => panic!("expected set subcommand for argv={argv:?}"),
    }
}

#[test]
fn set_without_value_parses() {
    match parse_args(&["chatline", "set", "theme"]).command {
        Some(Commands::Set { value, .. }) => assert!(value.is_empty()),
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn unset_requires_a_key() {
    assert!(Args::try_parse_from(["chatline", "unset"]).is_err());
    assert!(matches!(
        parse_args(&["chatline", "unset", "endpoint"]).command,
        Some(Commands::Unset { key }) if key == "endpoint"
    ));
}

#[test]
fn set_config_value_validates_key_and_value() {
    let mut config = Config::default();

    let key = set_config_value(&mut config, "user_label", "Me").unwrap();
    assert_eq!(key, ConfigKey::UserLabel);
    assert_eq!(config.user_label(), "Me");

    assert!(set_config_value(&mut config, "colour", "red").is_err());
    assert!(set_config_value(&mut config, "endpoint", "ftp://nope").is_err());
    assert_eq!(config.get(ConfigKey::Endpoint), None);
}

#[test]
fn labels_come_from_config() {
    let mut config = Config::default();
    config.set(ConfigKey::AgentLabel, "Tutor").unwrap();
    let labels = labels_from(&config);
    assert_eq!(labels.user, "You");
    assert_eq!(labels.agent, "Tutor");
}
