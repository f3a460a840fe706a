use super::*;

#[test]
fn parses_harvest_with_defaults() {
    let cli = Cli::try_parse_from(["shelfkit", "harvest"]).expect("expected valid cli args");
    match cli.command {
        Commands::Harvest {
            config,
            skip_search,
            skip_scrape,
            skip_export,
        } => {
            // SHELFKIT_RUN_CONFIG may be set in the environment running the tests.
            if std::env::var_os("SHELFKIT_RUN_CONFIG").is_none() {
                assert_eq!(config, PathBuf::from("config/run.yaml"));
            }
            assert!(!skip_search && !skip_scrape && !skip_export);
        }
        other => panic!("expected harvest, got {other:?}"),
    }
}

#[test]
fn parses_harvest_skip_flags() {
    let cli = Cli::try_parse_from([
        "shelfkit",
        "harvest",
        "--config",
        "runs/nightly.yaml",
        "--skip-search",
        "--skip-export",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Harvest {
            skip_search: true,
            skip_scrape: false,
            skip_export: true,
            ..
        }
    ));
}

#[test]
fn parses_tag_command() {
    let cli = Cli::try_parse_from([
        "shelfkit", "tag", "--input", "item.json", "--style", "2", "--output", "tag",
    ])
    .unwrap();
    match cli.command {
        Commands::Tag {
            input,
            style,
            output,
        } => {
            assert_eq!(input, PathBuf::from("item.json"));
            assert_eq!(style, 2);
            assert_eq!(output, PathBuf::from("tag"));
        }
        other => panic!("expected tag, got {other:?}"),
    }
}

#[test]
fn tag_style_defaults_to_standard() {
    let cli =
        Cli::try_parse_from(["shelfkit", "tag", "--input", "a.json", "--output", "a"]).unwrap();
    assert!(matches!(cli.command, Commands::Tag { style: 1, .. }));
}

#[test]
fn tag_style_out_of_range_is_rejected() {
    let result = Cli::try_parse_from([
        "shelfkit", "tag", "--input", "a.json", "--style", "3", "--output", "a",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_meta_command() {
    let cli = Cli::try_parse_from(["shelfkit", "meta", "https://shop.example/p"]).unwrap();
    assert!(matches!(cli.command, Commands::Meta { ref url } if url == "https://shop.example/p"));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["shelfkit"]).is_err());
}

fn invalid_env() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "SHELFKIT_REQUEST_TIMEOUT_SECS".to_string(),
        reason: "invalid digit found in string".to_string(),
    })
}

#[tokio::test]
async fn tag_runs_with_invalid_environment() {
    let dir = std::env::temp_dir().join(format!("shelfkit-cli-run-tag-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("item.json");
    std::fs::write(&input, r#"{"price": "4.99"}"#).unwrap();

    let command = Commands::Tag {
        input,
        style: 1,
        output: dir.join("tag"),
    };
    run(command, invalid_env()).await.expect("tag must not need app config");
    assert!(dir.join("tag.svg").is_file());
}

#[tokio::test]
async fn harvest_reports_invalid_environment() {
    let command = Commands::Harvest {
        config: PathBuf::from("config/run.yaml"),
        skip_search: false,
        skip_scrape: false,
        skip_export: false,
    };
    let err = run(command, invalid_env()).await.unwrap_err();
    assert!(err.to_string().contains("SHELFKIT_REQUEST_TIMEOUT_SECS"), "got: {err:#}");
}

