use powerline_shell::config::{apply_env_overrides, load_config_file, PathStyle, SYMBOLS_ENV, THEME_ENV};
use powerline_shell::{generate_prompt, Color, Config, ConfigError, GitInfo, PromptFacts, Shell};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_object_gives_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.theme, "dark");
    assert_eq!(config.symbols, "powerline");
    assert_eq!(config.min_padding, 5);
    assert!(config.segments.git.enabled);
    assert!(config.segments.exit_code.enabled);
    assert_eq!(config.segments.path.style, PathStyle::Plain);
    assert_eq!(config.segments.path.max_depth, None);
}

#[test]
fn full_config_file_is_parsed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "theme": "light",
            "symbols": "compatible",
            "minPadding": 2,
            "colors": { "path": { "bg": 17, "fg": null } },
            "hostPatterns": { "production": "^live-" },
            "segments": {
                "path": { "enabled": true, "style": "split", "maxDepth": 4 },
                "exitCode": { "enabled": false }
            }
        }"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();

    assert_eq!(config.theme, "light");
    assert_eq!(config.symbols, "compatible");
    assert_eq!(config.min_padding, 2);
    assert_eq!(config.segments.path.style, PathStyle::Split);
    assert_eq!(config.segments.path.max_depth, Some(4));
    assert!(!config.segments.exit_code.enabled);
    assert!(config.segments.user.enabled);

    let path_colors = &config.colors.as_ref().unwrap()["path"];
    assert_eq!(Color::from(path_colors.bg), Color::Indexed(17));
    assert_eq!(Color::from(path_colors.fg), Color::Default);
    assert_eq!(
        config.host_patterns.as_ref().and_then(|p| p.production.as_deref()),
        Some("^live-")
    );
}

#[test]
fn missing_and_broken_files_are_typed_errors() {
    let dir = TempDir::new().unwrap();

    let missing = load_config_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ invalid json }").unwrap();
    let err = load_config_file(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn env_overrides_win_over_file() {
    let mut config = Config {
        theme: "light".to_string(),
        ..Config::default()
    };

    apply_env_overrides(&mut config, |key| match key {
        k if k == THEME_ENV => Some("dark".to_string()),
        k if k == SYMBOLS_ENV => Some("compatible".to_string()),
        _ => None,
    });

    assert_eq!(config.theme, "dark");
    assert_eq!(config.symbols, "compatible");
}

#[test]
fn config_reaches_the_rendered_prompt() {
    let config: Config = serde_json::from_str(
        r#"{
            "symbols": "test",
            "minPadding": 1,
            "colors": { "home": { "bg": 17, "fg": 15 } },
            "segments": {
                "host": { "enabled": false },
                "clock": { "enabled": false },
                "path": { "style": "split" }
            }
        }"#,
    )
    .unwrap();
    let facts = PromptFacts {
        username: "alice".to_string(),
        hostname: "ignored".to_string(),
        path: vec!["~".to_string(), "src".to_string()],
        writable: true,
        git: GitInfo::not_a_repository(),
        exit_code: "0".to_string(),
        now: chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap(),
    };

    let plain = generate_prompt(&config, Shell::Plain, &facts, "x");
    assert_eq!(plain, " alice -> ~ > src .R->.R \n $ .R->.R ");

    let bash = generate_prompt(&config, Shell::Bash, &facts, "x");
    assert!(bash.contains("\\[\\e[48;5;17m\\]\\[\\e[38;5;15m\\] ~ "), "{}", bash);
}

#[test]
fn zero_min_padding_is_raised_to_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "symbols": "test", "minPadding": 0, "segments": { "host": { "enabled": false }, "clock": { "enabled": false } } }"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.min_padding, 1);

    let facts = PromptFacts {
        username: "alice".to_string(),
        hostname: String::new(),
        path: vec!["~".to_string()],
        writable: true,
        git: GitInfo::on_branch("main"),
        exit_code: "0".to_string(),
        now: chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap(),
    };
    // a raw zero reaching the renderer is clamped the same way
    let unclamped = Config { min_padding: 0, ..config.clone() };
    for config in [config, unclamped] {
        let plain = generate_prompt(&config, Shell::Plain, &facts, "1");
        assert!(plain.starts_with(" alice -> ~ .R->.R <- ß main .R\n"), "{:?}", plain);
    }
}
