use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.bot.name, "Dojo Support Bot");
    assert_eq!(cfg.bot.log_level, "info");
    assert!(!cfg.bot.log_to_file);
    assert_eq!(cfg.language.policy, LanguagePolicy::Locale);
    assert_eq!(cfg.language.default_locale, "ja");
    assert_eq!(cfg.answers.selection, SelectionPolicy::First);
    assert!(cfg.answers.seed.is_none());
    assert!(cfg.knowledge.path.is_empty());
    assert!(cfg.i18n.is_empty());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.language.policy, LanguagePolicy::Locale);
    assert_eq!(cfg.bot.data_dir, "~/.dojo-bot");
}

#[test]
fn test_full_toml() {
    let toml_str = r#"
        [bot]
        name = "Test Bot"
        log_level = "debug"
        log_to_file = true

        [language]
        policy = "content"
        default_locale = "en-US"

        [answers]
        selection = "random"
        seed = 7

        [knowledge]
        path = "faq.toml"

        [i18n.ja]
        default_response = "ごめんなさい"

        [i18n.en]
        welcome_message = "Hello!"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.bot.name, "Test Bot");
    assert!(cfg.bot.log_to_file);
    assert_eq!(cfg.language.policy, LanguagePolicy::Content);
    assert_eq!(cfg.language.default_locale, "en-US");
    assert_eq!(cfg.answers.selection, SelectionPolicy::Random);
    assert_eq!(cfg.answers.seed, Some(7));
    assert_eq!(cfg.knowledge.path, "faq.toml");
    assert_eq!(cfg.i18n["ja"]["default_response"], "ごめんなさい");
    assert_eq!(cfg.i18n["en"]["welcome_message"], "Hello!");
}

#[test]
fn test_unknown_policy_is_rejected() {
    let toml_str = r#"
        [language]
        policy = "majority"
    "#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let cfg = load("/nonexistent/__dojo_bot_config__.toml").unwrap();
    assert_eq!(cfg.language.default_locale, "ja");
}

#[test]
fn test_load_reads_file_and_reports_parse_errors() {
    let dir = std::env::temp_dir().join(format!("__dojo_config_test_{}__", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);

    let good = dir.join("good.toml");
    std::fs::write(&good, "[answers]\nselection = \"random\"\n").unwrap();
    let cfg = load(good.to_str().unwrap()).unwrap();
    assert_eq!(cfg.answers.selection, SelectionPolicy::Random);

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "[answers\nselection = ").unwrap();
    let err = load(bad.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, DojoError::Config(_)));
    assert!(err.to_string().contains("failed to parse config"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_shellexpand() {
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    if let Some(home) = std::env::var_os("HOME") {
        assert_eq!(
            shellexpand("~/.dojo-bot"),
            format!("{}/.dojo-bot", home.to_string_lossy())
        );
    }
}

#[test]
fn test_example_config_parses_to_defaults() {
    let cfg: Config = toml::from_str(include_str!("../../../../config.example.toml")).unwrap();
    let defaults = Config::default();
    assert_eq!(cfg.bot.name, defaults.bot.name);
    assert_eq!(cfg.bot.data_dir, defaults.bot.data_dir);
    assert_eq!(cfg.language.policy, defaults.language.policy);
    assert_eq!(cfg.language.default_locale, defaults.language.default_locale);
    assert_eq!(cfg.answers.selection, defaults.answers.selection);
    assert!(cfg.knowledge.path.is_empty());
    assert!(cfg.i18n.is_empty());
}
