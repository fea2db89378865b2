use super::*;
use dojo_core::language::is_japanese;

const KEYS: &[&str] = &[
    "bot_name",
    "welcome_message",
    "default_response",
    "history_header",
    "history_empty",
    "you_label",
    "faq_header",
    "faq_footer",
    "language_label",
    "language_usage",
    "help_header",
    "help_help",
    "help_language",
    "help_history",
    "help_faq",
    "help_footer",
];

#[test]
fn test_all_keys_exist_in_both_languages() {
    for key in KEYS {
        for lang in Language::ALL {
            assert_ne!(t(key, lang), "???", "missing '{key}' for {lang}");
        }
    }
}

#[test]
fn test_japanese_strings_are_japanese() {
    for key in KEYS {
        assert!(
            is_japanese(t(key, Language::Japanese)),
            "'{key}' ja string is not Japanese"
        );
    }
}

#[test]
fn test_unknown_key() {
    assert_eq!(t("no_such_key", Language::English), "???");
}

#[test]
fn test_welcome_and_default_match_chat_widget() {
    assert_eq!(
        t("welcome_message", Language::Japanese),
        "こんにちは！気軽に何でも聞いてください。"
    );
    assert_eq!(
        t("default_response", Language::Japanese),
        dojo_faq::fallback::builtin_default_response(Language::Japanese)
    );
    assert_eq!(
        t("default_response", Language::English),
        dojo_faq::fallback::builtin_default_response(Language::English)
    );
}

#[test]
fn test_help_commands_contain_command_name() {
    for key in ["help_help", "help_language", "help_history", "help_faq"] {
        let cmd = key.strip_prefix("help_").unwrap();
        for lang in Language::ALL {
            assert!(
                t(key, lang).contains(&format!("/{cmd}")),
                "help key '{key}' should contain '/{cmd}'"
            );
        }
    }
}

#[test]
fn test_format_helpers() {
    assert_eq!(language_set(Language::English), "Language set to: English");
    assert!(language_set(Language::Japanese).contains("日本語"));
    assert!(language_show(Language::English, "en-US").contains("(en-US)"));
    assert!(language_unknown(Language::English, "klingon").contains("klingon"));
    assert_eq!(faq_topic(0, "使い方"), "1. 使い方");
    assert_eq!(history_count(Language::English, 1), "(1 message)");
    assert_eq!(history_count(Language::English, 3), "(3 messages)");
    assert!(history_count(Language::Japanese, 3).contains('3'));
}

#[test]
fn test_catalog_overrides() {
    let mut raw = HashMap::new();
    let mut ja = HashMap::new();
    ja.insert("default_response".to_string(), "ごめんなさい".to_string());
    raw.insert("ja".to_string(), ja);
    let mut xx = HashMap::new();
    xx.insert("default_response".to_string(), "???".to_string());
    raw.insert("klingon".to_string(), xx);

    let catalog = Catalog::from_overrides(&raw);
    assert_eq!(catalog.override_count(), 1);
    assert_eq!(catalog.get("default_response", Language::Japanese), "ごめんなさい");
    assert_eq!(
        catalog.get("default_response", Language::English),
        t("default_response", Language::English)
    );
}

#[test]
fn test_catalog_localizer_returns_none_for_unknown_keys() {
    let catalog = Catalog::default();
    assert_eq!(catalog.lookup("no_such_key", Language::Japanese), None);
    assert_eq!(
        catalog.lookup("bot_name", Language::Japanese).as_deref(),
        Some("サポートBot")
    );
}

#[test]
fn test_no_widget_chrome_strings() {
    for key in ["conversation_title", "close_chatbot"] {
        for lang in Language::ALL {
            assert_eq!(t(key, lang), "???");
        }
    }
}
