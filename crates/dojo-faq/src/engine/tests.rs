use super::*;
use crate::fallback::builtin_default_response;
use crate::selector::RandomCandidate;
use std::collections::BTreeMap;

fn builtin_engine() -> Engine {
    Engine::new(Arc::new(KnowledgeBase::builtin().unwrap()))
}

fn entry(id: &str, keywords: &[&str], ja: &[&str], en: &[&str]) -> FaqEntry {
    let mut answers = BTreeMap::new();
    answers.insert("ja".to_string(), ja.iter().map(|s| s.to_string()).collect());
    answers.insert("en".to_string(), en.iter().map(|s| s.to_string()).collect());
    FaqEntry {
        id: id.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        answers,
    }
}

struct FixedLocalizer;

impl Localizer for FixedLocalizer {
    fn lookup(&self, key: &str, lang: Language) -> Option<String> {
        (key == crate::fallback::DEFAULT_RESPONSE_KEY).then(|| format!("fallback-{lang}"))
    }
}

#[test]
fn test_how_to_use_in_japanese() {
    let engine = builtin_engine();
    assert_eq!(
        engine.respond("使い方を教えて", "ja"),
        "このアプリでは、まずホーム画面でログインし、各機能はメニューバーから利用できます。"
    );
    assert_eq!(
        engine.respond("使い方", "ja"),
        "このアプリでは、まずホーム画面でログインし、各機能はメニューバーから利用できます。"
    );
}

#[test]
fn test_what_to_search_in_english() {
    let engine = builtin_engine();
    let reply = engine.reply("What should I search for?", "en");
    assert_eq!(reply.matched_entry.as_deref(), Some("what_to_search"));
    assert_eq!(reply.language, Language::English);
    assert_eq!(
        reply.text,
        "For search keywords, please enter the name of the area for which you want jiu-jitsu dojo information. For example, if you want to search for jiu-jitsu dojos in Tokyo, just search for 'Tokyo'."
    );
}

#[test]
fn test_english_phrase_gets_english_answer() {
    let engine = builtin_engine();
    assert_eq!(
        engine.respond("how to use favorites", "en"),
        "The favorites feature lets you save dojos that interest you or that you had a good experience with as your favorites."
    );
}

#[test]
fn test_gibberish_gets_default_in_active_language() {
    let engine = builtin_engine();
    let ja = engine.reply("asdkjasdlkj", "ja");
    assert_eq!(ja.text, builtin_default_response(Language::Japanese));
    assert_eq!(ja.matched_entry, None);

    let en = engine.reply("asdkjasdlkj", "en-US");
    assert_eq!(en.text, builtin_default_response(Language::English));
    assert_eq!(en.language, Language::English);
}

#[test]
fn test_empty_input_gets_default() {
    let engine = builtin_engine();
    assert_eq!(
        engine.respond("", "ja"),
        builtin_default_response(Language::Japanese)
    );
    assert_eq!(
        engine.respond("", "en"),
        builtin_default_response(Language::English)
    );
}

#[test]
fn test_every_keyword_yields_its_entry_answer_or_an_earlier_one() {
    let engine = builtin_engine();
    let kb = engine.knowledge_base();
    for (pos, e) in kb.entries().iter().enumerate() {
        for kw in &e.keywords {
            for locale in ["ja", "en"] {
                let reply = engine.reply(kw, locale);
                let id = reply.matched_entry.expect("keyword must match something");
                let winner = kb.entries().iter().position(|x| x.id == id).unwrap();
                assert!(winner <= pos, "'{kw}' matched later entry '{id}'");
                let lang = Language::from_locale(locale);
                assert!(kb.entries()[winner]
                    .answers_in(lang)
                    .contains(&reply.text));
            }
        }
    }
}

#[test]
fn test_keyword_anywhere_in_longer_message() {
    let engine = builtin_engine();
    let reply = engine.reply("ねえ、練習カレンダーってどう使うの？", "ja");
    assert_eq!(reply.matched_entry.as_deref(), Some("practice_calendar"));
}

#[test]
fn test_first_match_precedence() {
    let kb = KnowledgeBase::new(vec![
        entry("e1", &["dojo"], &["e1-ja"], &["e1-en"]),
        entry("e2", &["dojo near me"], &["e2-ja"], &["e2-en"]),
    ])
    .unwrap();
    let engine = Engine::new(Arc::new(kb));
    assert_eq!(engine.respond("find a dojo near me", "en"), "e1-en");
}

#[test]
fn test_deterministic_by_default() {
    let engine = builtin_engine();
    let a = engine.respond("サポートに連絡したい", "ja");
    let b = engine.respond("サポートに連絡したい", "ja");
    assert_eq!(a, b);
    assert_eq!(
        a,
        "サポートへのお問い合わせは、アプリ内の『サポート』セクションから行えます。詳細はサポートページをご確認ください。"
    );
}

#[test]
fn test_locale_policy_ignores_typed_language() {
    let engine = builtin_engine().with_policy(LanguagePolicy::Locale);
    let reply = engine.reply("search", "ja");
    assert_eq!(reply.language, Language::Japanese);
    assert!(reply.text.starts_with("検索ワードは"));

    let reply = engine.reply("検索", "en");
    assert_eq!(reply.language, Language::English);
    assert!(reply.text.starts_with("For search keywords"));
}

#[test]
fn test_content_policy_follows_typed_language() {
    let engine = builtin_engine().with_policy(LanguagePolicy::Content);
    let reply = engine.reply("search", "ja");
    assert_eq!(reply.language, Language::English);
    assert!(reply.text.starts_with("For search keywords"));

    let reply = engine.reply("検索", "en");
    assert_eq!(reply.language, Language::Japanese);
    assert!(reply.text.starts_with("検索ワードは"));
}

#[test]
fn test_unmatched_default_uses_ui_locale_under_content_policy() {
    let engine = builtin_engine().with_policy(LanguagePolicy::Content);
    assert_eq!(
        engine.respond("なにこれ", "en"),
        builtin_default_response(Language::English)
    );
}

#[test]
fn test_random_selection_is_seedable() {
    let make = || {
        builtin_engine().with_selector(Box::new(RandomCandidate::seeded(99)))
    };
    let a = make();
    let b = make();
    let support = a.knowledge_base().get("support").unwrap().clone();
    for _ in 0..20 {
        let ra = a.respond("help me, サポート", "en");
        let rb = b.respond("help me, サポート", "en");
        assert_eq!(ra, rb);
        assert!(support.answers_in(Language::English).contains(&ra));
    }
}

#[test]
fn test_localized_default_response() {
    let engine = builtin_engine().with_localizer(Some(Arc::new(FixedLocalizer)));
    assert_eq!(engine.respond("zzz", "ja"), "fallback-ja");
    assert_eq!(engine.respond("zzz", "en"), "fallback-en");
    // Matched replies never consult the localizer.
    assert!(engine.respond("お気に入り", "ja").starts_with("お気に入り機能では"));
}

#[test]
fn test_from_config() {
    let mut cfg = Config::default();
    cfg.language.policy = LanguagePolicy::Content;
    cfg.answers.selection = dojo_core::config::SelectionPolicy::Random;
    cfg.answers.seed = Some(1);
    let engine = Engine::from_config(&cfg, Arc::new(KnowledgeBase::builtin().unwrap()), None);
    assert_eq!(engine.policy(), LanguagePolicy::Content);
    assert_eq!(engine.knowledge_base().len(), 7);
}

#[test]
fn test_evaluate_reports_entry_and_language() {
    let engine = builtin_engine();
    match engine.evaluate("ブックマークしたい", "en") {
        MatchResult::Matched {
            entry, language, ..
        } => {
            assert_eq!(entry.id, "favorites");
            assert_eq!(language, Language::English);
        }
        MatchResult::Unmatched => panic!("expected a match"),
    }
    assert_eq!(engine.evaluate("hello", "en"), MatchResult::Unmatched);
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = Arc::new(builtin_engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.respond("カレンダー", "ja"))
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().starts_with("練習カレンダーでは"));
    }
}
