//! Static UI strings, Japanese and English.

use dojo_core::language::Language;

pub(super) fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    use Language::{English, Japanese};
    let s = match (key, lang) {
        // --- Chat window ---
        ("bot_name", Japanese) => "サポートBot",
        ("bot_name", English) => "Support Bot",
        ("welcome_message", Japanese) => "こんにちは！気軽に何でも聞いてください。",
        ("welcome_message", English) => "Hello! Feel free to ask me anything.",
        ("default_response", Japanese) => "申し訳ありませんが、その内容には対応できません。",
        ("default_response", English) => "I'm sorry, but I can't help with that.",

        // --- History ---
        ("history_header", Japanese) => "会話履歴",
        ("history_header", English) => "Conversation history",
        ("history_empty", Japanese) => "まだ会話がありません。",
        ("history_empty", English) => "No messages yet.",
        ("you_label", Japanese) => "あなた",
        ("you_label", English) => "You",

        // --- FAQ topics ---
        ("faq_header", Japanese) => "よくある質問のトピック:",
        ("faq_header", English) => "Frequently asked topics:",
        ("faq_footer", Japanese) => "上のキーワードを含めて質問してください。",
        ("faq_footer", English) => "Ask a question containing one of the keywords above.",

        // --- Language ---
        ("language_label", Japanese) => "現在の言語:",
        ("language_label", English) => "Current language:",
        ("language_usage", Japanese) => "使い方: /language <ja|en>",
        ("language_usage", English) => "Usage: /language <ja|en>",
        ("language_japanese", _) => "日本語",
        ("language_english", _) => "English",

        // --- Help ---
        ("help_header", Japanese) => "コマンド一覧",
        ("help_header", English) => "Commands",
        ("help_help", Japanese) => "/help — このヘルプを表示",
        ("help_help", English) => "/help — Show this help",
        ("help_language", Japanese) => "/language [ja|en] — 表示言語の確認・切り替え",
        ("help_language", English) => "/language [ja|en] — Show or switch the display language",
        ("help_history", Japanese) => "/history — これまでの会話を表示",
        ("help_history", English) => "/history — Show the conversation so far",
        ("help_faq", Japanese) => "/faq — 答えられる質問のトピックを表示",
        ("help_faq", English) => "/faq — List the topics I can answer",
        ("help_footer", Japanese) => "それ以外のメッセージにはFAQから回答します。",
        ("help_footer", English) => "Any other message is answered from the FAQ.",

        _ => return None,
    };
    Some(s)
}
