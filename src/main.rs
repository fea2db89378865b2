mod commands;
mod gateway;
mod i18n;

use clap::{Parser, Subcommand};
use dojo_channels::stdio::{OutputFormat, StdioChannel, CHANNEL_NAME};
use dojo_core::{
    config::{self, shellexpand, Config},
    language::Language,
    traits::{Channel, Localizer},
};
use dojo_faq::{Engine, KnowledgeBase};
use i18n::Catalog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "dojo-bot",
    version,
    about = "Dojo Support Bot: bilingual FAQ chatbot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the bot in this terminal.
    Chat {
        /// Write replies as JSON lines instead of text.
        #[arg(long)]
        json: bool,
        /// UI locale to start with (overrides `[language].default_locale`).
        #[arg(long)]
        locale: Option<String>,
    },
    /// Send a one-shot message and print the reply.
    Ask {
        /// UI locale used to pick the answer language.
        #[arg(long)]
        locale: Option<String>,
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Print the knowledge base.
    Faq {
        /// Print the JSON knowledge-base file format.
        #[arg(long)]
        json: bool,
    },
    /// Validate config and knowledge base.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg)?;

    match cli.command {
        Commands::Chat { json, locale } => {
            let (engine, catalog) = build_engine(&cfg)?;
            let locale = locale.unwrap_or_else(|| cfg.language.default_locale.clone());
            let format = if json {
                OutputFormat::JsonLines
            } else {
                OutputFormat::Text
            };
            let mut stdio = StdioChannel::new(format)
                .with_label(&catalog.get("bot_name", Language::from_locale(&locale)));
            for lang in Language::ALL {
                stdio = stdio.with_language_label(lang, &catalog.get("bot_name", lang));
            }

            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            channels.insert(CHANNEL_NAME.to_string(), Arc::new(stdio));

            tracing::info!("{} starting ({locale})", cfg.bot.name);
            let mut gw = gateway::Gateway::new(engine, catalog, channels, &locale);
            gw.run().await?;
        }
        Commands::Ask { locale, message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: dojo-bot ask <message>");
            }
            let (engine, _) = build_engine(&cfg)?;
            let locale = locale.unwrap_or_else(|| cfg.language.default_locale.clone());
            println!("{}", engine.respond(&message.join(" "), &locale));
        }
        Commands::Faq { json } => {
            let kb = KnowledgeBase::from_config(&cfg.knowledge)?;
            if json {
                println!("{}", kb.to_json_pretty()?);
            } else {
                print_knowledge_base(&kb);
            }
        }
        Commands::Check => {
            println!("{}: Configuration Check\n", cfg.bot.name);
            println!("Config: {}", cli.config);
            println!("Language policy: {}", cfg.language.policy.display_name());
            println!("Default locale: {}", cfg.language.default_locale);
            println!("Answer selection: {}", cfg.answers.selection.display_name());
            let source = if cfg.knowledge.path.trim().is_empty() {
                "built-in"
            } else {
                cfg.knowledge.path.as_str()
            };
            println!("Knowledge base: {source}");

            let kb = KnowledgeBase::from_config(&cfg.knowledge)?;
            let catalog = Catalog::from_overrides(&cfg.i18n);
            println!("  entries: {}", kb.len());
            println!(
                "  keywords: {}",
                kb.entries().iter().map(|e| e.keywords.len()).sum::<usize>()
            );
            println!("  i18n overrides: {}", catalog.override_count());
            println!("\nOK");
        }
    }

    Ok(())
}

/// Knowledge base, catalog and engine, wired from config.
fn build_engine(cfg: &Config) -> anyhow::Result<(Arc<Engine>, Arc<Catalog>)> {
    let kb = Arc::new(KnowledgeBase::from_config(&cfg.knowledge)?);
    let catalog = Arc::new(Catalog::from_overrides(&cfg.i18n));
    let localizer: Arc<dyn Localizer> = catalog.clone();
    let engine = Engine::from_config(cfg, kb, Some(localizer));
    Ok((Arc::new(engine), catalog))
}

/// Logs go to stderr so stdout carries only replies. `RUST_LOG` wins over
/// `[bot].log_level`. The returned guard must live until exit to flush the file.
fn init_logging(cfg: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.bot.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if cfg.bot.log_to_file {
        let dir = PathBuf::from(shellexpand(&cfg.bot.data_dir)).join("logs");
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::daily(&dir, "dojo-bot.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(guard)
}

fn print_knowledge_base(kb: &KnowledgeBase) {
    for (i, entry) in kb.entries().iter().enumerate() {
        println!("{}. [{}]", i + 1, entry.id);
        println!("   keywords: {}", entry.keywords.join(", "));
        for lang in Language::ALL {
            for answer in entry.answers_in(lang) {
                println!("   {}: {answer}", lang.code());
            }
        }
        println!();
    }
}
