pub mod commands;
pub mod session;

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::cli::commands::Commands;
use crate::cli::session::{remote_usable, ChatSession, UsageQuota};
use crate::config::AppConfig;
use crate::llm::ProviderFactory;
use crate::resolver::{Language, Resolver};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

pub async fn run_cli(command: Commands, config_path: String) -> Result<(), CliError> {
    let config = AppConfig::load(&config_path)?;
    let resolver = Resolver::from_config(&config);
    let language = |tag: Option<String>| {
        Language::from_tag(tag.as_deref().unwrap_or(&config.chat.default_language))
    };

    match command {
        Commands::Serve => Err(CliError::Usage(
            "serve is handled by the server entry point".to_string(),
        )),
        Commands::Ask { message, language: tag } => {
            if message.trim().is_empty() {
                return Err(CliError::Usage("Message is required".to_string()));
            }
            println!("{}", resolver.resolve(&message, language(tag)).await);
            Ok(())
        }
        Commands::Validate => {
            match resolver.provider() {
                None => println!("{}", ProviderFactory::unavailable_reason(&config)),
                Some(provider) => match provider.validate().await {
                    Ok(()) => println!("API key is valid"),
                    Err(e) => println!("API key validation failed: {}", e),
                },
            }
            Ok(())
        }
        Commands::Chat { language: tag, offline } => {
            let use_remote = !offline && remote_usable(&resolver).await;
            let session = ChatSession::new(
                language(tag),
                use_remote,
                UsageQuota::new(config.chat.free_interactions),
            );
            run_repl(session, &resolver).await
        }
    }
}

async fn run_repl(mut session: ChatSession, resolver: &Resolver) -> Result<(), CliError> {
    println!("--- Prompt Design Practice ---");
    if session.uses_remote() {
        println!("AI answers left: {}", session.quota().remaining());
    } else {
        println!("Limited mode: using predefined responses.");
    }
    println!("Type /ai on, /ai off or /exit.");
    println!("------------------------------");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nYou> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let text = line.trim();

        match text {
            "" => continue,
            "/exit" | "/quit" => break,
            "/ai on" => {
                if resolver.provider().is_none() {
                    println!("No API key configured.");
                } else {
                    session.set_remote(true);
                    println!("AI answers left: {}", session.quota().remaining());
                }
                continue;
            }
            "/ai off" => {
                session.set_remote(false);
                continue;
            }
            _ => {}
        }

        let reply = session.send(resolver, text).await;
        println!("Assistant> {}", reply);
        if session.uses_remote() {
            println!("(AI answers left: {})", session.quota().remaining());
        }
    }

    Ok(())
}
