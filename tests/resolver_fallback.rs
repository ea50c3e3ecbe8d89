#[cfg(test)]
mod tests {
    use promptlab::config::AppConfig;
    use promptlab::resolver::{Language, Resolver, ResolverSettings, ResponseTable};
    use std::sync::Arc;

    fn offline(table: ResponseTable) -> Resolver {
        Resolver::new(None, Arc::new(table), ResolverSettings::default())
    }

    fn greeting_table() -> ResponseTable {
        ResponseTable::builder()
            .entry(Language::Es, "hola", "R1")
            .entry(Language::Es, "ayuda", "R2")
            .default_reply(Language::Es, "ES-DEFAULT")
            .entry(Language::En, "exercise", "EN-EXERCISE")
            .default_reply(Language::En, "EN-DEFAULT")
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_config_has_no_provider() {
        let resolver = Resolver::from_config(&AppConfig::default());
        assert!(resolver.provider().is_none());
    }

    #[test]
    fn test_provider_name_ignores_case() {
        let mut config = AppConfig::default();
        config.llm.api_key = "sk-real".to_string();
        config.llm.provider = "OpenAI".to_string();
        assert!(Resolver::from_config(&config).provider().is_some());
    }

    #[tokio::test]
    async fn test_first_declared_keyword_wins() {
        let resolver = offline(greeting_table());
        assert_eq!(resolver.resolve("hola, necesito ayuda", Language::Es).await, "R1");
        assert_eq!(resolver.resolve("necesito ayuda, hola", Language::Es).await, "R1");
        assert_eq!(resolver.resolve("solo ayuda", Language::Es).await, "R2");
    }

    #[tokio::test]
    async fn test_keyword_match_ignores_case() {
        let resolver = offline(greeting_table());
        assert_eq!(resolver.resolve("EXERCISE please", Language::En).await, "EN-EXERCISE");
    }

    #[tokio::test]
    async fn test_no_match_returns_default() {
        let resolver = offline(greeting_table());
        assert_eq!(resolver.resolve("xyzzy", Language::Es).await, "ES-DEFAULT");
        assert_eq!(resolver.resolve("", Language::En).await, "EN-DEFAULT");
    }

    #[tokio::test]
    async fn test_unknown_language_uses_english() {
        let resolver = offline(ResponseTable::builtin());
        for msg in ["hello", "prompt tips", "xyzzy", "hola"] {
            assert_eq!(
                resolver.resolve(msg, Language::from_tag("fr")).await,
                resolver.resolve(msg, Language::from_tag("en")).await,
            );
        }
        assert_eq!(Language::from_tag("ES"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[tokio::test]
    async fn test_builtin_replies() {
        let resolver = offline(ResponseTable::builtin());
        let table = resolver.table();

        let practice = resolver.resolve("Quiero hacer un Ejercicio", Language::Es).await;
        assert!(practice.contains("Módulo 1.3"));

        // "prompt" is declared before "help"
        let reply = resolver.resolve("help me write a prompt", Language::En).await;
        assert!(reply.starts_with("A good prompt"));

        assert_eq!(resolver.resolve("xyzzy", Language::Es).await, table.default_reply(Language::Es));
    }

    #[tokio::test]
    async fn test_replies_are_never_empty() {
        let resolver = offline(ResponseTable::builtin());
        for msg in ["", "   ", "hola", "¿qué?", "PRACTICE", "🤖"] {
            for lang in [Language::Es, Language::En] {
                assert!(!resolver.resolve(msg, lang).await.is_empty());
            }
        }
    }
}
