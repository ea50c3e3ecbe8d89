use tracing::warn;

use crate::llm::models::Message;
use crate::resolver::{Language, Resolver};

/// Whether a chat session should start with AI answers enabled: a provider
/// is configured and accepts the credential.
pub async fn remote_usable(resolver: &Resolver) -> bool {
    let Some(provider) = resolver.provider() else {
        return false;
    };
    match provider.validate().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not validate API key, using predefined responses: {}", e);
            false
        }
    }
}

/// Number of remote answers a chat session may still request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageQuota {
    remaining: u32,
}

impl UsageQuota {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Takes one interaction if any is left.
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// In-memory practice conversation. Nothing here is persisted.
pub struct ChatSession {
    language: Language,
    use_remote: bool,
    quota: UsageQuota,
    transcript: Vec<Message>,
}

impl ChatSession {
    pub fn new(language: Language, use_remote: bool, quota: UsageQuota) -> Self {
        Self {
            language,
            use_remote,
            quota,
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn quota(&self) -> UsageQuota {
        self.quota
    }

    pub fn uses_remote(&self) -> bool {
        self.use_remote && self.quota.remaining() > 0
    }

    pub fn set_remote(&mut self, enabled: bool) {
        self.use_remote = enabled;
    }

    /// Records the user message, answers it and records the reply.
    pub async fn send(&mut self, resolver: &Resolver, text: &str) -> String {
        self.transcript.push(Message::user(text));

        let reply = if self.use_remote && self.quota.try_consume() {
            resolver.resolve(text, self.language).await
        } else {
            resolver.fallback(text, self.language)
        };

        self.transcript.push(Message::assistant(reply.clone()));
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::models::Role;
    use crate::resolver::{ResolverSettings, ResponseTable};
    use std::sync::Arc;

    fn offline_resolver() -> Resolver {
        Resolver::new(None, Arc::new(ResponseTable::builtin()), ResolverSettings::default())
    }

    #[test]
    fn test_quota_stops_at_zero() {
        let mut quota = UsageQuota::new(1);
        assert!(quota.try_consume());
        assert!(!quota.try_consume());
        assert_eq!(quota.remaining(), 0);
    }

    #[tokio::test]
    async fn test_send_records_transcript_and_spends_quota() {
        let resolver = offline_resolver();
        let mut session = ChatSession::new(Language::En, true, UsageQuota::new(2));

        session.send(&resolver, "hello").await;
        session.send(&resolver, "help").await;
        session.send(&resolver, "again").await;

        assert_eq!(session.quota().remaining(), 0);
        assert!(!session.uses_remote());
        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [Role::User, Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
    }

    #[tokio::test]
    async fn test_remote_usable_follows_key_validation() {
        use crate::llm::openai::OpenAiProvider;
        use std::time::Duration;

        let mut server = mockito::Server::new_async().await;
        let resolver = Resolver::new(
            Some(Arc::new(
                OpenAiProvider::new(
                    "sk-test".to_string(),
                    server.url(),
                    "gpt-4o".to_string(),
                    Duration::from_secs(5),
                )
                .unwrap(),
            )),
            Arc::new(ResponseTable::builtin()),
            ResolverSettings::default(),
        );

        let _rejected = server.mock("GET", "/models").with_status(401).create_async().await;
        assert!(!remote_usable(&resolver).await);

        server.reset_async().await;
        let _accepted = server
            .mock("GET", "/models")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;
        assert!(remote_usable(&resolver).await);

        assert!(!remote_usable(&offline_resolver()).await);
    }

    #[tokio::test]
    async fn test_offline_session_keeps_quota() {
        let resolver = offline_resolver();
        let mut session = ChatSession::new(Language::Es, false, UsageQuota::new(2));

        let reply = session.send(&resolver, "hola").await;

        assert!(reply.starts_with("¡Hola!"));
        assert_eq!(session.quota().remaining(), 2);
    }
}
