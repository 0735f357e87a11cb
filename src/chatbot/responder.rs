//! Reply production: generative backend first, canned pool as the
//! terminal fallback.
//!
//! The responder never returns an error. A backend failure of any kind is
//! logged and downgraded to a uniform-random pick from the matched
//! intent's pool; with a non-empty pool that pick cannot fail.

use rand::Rng;
use std::sync::Arc;

use crate::providers::CompletionBackend;

use super::intent::{classify, Intent};
use super::replies;

/// Fixed product description handed to the generative backend.
const SYSTEM_PROMPT: &str = "You are a professional and friendly LawBook customer support assistant.\n\
LawBook is a lawyer appointment booking platform with features like:\n\
- Search and filter lawyers by specialty, experience, and price ($110-$200)\n\
- Specialties: Corporate, Criminal, Family, IP, Immigration, Tax, Real Estate, Employment, Bankruptcy, Estate Planning\n\
- Secure Stripe payments\n\
- Real-time chat with lawyers\n\
- Dark mode and advanced search\n\
- Mobile responsive PWA app\n\
- Lawyer verification and ratings\n\
- Easy booking, rescheduling, and cancellation with full refunds\n\n\
Answer user questions about the platform in a helpful, conversational way. Keep responses concise but informative.\n\
If users ask about booking, features, payments, specialties, pricing, account, cancellation, or anything LawBook-related, provide helpful guidance.\n\
Always be professional and courteous.";

/// Picks one reply out of a pool. Injectable so tests can pin the choice.
pub trait ReplySelector: Send + Sync {
    fn pick<'a>(&self, pool: &'a [&'static str]) -> &'a str;
}

/// Uniform-random selection.
pub struct RandomSelector;

impl ReplySelector for RandomSelector {
    fn pick<'a>(&self, pool: &'a [&'static str]) -> &'a str {
        pool[rand::thread_rng().gen_range(0..pool.len())]
    }
}

/// The chatbot responder: classify, then reply.
pub struct ChatResponder {
    backend: Option<Arc<dyn CompletionBackend>>,
    selector: Box<dyn ReplySelector>,
}

impl ChatResponder {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self {
            backend,
            selector: Box::new(RandomSelector),
        }
    }

    pub fn with_selector(
        backend: Option<Arc<dyn CompletionBackend>>,
        selector: Box<dyn ReplySelector>,
    ) -> Self {
        Self { backend, selector }
    }

    /// Produce a reply for one message. Infallible by design: backend
    /// errors are absorbed and the canned pool answers instead.
    pub async fn respond(&self, message: &str) -> String {
        let intent = classify(message);
        tracing::debug!("Classified message as intent '{}'", intent);

        if let Some(backend) = &self.backend {
            match backend.complete(SYSTEM_PROMPT, message).await {
                Ok(text) => return text.trim().to_string(),
                Err(e) => {
                    tracing::warn!("{} backend failed, using canned reply: {}", backend.name(), e);
                }
            }
        }

        self.canned_reply(intent).to_string()
    }

    fn canned_reply(&self, intent: Intent) -> &'static str {
        self.selector.pick(replies::pool(intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::provider::{ProviderError, Result as ProviderResult};
    use async_trait::async_trait;

    /// Always picks the first reply.
    struct FirstSelector;

    impl ReplySelector for FirstSelector {
        fn pick<'a>(&self, pool: &'a [&'static str]) -> &'a str {
            pool[0]
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _system: &str, _user: &str) -> ProviderResult<String> {
            Err(ProviderError::Timeout)
        }
    }

    struct EchoBackend;

    #[async_trait]
    impl CompletionBackend for EchoBackend {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, _system: &str, user: &str) -> ProviderResult<String> {
            Ok(format!("  echo: {}  ", user))
        }
    }

    #[tokio::test]
    async fn test_no_backend_picks_from_pool() {
        let responder = ChatResponder::new(None);

        for _ in 0..20 {
            let reply = responder.respond("hi there").await;
            assert!(replies::pool(Intent::Greeting).contains(&reply.as_str()));
        }
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_pool() {
        let responder = ChatResponder::new(Some(Arc::new(FailingBackend)));

        let reply = responder.respond("how much does it cost?").await;
        assert!(replies::pool(Intent::Price).contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn test_backend_success_returns_trimmed_text() {
        let responder = ChatResponder::new(Some(Arc::new(EchoBackend)));

        let reply = responder.respond("hello").await;
        assert_eq!(reply, "echo: hello");
    }

    #[tokio::test]
    async fn test_pinned_selector_is_deterministic() {
        let responder = ChatResponder::with_selector(None, Box::new(FirstSelector));

        let reply = responder.respond("cancel my booking").await;
        assert_eq!(reply, replies::pool(Intent::Cancel)[0]);
    }

    #[tokio::test]
    async fn test_unmatched_message_gets_help_reply() {
        let responder = ChatResponder::with_selector(None, Box::new(FirstSelector));

        let reply = responder.respond("asdkjasd").await;
        assert_eq!(reply, replies::pool(Intent::Help)[0]);
    }

    #[tokio::test]
    async fn test_empty_message_still_replies() {
        let responder = ChatResponder::new(None);

        let reply = responder.respond("   ").await;
        assert!(!reply.is_empty());
    }
}
