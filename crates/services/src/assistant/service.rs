use std::sync::Arc;

use drill_core::model::{Question, QuestionBank};

use super::client::{AssistantConfig, CompletionClient, HttpCompletionClient};
use super::prompts::{feedback_prompt, hint_prompt};
use crate::error::AssistError;

/// Front door to the external completion service.
///
/// Disabled (every request rejected with `AssistError::NotConfigured`) when
/// built without a client.
#[derive(Clone, Default)]
pub struct AssistService {
    client: Option<Arc<dyn CompletionClient>>,
}

impl AssistService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        Self {
            client: config.map(|config| {
                Arc::new(HttpCompletionClient::new(config)) as Arc<dyn CompletionClient>
            }),
        }
    }

    #[must_use]
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.client.is_some()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.client.as_deref().map(|client| client.model())
    }

    /// Send a prompt and return the completion text.
    ///
    /// # Errors
    ///
    /// Returns `AssistError::NotConfigured` without any network call when
    /// disabled, otherwise whatever the client reports.
    pub async fn complete(&self, prompt: &str) -> Result<String, AssistError> {
        let client = self.client.as_ref().ok_or(AssistError::NotConfigured)?;
        client.complete(prompt).await
    }

    /// # Errors
    ///
    /// See [`AssistService::complete`].
    pub async fn hint(&self, bank: &QuestionBank, question: &Question) -> Result<String, AssistError> {
        self.complete(&hint_prompt(question, bank.schema_tables(question)))
            .await
    }

    /// # Errors
    ///
    /// See [`AssistService::complete`].
    pub async fn feedback(&self, question: &Question, draft: &str) -> Result<String, AssistError> {
        self.complete(&feedback_prompt(question, draft)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionClient for Recording {
        fn model(&self) -> &str {
            "recording"
        }

        async fn complete(&self, prompt: &str) -> Result<String, AssistError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("ok".into())
        }
    }

    #[tokio::test]
    async fn disabled_service_rejects_without_calling() {
        let service = AssistService::disabled();
        assert!(!service.enabled());
        assert!(service.model().is_none());
        let err = service.complete("prompt").await.unwrap_err();
        assert!(matches!(err, AssistError::NotConfigured));
    }

    #[tokio::test]
    async fn hint_and_feedback_use_their_prompts() {
        let client = Arc::new(Recording {
            prompts: Mutex::new(Vec::new()),
        });
        let service = AssistService::with_client(client.clone());
        let bank = QuestionBank::builtin();
        let question = bank.get(1).unwrap();

        assert_eq!(service.hint(&bank, question).await.unwrap(), "ok");
        assert_eq!(service.feedback(question, "SELECT 1;").await.unwrap(), "ok");
        assert_eq!(service.model(), Some("recording"));

        let prompts = client.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("You are a SQL teaching assistant."));
        assert!(prompts[1].starts_with("You are a SQL expert"));
        assert!(prompts[1].contains("SELECT 1;"));
    }
}
