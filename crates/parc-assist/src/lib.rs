//! Client contract for the park-management chat assistant.
//!
//! The assistant is an external collaborator: it receives a free-text query
//! and returns a text response with optional source labels and quick-action
//! suggestions. Its failures never become fatal faults here; a backend error
//! is absorbed locally and replaced by a user-visible apology.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Canned prompts offered next to the input box.
pub const QUICK_SUGGESTIONS: [&str; 5] = [
    "Matériels sous garantie ce mois",
    "Livraisons en retard",
    "Commandes en attente",
    "Fournisseurs actifs",
    "Demandes non traitées",
];

/// Apology substituted when the backend cannot be reached.
pub const FALLBACK_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

/// A free-text question for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantQuery {
    pub query: String,
}

impl AssistantQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// The assistant's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub quick_actions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned an invalid reply: {0}")]
    InvalidReply(String),
}

/// The external backend seam.
pub trait AssistantBackend {
    fn ask(&self, query: &AssistantQuery) -> Result<AssistantReply, AssistantError>;
}

/// The reply shown when the backend fails.
pub fn fallback_reply() -> AssistantReply {
    AssistantReply {
        response: FALLBACK_MESSAGE.to_string(),
        sources: Vec::new(),
        quick_actions: QUICK_SUGGESTIONS.iter().map(ToString::to_string).collect(),
    }
}

/// Ask the backend, substituting the apology on any error.
pub fn ask_with_fallback(
    backend: &dyn AssistantBackend,
    query: &AssistantQuery,
) -> AssistantReply {
    match backend.ask(query) {
        Ok(reply) => reply,
        Err(error) => {
            warn!(%error, "assistant backend failed, substituting fallback reply");
            fallback_reply()
        }
    }
}

/// Canned backend for tests and offline demos.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Vec<(String, AssistantReply)>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reply for an exact query.
    pub fn with_reply(mut self, query: impl Into<String>, reply: AssistantReply) -> Self {
        self.replies.push((query.into(), reply));
        self
    }
}

impl AssistantBackend for ScriptedBackend {
    fn ask(&self, query: &AssistantQuery) -> Result<AssistantReply, AssistantError> {
        self.replies
            .iter()
            .find(|(expected, _)| *expected == query.query)
            .map(|(_, reply)| reply.clone())
            .ok_or_else(|| AssistantError::Unreachable("no scripted reply".to_string()))
    }
}
