//! Write-once holder for the loaded church knowledge.

use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};

use crate::domain::{ChurchKnowledge, load_knowledge_or_default};
use crate::ports::ContentProvider;

/// Shared snapshot of [`ChurchKnowledge`].
///
/// Empty until a load completes; readers that arrive earlier see `None` and
/// compose without church-specific context. Once filled it never changes.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeSlot {
    inner: Arc<OnceLock<ChurchKnowledge>>,
}

impl KnowledgeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&ChurchKnowledge> {
        self.inner.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Store the snapshot. Returns `false` if one was already stored.
    pub fn fill(&self, knowledge: ChurchKnowledge) -> bool {
        self.inner.set(knowledge).is_ok()
    }

    /// Load from the provider (default record on failure) and store it.
    pub fn load_from(&self, provider: &(impl ContentProvider + ?Sized)) -> bool {
        if self.is_loaded() {
            return false;
        }
        self.fill(load_knowledge_or_default(provider))
    }

    /// Load on a background thread.
    pub fn spawn_load<P>(&self, provider: P) -> JoinHandle<()>
    where
        P: ContentProvider + Send + 'static,
    {
        let slot = self.clone();
        thread::spawn(move || {
            if slot.load_from(&provider) {
                tracing::debug!("Church knowledge loaded");
            }
        })
    }
}
