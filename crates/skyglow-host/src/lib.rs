//! Host capabilities for applying themes outside the core resolver.
//!
//! A [`Host`] bundles the optional side-effecting capabilities the theme
//! orchestration needs:
//! - persistent key-value storage ([`KeyValueStore`])
//! - a document root to toggle classes and CSS properties on ([`Document`])
//! - periodic timers ([`Scheduler`])
//! - the OS color-scheme preference ([`ColorSchemeProbe`])
//!
//! Every capability is optional. [`Host::headless`] carries none of them,
//! which turns all theme side effects into silent no-ops (server rendering,
//! batch jobs, tests).

pub mod color_scheme;
pub mod document;
pub mod scheduler;
pub mod storage;
pub mod theme_bridge;

pub use color_scheme::{ColorFgBgProbe, ColorSchemeProbe, FixedColorScheme};
pub use document::{Document, MemoryDocument, RootElement, ScriptDocument};
pub use scheduler::{ManualScheduler, Scheduler, TickFn, TimerHandle, TokioScheduler};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

/// The capabilities available in the current execution context.
#[derive(Clone, Default)]
pub struct Host {
    storage: Option<Arc<dyn KeyValueStore>>,
    document: Option<Arc<dyn Document>>,
    scheduler: Option<Arc<dyn Scheduler>>,
    color_scheme: Option<Arc<dyn ColorSchemeProbe>>,
}

impl Host {
    /// A host with no capabilities.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_document(mut self, document: Arc<dyn Document>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn with_color_scheme(mut self, probe: Arc<dyn ColorSchemeProbe>) -> Self {
        self.color_scheme = Some(probe);
        self
    }

    pub fn storage(&self) -> Option<&dyn KeyValueStore> {
        self.storage.as_deref()
    }

    pub fn document(&self) -> Option<&dyn Document> {
        self.document.as_deref()
    }

    pub fn scheduler(&self) -> Option<&dyn Scheduler> {
        self.scheduler.as_deref()
    }

    pub fn color_scheme(&self) -> Option<&dyn ColorSchemeProbe> {
        self.color_scheme.as_deref()
    }

    /// True when at least one capability is present.
    pub fn is_interactive(&self) -> bool {
        self.storage.is_some()
            || self.document.is_some()
            || self.scheduler.is_some()
            || self.color_scheme.is_some()
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("storage", &self.storage.is_some())
            .field("document", &self.document.is_some())
            .field("scheduler", &self.scheduler.is_some())
            .field("color_scheme", &self.color_scheme.is_some())
            .finish()
    }
}
