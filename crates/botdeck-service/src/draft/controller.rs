use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use botdeck_core::config::AutosaveConfig;
use botdeck_core::traits::SectionStore;
use botdeck_core::types::BotId;
use botdeck_core::{AppError, AppResult};
use botdeck_entity::config::{BotConfigSnapshot, ConfigSection, SectionData};

use super::state::{BeginSave, DraftStatus, SectionDraft};

/// Configuration store the controller persists through.
pub type DynConfigStore = Arc<dyn SectionStore<ConfigSection, SectionData>>;

/// Result of an explicit or autosave-triggered save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A snapshot was persisted and promoted to the section baseline.
    Saved,
    /// The section was already clean; no store call was made.
    NoChanges,
    /// A save was already in flight; the section will be re-evaluated
    /// when it settles.
    Coalesced,
}

/// Verdict of the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Every section is clean; leaving loses nothing.
    Allow,
    /// At least one section is dirty or saving; the caller must confirm
    /// that unsaved edits may be discarded.
    Block,
}

impl NavigationDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationDecision::Block)
    }
}

struct Inner {
    sections: HashMap<ConfigSection, SectionDraft>,
    timers: HashMap<ConfigSection, JoinHandle<()>>,
}

/// Tracks unsaved edits across a bot's configuration sections.
///
/// Each section keeps an independent draft; edits restart a per-section
/// debounce timer that autosaves after the configured quiet period.
/// Concurrent saves of the same section coalesce into a single in-flight
/// store call. After [`close`](Self::close), late timer fires and save
/// completions are discarded via an epoch check rather than applied to
/// dead state.
///
/// The inner mutex is only ever held for state transitions, never across
/// a store await.
pub struct DraftController {
    bot_id: BotId,
    store: DynConfigStore,
    autosave: AutosaveConfig,
    inner: Mutex<Inner>,
    /// Bumped on close; async completions carrying an older epoch are stale.
    epoch: AtomicU64,
    closed: AtomicBool,
    /// Handle to our own `Arc`, handed to spawned autosave timers so they
    /// do not keep a closed controller alive.
    weak_self: Weak<Self>,
}

impl DraftController {
    /// Opens a controller by loading every section from the store.
    pub async fn open(
        bot_id: BotId,
        store: DynConfigStore,
        autosave: AutosaveConfig,
    ) -> AppResult<Arc<Self>> {
        let sections = store.load_all(bot_id).await?;
        info!(bot_id = %bot_id, sections = sections.len(), "configuration drafts loaded");
        Ok(Self::from_sections(bot_id, store, autosave, sections))
    }

    /// Builds a controller from an already-loaded configuration snapshot.
    pub fn from_snapshot(
        bot_id: BotId,
        store: DynConfigStore,
        autosave: AutosaveConfig,
        snapshot: BotConfigSnapshot,
    ) -> Arc<Self> {
        Self::from_sections(bot_id, store, autosave, snapshot.into_sections())
    }

    fn from_sections(
        bot_id: BotId,
        store: DynConfigStore,
        autosave: AutosaveConfig,
        sections: Vec<(ConfigSection, SectionData)>,
    ) -> Arc<Self> {
        let sections = sections
            .into_iter()
            .map(|(section, data)| (section, SectionDraft::new(section, data)))
            .collect();
        Arc::new_cyclic(|weak_self| Self {
            bot_id,
            store,
            autosave,
            inner: Mutex::new(Inner {
                sections,
                timers: HashMap::new(),
            }),
            epoch: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            weak_self: weak_self.clone(),
        })
    }

    pub fn bot_id(&self) -> BotId {
        self.bot_id
    }

    /// Replaces a section's working copy.
    ///
    /// A dirtying edit restarts the section's autosave debounce timer; an
    /// edit that reverts the section to its baseline cancels it. Returns
    /// whether the section is dirty after the edit.
    pub fn record_edit(&self, section: ConfigSection, data: SectionData) -> AppResult<bool> {
        if data.section() != section {
            return Err(AppError::validation(format!(
                "payload is for section {}, not {section}",
                data.section()
            )));
        }
        self.ensure_open()?;

        let mut inner = self.lock_inner()?;
        let draft = inner
            .sections
            .get_mut(&section)
            .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))?;
        let dirty = draft.record_edit(data);

        if dirty && self.autosave.enabled {
            self.restart_timer(&mut inner, section);
        } else if let Some(handle) = inner.timers.remove(&section) {
            handle.abort();
        }
        Ok(dirty)
    }

    /// Validates and persists the section's working copy.
    ///
    /// A clean section returns [`SaveOutcome::NoChanges`] without touching
    /// the store; a section already being saved returns
    /// [`SaveOutcome::Coalesced`] and is re-evaluated when the in-flight
    /// save settles. On persistence failure the draft stays dirty and the
    /// debounce timer restarts so the edits are retried.
    pub async fn save(&self, section: ConfigSection) -> AppResult<SaveOutcome> {
        self.ensure_open()?;
        let epoch = self.epoch.load(Ordering::SeqCst);

        let snapshot = {
            let mut inner = self.lock_inner()?;
            let draft = inner
                .sections
                .get_mut(&section)
                .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))?;
            match draft.begin_save() {
                BeginSave::AlreadySaving => return Ok(SaveOutcome::Coalesced),
                BeginSave::Clean => return Ok(SaveOutcome::NoChanges),
                BeginSave::Snapshot(data) => {
                    if let Some(handle) = inner.timers.remove(&section) {
                        handle.abort();
                    }
                    data
                }
            }
        };

        if let Err(err) = snapshot.validate() {
            // Invalid drafts stay dirty but are not retried on a timer;
            // only a further edit can make them saveable.
            let mut inner = self.lock_inner()?;
            if let Some(draft) = inner.sections.get_mut(&section) {
                draft.fail_save();
            }
            warn!(bot_id = %self.bot_id, section = %section, error = %err, "draft failed validation");
            return Err(err);
        }

        let result = self
            .store
            .save_section(self.bot_id, section, snapshot.clone())
            .await;

        if self.closed.load(Ordering::SeqCst) || self.epoch.load(Ordering::SeqCst) != epoch {
            debug!(bot_id = %self.bot_id, section = %section, "discarding save completion for closed controller");
            return Err(AppError::stale_callback(
                "save settled after the controller was closed",
            ));
        }

        let mut inner = self.lock_inner()?;
        let draft = inner
            .sections
            .get_mut(&section)
            .ok_or_else(|| AppError::stale_callback("section draft no longer exists"))?;

        match result {
            Ok(()) => {
                let still_dirty = draft.complete_save(snapshot, Utc::now());
                info!(bot_id = %self.bot_id, section = %section, "configuration section saved");
                if still_dirty && self.autosave.enabled {
                    self.restart_timer(&mut inner, section);
                }
                Ok(SaveOutcome::Saved)
            }
            Err(err) => {
                draft.fail_save();
                warn!(bot_id = %self.bot_id, section = %section, error = %err, "section save failed, edits kept");
                if self.autosave.enabled {
                    self.restart_timer(&mut inner, section);
                }
                Err(err)
            }
        }
    }

    /// Saves every dirty section, stopping at the first failure.
    pub async fn save_all(&self) -> AppResult<()> {
        for section in ConfigSection::ALL {
            self.save(section).await?;
        }
        Ok(())
    }

    pub fn status(&self, section: ConfigSection) -> AppResult<DraftStatus> {
        let inner = self.lock_inner()?;
        inner
            .sections
            .get(&section)
            .map(SectionDraft::status)
            .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))
    }

    pub fn is_dirty(&self, section: ConfigSection) -> AppResult<bool> {
        let inner = self.lock_inner()?;
        inner
            .sections
            .get(&section)
            .map(SectionDraft::is_dirty)
            .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))
    }

    pub fn any_dirty(&self) -> AppResult<bool> {
        let inner = self.lock_inner()?;
        Ok(inner
            .sections
            .values()
            .any(|draft| draft.status() != DraftStatus::Clean))
    }

    /// The working copy of a section, as the editor currently sees it.
    pub fn working(&self, section: ConfigSection) -> AppResult<SectionData> {
        let inner = self.lock_inner()?;
        inner
            .sections
            .get(&section)
            .map(|draft| draft.working().clone())
            .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))
    }

    pub fn last_saved_at(&self, section: ConfigSection) -> AppResult<Option<DateTime<Utc>>> {
        let inner = self.lock_inner()?;
        inner
            .sections
            .get(&section)
            .map(SectionDraft::last_saved_at)
            .ok_or_else(|| AppError::not_found(format!("no draft for section {section}")))
    }

    /// Whether leaving the editor would lose unsaved edits.
    ///
    /// Sections that are saving also block: the save has not settled, so
    /// its outcome is unknown.
    pub fn confirm_navigation(&self) -> NavigationDecision {
        match self.any_dirty() {
            Ok(false) => NavigationDecision::Allow,
            // A poisoned lock means the draft state is unknowable; block.
            Ok(true) | Err(_) => NavigationDecision::Block,
        }
    }

    /// Shuts the controller down: cancels every pending autosave timer and
    /// marks in-flight save completions stale. Unsaved edits are discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut inner) = self.inner.lock() {
            for (_, handle) in inner.timers.drain() {
                handle.abort();
            }
            inner.sections.clear();
        }
        info!(bot_id = %self.bot_id, "draft controller closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.is_closed() {
            Err(AppError::stale_callback("draft controller is closed"))
        } else {
            Ok(())
        }
    }

    fn lock_inner(&self) -> AppResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("draft controller lock poisoned"))
    }

    /// (Re)arms the debounce timer for a section. An existing timer is
    /// aborted first, so the quiet period always measures from the latest
    /// edit.
    ///
    /// The spawned task reaches the controller through a `Weak` upgrade,
    /// which keeps a pending timer from pinning a dropped controller alive.
    fn restart_timer(&self, inner: &mut Inner, section: ConfigSection) {
        if let Some(handle) = inner.timers.remove(&section) {
            handle.abort();
        }

        let weak = self.weak_self.clone();
        let epoch = self.epoch.load(Ordering::SeqCst);
        let quiet = self.autosave.debounce();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if controller.epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            match controller.save(section).await {
                Ok(outcome) => {
                    debug!(section = %section, ?outcome, "autosave fired");
                }
                Err(err) => {
                    warn!(section = %section, error = %err, "autosave failed");
                }
            }
        });
        inner.timers.insert(section, handle);
    }
}

impl std::fmt::Debug for DraftController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftController")
            .field("bot_id", &self.bot_id)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Drop for DraftController {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            for (_, handle) in inner.timers.drain() {
                handle.abort();
            }
        }
    }
}
