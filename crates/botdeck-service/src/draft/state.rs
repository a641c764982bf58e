use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_entity::config::{ConfigSection, SectionData};

/// Lifecycle of a single section draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Working copy equals the saved baseline.
    Clean,
    /// Working copy has edits that are not persisted yet.
    Dirty,
    /// A save of a snapshot of the working copy is in flight.
    Saving,
}

/// What a caller should do with a save request, decided under the lock.
#[derive(Debug, Clone, PartialEq)]
pub enum BeginSave {
    /// Persist this snapshot of the working copy.
    Snapshot(SectionData),
    /// Nothing has changed, no store call needed.
    Clean,
    /// A save is already in flight; the draft will be re-evaluated when
    /// it settles.
    AlreadySaving,
}

/// One section's saved baseline plus its working copy.
///
/// Dirtiness is structural: a draft is dirty exactly when the working copy
/// differs from the baseline, so an edit that reverts every change makes
/// the section clean again.
#[derive(Debug, Clone)]
pub struct SectionDraft {
    section: ConfigSection,
    baseline: SectionData,
    working: SectionData,
    status: DraftStatus,
    last_saved_at: Option<DateTime<Utc>>,
}

impl SectionDraft {
    pub fn new(section: ConfigSection, data: SectionData) -> Self {
        Self {
            section,
            baseline: data.clone(),
            working: data,
            status: DraftStatus::Clean,
            last_saved_at: None,
        }
    }

    pub fn section(&self) -> ConfigSection {
        self.section
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }

    pub fn working(&self) -> &SectionData {
        &self.working
    }

    pub fn baseline(&self) -> &SectionData {
        &self.baseline
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Replaces the working copy. Returns whether the draft is dirty
    /// afterwards.
    ///
    /// During an in-flight save the status stays `Saving`; the dirtiness
    /// re-check in [`complete_save`](Self::complete_save) picks the edit up.
    pub fn record_edit(&mut self, data: SectionData) -> bool {
        self.working = data;
        let dirty = self.is_dirty();
        if self.status != DraftStatus::Saving {
            self.status = if dirty {
                DraftStatus::Dirty
            } else {
                DraftStatus::Clean
            };
        }
        dirty
    }

    /// Decides whether a save should proceed and, if so, snapshots the
    /// working copy and moves the draft to `Saving`.
    pub fn begin_save(&mut self) -> BeginSave {
        if self.status == DraftStatus::Saving {
            return BeginSave::AlreadySaving;
        }
        if !self.is_dirty() {
            return BeginSave::Clean;
        }
        self.status = DraftStatus::Saving;
        BeginSave::Snapshot(self.working.clone())
    }

    /// Records a successful save of `snapshot` at `now`.
    ///
    /// The snapshot becomes the new baseline. Returns whether the draft is
    /// still dirty, which happens when the working copy was edited while
    /// the save was in flight.
    pub fn complete_save(&mut self, snapshot: SectionData, now: DateTime<Utc>) -> bool {
        self.baseline = snapshot;
        self.last_saved_at = Some(now);
        let dirty = self.is_dirty();
        self.status = if dirty {
            DraftStatus::Dirty
        } else {
            DraftStatus::Clean
        };
        dirty
    }

    /// Records a failed save. The baseline is untouched and the draft
    /// returns to `Dirty` so nothing is lost.
    pub fn fail_save(&mut self) {
        self.status = if self.is_dirty() {
            DraftStatus::Dirty
        } else {
            DraftStatus::Clean
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdeck_entity::config::BasicSettings;
    use chrono::Utc;

    fn basic(name: &str) -> SectionData {
        SectionData::Basic(BasicSettings {
            name: name.to_string(),
            ..BasicSettings::default()
        })
    }

    #[test]
    fn edit_marks_dirty_and_revert_marks_clean() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        assert_eq!(draft.status(), DraftStatus::Clean);

        assert!(draft.record_edit(basic("changed")));
        assert_eq!(draft.status(), DraftStatus::Dirty);

        assert!(!draft.record_edit(basic("original")));
        assert_eq!(draft.status(), DraftStatus::Clean);
    }

    #[test]
    fn save_lifecycle_promotes_snapshot_to_baseline() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        draft.record_edit(basic("changed"));

        let BeginSave::Snapshot(snapshot) = draft.begin_save() else {
            panic!("expected a snapshot");
        };
        assert_eq!(draft.status(), DraftStatus::Saving);

        let still_dirty = draft.complete_save(snapshot, Utc::now());
        assert!(!still_dirty);
        assert_eq!(draft.status(), DraftStatus::Clean);
        assert_eq!(draft.baseline(), &basic("changed"));
        assert!(draft.last_saved_at().is_some());
    }

    #[test]
    fn clean_draft_declines_to_save() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        assert_eq!(draft.begin_save(), BeginSave::Clean);
    }

    #[test]
    fn concurrent_save_request_is_reported() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        draft.record_edit(basic("changed"));

        assert!(matches!(draft.begin_save(), BeginSave::Snapshot(_)));
        assert_eq!(draft.begin_save(), BeginSave::AlreadySaving);
    }

    #[test]
    fn edit_during_save_leaves_draft_dirty_after_completion() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        draft.record_edit(basic("first"));

        let BeginSave::Snapshot(snapshot) = draft.begin_save() else {
            panic!("expected a snapshot");
        };
        draft.record_edit(basic("second"));
        assert_eq!(draft.status(), DraftStatus::Saving);

        let still_dirty = draft.complete_save(snapshot, Utc::now());
        assert!(still_dirty);
        assert_eq!(draft.status(), DraftStatus::Dirty);
        assert_eq!(draft.baseline(), &basic("first"));
        assert_eq!(draft.working(), &basic("second"));
    }

    #[test]
    fn failed_save_keeps_edits_and_baseline() {
        let mut draft = SectionDraft::new(ConfigSection::Basic, basic("original"));
        draft.record_edit(basic("changed"));
        draft.begin_save();

        draft.fail_save();
        assert_eq!(draft.status(), DraftStatus::Dirty);
        assert_eq!(draft.baseline(), &basic("original"));
        assert_eq!(draft.working(), &basic("changed"));
    }
}
