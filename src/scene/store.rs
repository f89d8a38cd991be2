use crate::foundation::error::{YumeError, YumeResult};
use crate::scene::record::{Scene, SceneDraft};

const FIRST_SCENE_ID: u64 = 1;

/// Ordered collection of parsed scenes.
///
/// Ids are handed out from a private counter, in arrival order, to drafts that arrive without
/// one. Drafts that carry an explicit id keep it and leave the counter alone, so a caller can
/// produce duplicate ids; lookups then return the first match.
#[derive(Debug)]
pub struct SceneStore {
    scenes: Vec<Scene>,
    next_id: u64,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStore {
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            next_id: FIRST_SCENE_ID,
        }
    }

    /// Validate, default and append a single draft.
    ///
    /// A draft without `raw_text` is rejected before an id is assigned, so a failed insert
    /// never consumes a counter value.
    #[tracing::instrument(skip_all, fields(explicit_id = draft.id))]
    pub fn insert(&mut self, mut draft: SceneDraft) -> YumeResult<&Scene> {
        let Some(raw_text) = draft.raw_text.take() else {
            return Err(missing_raw_text(draft.id));
        };

        let id = match draft.id {
            Some(id) => id,
            None => self.take_next_id(),
        };

        tracing::debug!(id, "scene stored");
        let idx = self.scenes.len();
        self.scenes.push(Scene::from_draft(id, raw_text, draft));
        Ok(&self.scenes[idx])
    }

    /// Insert a batch in order, all or nothing.
    ///
    /// Every draft is checked before the first one is appended. On error the store and its id
    /// counter are exactly as they were before the call.
    pub fn insert_many(
        &mut self,
        drafts: impl IntoIterator<Item = SceneDraft>,
    ) -> YumeResult<&[Scene]> {
        let drafts: Vec<SceneDraft> = drafts.into_iter().collect();
        if let Some(bad) = drafts.iter().find(|d| d.raw_text.is_none()) {
            return Err(missing_raw_text(bad.id));
        }

        let start = self.scenes.len();
        for draft in drafts {
            self.insert(draft)?;
        }
        Ok(&self.scenes[start..])
    }

    pub fn get(&self, id: u64) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Scenes in insertion order.
    pub fn all(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn count(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn clear(&mut self) {
        self.scenes.clear();
        self.next_id = FIRST_SCENE_ID;
    }

    /// Human-readable listing for logs and the CLI. Not a data format.
    pub fn summary(&self) -> String {
        let mut lines = vec!["Scene Summary:".to_string()];
        for s in &self.scenes {
            let mut head = format!("- Scene {}:", s.id);
            if let Some(kind) = s.kind {
                head.push(' ');
                head.push_str(kind.as_str());
            }
            if let Some(location) = s.location.as_deref().filter(|l| !l.is_empty()) {
                head.push(' ');
                head.push_str(location);
            }
            lines.push(format!("{head} ({} characters)", s.characters.len()));
        }
        lines.join("\n")
    }

    fn take_next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn missing_raw_text(id: Option<u64>) -> YumeError {
    match id {
        Some(id) => YumeError::validation(format!("scene {id} missing required key: raw_text")),
        None => YumeError::validation("scene missing required key: raw_text"),
    }
}
