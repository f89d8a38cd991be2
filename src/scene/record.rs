use serde::{Deserialize, Serialize};

/// Interior/exterior marker taken from a script slugline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "EXT")]
    Ext,
}

impl SceneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Ext => "EXT",
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scene as handed over by a script parser, before the store has shaped it.
///
/// Every field is optional here; [`crate::SceneStore::insert`] assigns the id, checks
/// `raw_text` and fills the remaining defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDraft {
    pub id: Option<u64>,
    pub raw_text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SceneKind>,
    pub location: Option<String>,
    pub characters: Option<Vec<String>>,
    pub verbs: Option<Vec<String>>,
    pub dialogue: Option<Vec<String>>,
    pub mood: Option<String>,
}

impl SceneDraft {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: Some(raw_text.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_kind(mut self, kind: SceneKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = Some(characters.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }
}

/// A stored scene. Every field is present once a draft has been accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: u64,
    pub raw_text: String,
    #[serde(rename = "type")]
    pub kind: Option<SceneKind>,
    pub location: Option<String>,
    pub characters: Vec<String>,
    pub verbs: Vec<String>,
    pub dialogue: Vec<String>,
    pub mood: Option<String>,
}

impl Scene {
    /// Shape a draft whose id and text are already settled. Unset lists become empty.
    pub(crate) fn from_draft(id: u64, raw_text: String, draft: SceneDraft) -> Self {
        Self {
            id,
            raw_text,
            kind: draft.kind,
            location: draft.location,
            characters: draft.characters.unwrap_or_default(),
            verbs: draft.verbs.unwrap_or_default(),
            dialogue: draft.dialogue.unwrap_or_default(),
            mood: draft.mood,
        }
    }
}
