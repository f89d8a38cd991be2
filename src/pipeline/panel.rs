use serde::{Deserialize, Serialize};

/// One generated image together with the prompt that produced it.
#[derive(Clone, Debug)]
pub struct Panel {
    pub prompt: String,
    pub image: image::DynamicImage,
}

impl Panel {
    pub fn new(prompt: impl Into<String>, image: image::DynamicImage) -> Self {
        Self {
            prompt: prompt.into(),
            image,
        }
    }
}

/// Summary data handed to the storyboard builder alongside the panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardMetadata {
    pub total_scenes: usize,
}

/// Panels in generation order. Position is the only identity a panel has.
#[derive(Clone, Debug, Default)]
pub struct PanelSet {
    panels: Vec<Panel>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }
}
