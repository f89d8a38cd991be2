use std::path::Path;

use crate::foundation::error::YumeResult;
use crate::pipeline::panel::{Panel, StoryboardMetadata};
use crate::scene::{Scene, SceneDraft};

/// Splits raw script text into scene drafts, in script order.
pub trait ScriptParser {
    fn parse(&mut self, script_text: &str) -> YumeResult<Vec<SceneDraft>>;
}

/// Turns one stored scene into one image prompt.
pub trait PromptGenerator {
    fn generate(&mut self, scene: &Scene) -> YumeResult<String>;
}

/// Synthesizes one image per prompt.
pub trait ImageEngine {
    fn generate(&mut self, prompt: &str) -> YumeResult<image::DynamicImage>;
}

/// Assembles panels into the final output and knows how to export it.
pub trait StoryboardBuilder {
    type Storyboard;

    fn build(
        &mut self,
        panels: &[Panel],
        metadata: &StoryboardMetadata,
    ) -> YumeResult<Self::Storyboard>;

    fn save(&self, storyboard: &Self::Storyboard, output_path: &Path) -> YumeResult<()>;
}
