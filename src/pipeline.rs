use std::path::Path;

use crate::foundation::error::YumeResult;
use crate::scene::SceneStore;

pub mod collaborator;
pub mod panel;

pub use collaborator::{ImageEngine, PromptGenerator, ScriptParser, StoryboardBuilder};
pub use panel::{Panel, PanelSet, StoryboardMetadata};

/// Script-to-storyboard sequencer.
///
/// Pipeline:
/// 1. [`ScriptParser::parse`]
/// 2. [`SceneStore::insert_many`]
/// 3. [`PromptGenerator::generate`] once per scene
/// 4. [`ImageEngine::generate`] once per prompt, each result recorded as a [`Panel`]
/// 5. [`StoryboardBuilder::build`]
///
/// Every step runs synchronously and in order. The first collaborator error aborts the run and
/// is returned unchanged.
pub struct Pipeline<S> {
    parser: Box<dyn ScriptParser>,
    prompts: Box<dyn PromptGenerator>,
    images: Box<dyn ImageEngine>,
    storyboard: Box<dyn StoryboardBuilder<Storyboard = S>>,
    scenes: SceneStore,
    panels: PanelSet,
}

impl<S> Pipeline<S> {
    pub fn new(
        parser: impl ScriptParser + 'static,
        prompts: impl PromptGenerator + 'static,
        images: impl ImageEngine + 'static,
        storyboard: impl StoryboardBuilder<Storyboard = S> + 'static,
    ) -> Self {
        Self {
            parser: Box::new(parser),
            prompts: Box::new(prompts),
            images: Box::new(images),
            storyboard: Box::new(storyboard),
            scenes: SceneStore::new(),
            panels: PanelSet::new(),
        }
    }

    /// Full end-to-end generation for one script.
    ///
    /// The scene store and panel set are reset first, so after the call they describe this
    /// script only.
    #[tracing::instrument(skip_all, fields(script_bytes = script_text.len()))]
    pub fn run(&mut self, script_text: &str) -> YumeResult<S> {
        self.scenes.clear();
        self.panels.clear();

        let drafts = self.parser.parse(script_text)?;
        let scenes = self.scenes.insert_many(drafts)?;
        tracing::info!(scenes = scenes.len(), "script parsed");

        let mut prompts = Vec::with_capacity(scenes.len());
        for scene in scenes {
            prompts.push(self.prompts.generate(scene)?);
        }
        let metadata = StoryboardMetadata {
            total_scenes: scenes.len(),
        };

        for (idx, prompt) in prompts.into_iter().enumerate() {
            let image = self.images.generate(&prompt)?;
            tracing::debug!(panel = idx, "panel generated");
            self.panels.push(Panel::new(prompt, image));
        }

        self.storyboard.build(self.panels.panels(), &metadata)
    }

    /// Parse and prompt only. No images are generated and the pipeline's scene store is left
    /// untouched.
    #[tracing::instrument(skip_all, fields(script_bytes = script_text.len()))]
    pub fn preview(&mut self, script_text: &str) -> YumeResult<Vec<String>> {
        let drafts = self.parser.parse(script_text)?;

        let mut scratch = SceneStore::new();
        let scenes = scratch.insert_many(drafts)?;

        let mut prompts = Vec::with_capacity(scenes.len());
        for scene in scenes {
            prompts.push(self.prompts.generate(scene)?);
        }
        Ok(prompts)
    }

    /// Export through the storyboard builder. The format is the builder's business.
    pub fn save_storyboard(&self, storyboard: &S, output_path: impl AsRef<Path>) -> YumeResult<()> {
        self.storyboard.save(storyboard, output_path.as_ref())
    }

    /// Scenes recorded by the most recent [`Pipeline::run`].
    pub fn scenes(&self) -> &SceneStore {
        &self.scenes
    }

    /// Panels produced by the most recent [`Pipeline::run`].
    pub fn panels(&self) -> &[Panel] {
        self.panels.panels()
    }
}
