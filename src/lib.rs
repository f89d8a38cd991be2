//! Yume turns a screenplay into a storyboard.
//!
//! The heavy lifting (script parsing, prompt writing, image synthesis, storyboard export) is done
//! by collaborators plugged into a [`Pipeline`]. This crate keeps the bookkeeping between them:
//!
//! - [`SceneStore`] orders scenes, assigns ids and fills defaults
//! - [`LocationPromptBuilder`] merges world and environment data into a location clause
//! - [`Pipeline`] calls the collaborators in order and collects [`Panel`]s
//! - [`io`] and [`collage`] cover file handling and panel collages
#![forbid(unsafe_code)]

pub mod collage;
pub mod config;
pub mod foundation;
pub mod io;
pub mod location;
pub mod pipeline;
pub mod scene;

pub use crate::config::YumeConfig;
pub use crate::foundation::error::{YumeError, YumeResult};
pub use crate::location::{EnvironmentSettings, LocationPromptBuilder, WorldData, WorldSettings};
pub use crate::pipeline::{
    ImageEngine, Panel, PanelSet, Pipeline, PromptGenerator, ScriptParser, StoryboardBuilder,
    StoryboardMetadata,
};
pub use crate::scene::{Scene, SceneDraft, SceneKind, SceneStore};
