pub mod record;
pub mod store;

pub use record::{Scene, SceneDraft, SceneKind};
pub use store::SceneStore;
