#![no_std] // Shared with the wasm bridge

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod model;
pub mod reward;
pub mod structure;

pub use ids::MorphemeId;
pub use model::{Category, Dictionary, Morpheme};
pub use reward::{EventType, RewardEvent, RewardResult, StructureXp};
pub use structure::{LoopFlags, StructureRecord};
