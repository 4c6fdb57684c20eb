use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

bitflags! {
    /// Which loop roles a structure has filled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LoopFlags: u16 {
        const AGENT = 1;
        const INITIATOR = 2;
        const ACTIONS = 4;
        const VALIDATION = 8;
        const CLOSURE = 16;
        const EFFECT = 32;
        const UNCERTAINTY = 64;
        const ENTROPY = 128;
    }
}

/// Grammatical roles recovered from one token sequence.
///
/// Built by a single left-to-right fold; list fields keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct StructureRecord {
    pub agent: Option<String>,
    pub initiator: Option<String>,
    pub actions: Vec<String>,
    pub validation: Option<String>,
    pub closure: Option<String>,
    pub effect: Option<String>,
    pub uncertainty_markers: Vec<String>,
    pub entropy_operators: Vec<String>,
    /// Depth of nested loops. The base grammar never nests, so this stays 0.
    pub nesting_level: u32,
}

impl StructureRecord {
    pub fn flags(&self) -> LoopFlags {
        let mut flags = LoopFlags::empty();
        flags.set(LoopFlags::AGENT, self.agent.is_some());
        flags.set(LoopFlags::INITIATOR, self.initiator.is_some());
        flags.set(LoopFlags::ACTIONS, !self.actions.is_empty());
        flags.set(LoopFlags::VALIDATION, self.validation.is_some());
        flags.set(LoopFlags::CLOSURE, self.closure.is_some());
        flags.set(LoopFlags::EFFECT, self.effect.is_some());
        flags.set(LoopFlags::UNCERTAINTY, !self.uncertainty_markers.is_empty());
        flags.set(LoopFlags::ENTROPY, !self.entropy_operators.is_empty());
        flags
    }

    /// Structural complexity: one per action, plus one each for a validation
    /// and a closure.
    pub fn complexity(&self) -> u32 {
        let flags = self.flags();
        let mut complexity = self.actions.len() as u32;
        if flags.contains(LoopFlags::VALIDATION) {
            complexity += 1;
        }
        if flags.contains(LoopFlags::CLOSURE) {
            complexity += 1;
        }
        complexity
    }
}
