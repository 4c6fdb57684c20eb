use extropia_protocol::{LoopFlags, StructureRecord};

/// Suggestions for enriching a loop, most basic first.
pub fn hints(structure: &StructureRecord, token_count: usize) -> Vec<&'static str> {
    let flags = structure.flags();
    let mut hints = Vec::new();

    if !flags.contains(LoopFlags::AGENT) {
        hints.push("Try adding an agent like 'ka' (I) to specify who is acting");
    }
    if !flags.contains(LoopFlags::VALIDATION) {
        hints.push("Consider adding 'ver' (verify) to validate your process");
    }
    if !flags.contains(LoopFlags::ENTROPY) {
        hints.push("Add entropy tracking with 'nyx-' (order) or 'nyx+' (disorder)");
    }
    if !flags.contains(LoopFlags::UNCERTAINTY) && token_count > 3 {
        hints.push("Express certainty with 'zo' (certain) or 'xa' (provisional)");
    }
    if !flags.contains(LoopFlags::EFFECT) && structure.actions.len() > 2 {
        hints.push("Consider adding 'ek' (effect) to show the impact of your actions");
    }

    hints
}
