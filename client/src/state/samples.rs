//! One-shot sample hand-off channel between the picker and tool screens.
//!
//! DESIGN
//! ======
//! The picker publishes a staged sample together with the label of the tool
//! it belongs to; the screen whose label matches consumes it exactly once.
//! The slot is an explicit three-state machine rather than a bare
//! `Option`: `Consumed` is a terminal state distinct from `Empty`, so a
//! screen that re-runs its mount effect can tell "nothing was ever staged"
//! apart from "someone already took it" and never double-loads.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

/// A named example payload staged for hand-off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub name: String,
    pub data: String,
}

/// The hand-off slot lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HandoffSlot {
    /// Nothing staged since the last consume (or ever).
    #[default]
    Empty,
    /// A sample is staged for the tool with the given label.
    Staged { label: String, sample: Sample },
    /// The staged sample was consumed; terminal until the next publish.
    Consumed,
}

/// Single-producer, single-consumer hand-off channel. Provided app-wide as
/// a Leptos context; the picker writes, the destination screen reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleHandoff {
    slot: HandoffSlot,
}

impl SampleHandoff {
    /// Stage a sample for the tool with `label`, replacing any pending
    /// hand-off. At most one hand-off is pending at a time.
    pub fn publish(&mut self, label: &str, sample: Sample) {
        self.slot = HandoffSlot::Staged { label: label.to_owned(), sample };
    }

    /// True while a hand-off for `label` is waiting to be consumed.
    #[must_use]
    pub fn pending_for(&self, label: &str) -> bool {
        matches!(&self.slot, HandoffSlot::Staged { label: staged, .. } if staged == label)
    }

    /// Consume the staged sample if it targets `label`.
    ///
    /// Consuming transitions the slot to [`HandoffSlot::Consumed`], so a
    /// second `take` — from this screen or any other — returns `None`.
    pub fn take(&mut self, label: &str) -> Option<Sample> {
        if !self.pending_for(label) {
            return None;
        }
        let slot = std::mem::replace(&mut self.slot, HandoffSlot::Consumed);
        match slot {
            HandoffSlot::Staged { sample, .. } => Some(sample),
            _ => None,
        }
    }
}
