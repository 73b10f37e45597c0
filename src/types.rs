use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a recipe step, unique within one recipe.
pub type StepId = i64;

/// Durations and predicted timestamps, in minutes from the start of the recipe.
pub type Minutes = i64;

/// Attention class of a step; decides which resource pool it occupies.
///
/// - `Active`: needs the cook's full attention. There is exactly one such
///   resource, so active steps never overlap.
/// - `Partial`: needs some attention (e.g. sauteeing). Up to `M` of these may
///   run at once, one per partial slot.
/// - `Passive`: needs no attention (e.g. baking, marinating). Unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Active,
    Partial,
    Passive,
}

impl StepType {
    pub fn as_str(self) -> &'static str {
        match self {
            StepType::Active => "active",
            StepType::Partial => "partial",
            StepType::Passive => "passive",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of partial slots used when a recipe does not configure one.
pub const DEFAULT_PARTIAL_SLOTS: usize = 2;
