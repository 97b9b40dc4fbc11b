/// Tunable parameters shared by every class formula.
///
/// Per-class multipliers live in [`crate::ClassFormulaConstants`]; this struct
/// only carries values that apply to all heroes regardless of class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsConfig {
    /// Flat leadership value assigned to every hero.
    ///
    /// Not a function of attributes, gear, or perks.
    pub leadership: f32,
}

impl StatsConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEADERSHIP: f32 = 700.0;

    pub fn new() -> Self {
        Self {
            leadership: Self::DEFAULT_LEADERSHIP,
        }
    }

    pub fn with_leadership(leadership: f32) -> Self {
        Self { leadership }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new()
    }
}
