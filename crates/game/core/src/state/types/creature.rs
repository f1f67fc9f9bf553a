//! Categorical axes used by the advantage cycles.

/// Primary categorical axis of a creature.
///
/// Three of these form the type advantage cycle; the rest are always neutral.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreatureType {
    Vaccine,
    Virus,
    Data,
    Free,
    Variable,
    Unknown,
}

/// Optional elemental attribute of a creature.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Fire,
    Water,
    Plant,
    Electric,
    Wind,
    Earth,
    Light,
    Dark,
    Neutral,
}
