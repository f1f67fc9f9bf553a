//! Circular advantage between creature types and attributes.

use core::ops::Neg;

use crate::state::{Attribute, CreatureType};

/// Outcome of comparing one side's category against the other's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advantage {
    Disfavored,
    #[default]
    Neutral,
    Favored,
}

impl Advantage {
    /// Signed form used by the multiplier: +1, 0 or -1.
    pub const fn value(self) -> i32 {
        match self {
            Self::Disfavored => -1,
            Self::Neutral => 0,
            Self::Favored => 1,
        }
    }
}

impl Neg for Advantage {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Disfavored => Self::Favored,
            Self::Neutral => Self::Neutral,
            Self::Favored => Self::Disfavored,
        }
    }
}

/// Closed rock-paper-scissors relation over three members.
///
/// `members[i]` beats `members[(i + 1) % 3]`. Values outside the cycle are
/// neutral against everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdvantageCycle<T> {
    members: [T; 3],
}

impl<T: Copy + PartialEq> AdvantageCycle<T> {
    pub const fn new(members: [T; 3]) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[T; 3] {
        &self.members
    }

    /// Returns true when the three members are pairwise distinct.
    pub fn is_well_formed(&self) -> bool {
        let [a, b, c] = self.members;
        a != b && b != c && a != c
    }

    fn position(&self, value: T) -> Option<usize> {
        self.members.iter().position(|member| *member == value)
    }

    /// Advantage of `attacker` over `defender`.
    pub fn compare(&self, attacker: T, defender: T) -> Advantage {
        let (Some(a), Some(d)) = (self.position(attacker), self.position(defender)) else {
            return Advantage::Neutral;
        };
        if a == d {
            Advantage::Neutral
        } else if (a + 1) % 3 == d {
            Advantage::Favored
        } else {
            Advantage::Disfavored
        }
    }
}

/// Type advantage of `attacker` against `defender` under `cycle`.
pub fn type_advantage(
    cycle: &AdvantageCycle<CreatureType>,
    attacker: CreatureType,
    defender: CreatureType,
) -> Advantage {
    cycle.compare(attacker, defender)
}

/// Attribute advantage; neutral when either side carries no attribute.
pub fn attribute_advantage(
    cycle: &AdvantageCycle<Attribute>,
    attacker: Option<Attribute>,
    defender: Option<Attribute>,
) -> Advantage {
    match (attacker, defender) {
        (Some(attacker), Some(defender)) => cycle.compare(attacker, defender),
        _ => Advantage::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::config::BattleConfig;

    #[test]
    fn vaccine_beats_virus_beats_data_beats_vaccine() {
        let cycle = BattleConfig::default().type_cycle;
        use CreatureType::*;
        assert_eq!(type_advantage(&cycle, Vaccine, Virus), Advantage::Favored);
        assert_eq!(type_advantage(&cycle, Virus, Data), Advantage::Favored);
        assert_eq!(type_advantage(&cycle, Data, Vaccine), Advantage::Favored);
        assert_eq!(type_advantage(&cycle, Virus, Vaccine), Advantage::Disfavored);
        assert_eq!(type_advantage(&cycle, Free, Vaccine), Advantage::Neutral);
    }

    #[test]
    fn type_advantage_is_antisymmetric() {
        let cycle = BattleConfig::default().type_cycle;
        for a in CreatureType::iter() {
            assert_eq!(type_advantage(&cycle, a, a), Advantage::Neutral);
            for b in CreatureType::iter() {
                assert_eq!(type_advantage(&cycle, a, b), -type_advantage(&cycle, b, a));
            }
        }
    }

    #[test]
    fn attribute_advantage_is_antisymmetric() {
        let cycle = BattleConfig::default().attribute_cycle;
        let values = Attribute::iter().map(Some).chain([None]);
        for a in values.clone() {
            for b in values.clone() {
                let forward = attribute_advantage(&cycle, a, b);
                assert_eq!(forward, -attribute_advantage(&cycle, b, a));
                assert_eq!(forward.value(), -attribute_advantage(&cycle, b, a).value());
            }
        }
    }

    #[test]
    fn missing_attribute_is_neutral() {
        let cycle = BattleConfig::default().attribute_cycle;
        assert_eq!(
            attribute_advantage(&cycle, Some(Attribute::Fire), None),
            Advantage::Neutral
        );
        assert_eq!(
            attribute_advantage(&cycle, Some(Attribute::Fire), Some(Attribute::Plant)),
            Advantage::Favored
        );
    }
}
