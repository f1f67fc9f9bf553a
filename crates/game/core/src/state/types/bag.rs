//! Item stacks carried by a combatant or shared by the match.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::state::ItemId;

/// What a bag slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// An item defined in the catalog; its effect is looked up when used.
    Catalog(ItemId),
    /// Loot reward: a flat power boost applied to the holder's next exchange.
    PowerBoost(u32),
}

/// Bag slot containing an item and its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagSlot {
    pub item: ItemKind,
    pub quantity: u16,
}

impl BagSlot {
    pub fn new(item: ItemKind, quantity: u16) -> Self {
        Self { item, quantity }
    }
}

/// Returned when an item cannot be stored because every slot is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bag is full")]
pub struct BagFull;

/// Ordered list of item stacks.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    slots: ArrayVec<BagSlot, { BattleConfig::MAX_BAG_SLOTS }>,
}

impl Bag {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    pub fn slots(&self) -> &[BagSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&BagSlot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Adds `quantity` units of `item`, stacking onto an existing slot when possible.
    pub fn add(&mut self, item: ItemKind, quantity: u16) -> Result<(), BagFull> {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item == item) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return Ok(());
        }
        self.slots
            .try_push(BagSlot::new(item, quantity))
            .map_err(|_| BagFull)
    }

    /// Removes one unit from the slot at `index`, dropping the slot when it empties.
    pub fn take_one(&mut self, index: usize) -> Option<ItemKind> {
        let slot = self.slots.get_mut(index)?;
        if slot.quantity == 0 {
            return None;
        }
        slot.quantity -= 1;
        let item = slot.item;
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        Some(item)
    }
}
