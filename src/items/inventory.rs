use super::types::{EquipmentSlot, Item, KeyType, UniqueEffect};
use serde::{Deserialize, Serialize};

/// Owned items in pickup order plus the two equipment slots.
///
/// An equipped item is a copy of an entry in `items`; keeping the two in
/// step is the owner's job (see `Player::equip`/`Player::sell_item`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<Item>,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
        }
    }

    /// Puts `item` in `slot`, returning whatever was there before.
    pub fn set_equipped(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        match slot {
            EquipmentSlot::Weapon => std::mem::replace(&mut self.weapon, item),
            EquipmentSlot::Armor => std::mem::replace(&mut self.armor, item),
        }
    }

    /// Slot holding an item equal to `item`, if any.
    pub fn slot_of(&self, item: &Item) -> Option<EquipmentSlot> {
        [EquipmentSlot::Weapon, EquipmentSlot::Armor]
            .into_iter()
            .find(|slot| self.equipped(*slot) == Some(item))
    }

    pub fn weapon_effect(&self) -> Option<UniqueEffect> {
        self.weapon.as_ref().and_then(|item| item.unique_effect)
    }

    pub fn armor_effect(&self) -> Option<UniqueEffect> {
        self.armor.as_ref().and_then(|item| item.unique_effect)
    }

    pub fn has_consumables(&self) -> bool {
        self.items.iter().any(Item::is_consumable)
    }

    /// Inventory indices of every consumable, in display order.
    pub fn consumable_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_consumable())
            .map(|(index, _)| index)
            .collect()
    }

    /// Distinct key types held, in the order they were picked up.
    pub fn key_types(&self) -> Vec<KeyType> {
        let mut types = Vec::new();
        for key_type in self.items.iter().filter_map(Item::key_type) {
            if !types.contains(&key_type) {
                types.push(key_type);
            }
        }
        types
    }

    pub fn find_key(&self, key_type: KeyType) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.key_type() == Some(key_type))
    }

    pub fn key_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_key()).count()
    }
}
