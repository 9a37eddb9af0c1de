//! The player character: stats, progression, equipment and run counters.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementId, Achievements, Milestone};
use crate::combat::BossKind;
use crate::core::combat_math::heal_clamped;
use crate::core::constants::*;
use crate::errors::Rejection;
use crate::events::GameEvent;
use crate::items::{EquipmentSlot, Inventory, Item, KeyType, UniqueEffect};

/// Lifetime counters for the current run, used by counter achievements and
/// the simulator report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub enemies_defeated: u32,
    pub bosses_defeated: u32,
    pub bosses_slain: Vec<BossKind>,
    pub dungeons_cleared: u32,
    pub dungeon_types_cleared: Vec<KeyType>,
    pub special_uses: u32,
    pub keys_collected: u32,
    pub keys_sold: u32,
    pub overworld_trips: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    pub xp: i32,
    pub xp_to_next_level: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub gold: u32,
    pub keys: u32,
    pub pages: u32,
    pub special_ability_ready: bool,
    /// Attack added by special abilities that has not been reverted yet.
    pub special_attack_bonus: i32,
    pub inventory: Inventory,
    pub achievements: Achievements,
    pub record: RunRecord,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            level: STARTING_LEVEL,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            gold: STARTING_GOLD,
            keys: 0,
            pages: 0,
            special_ability_ready: true,
            special_attack_bonus: 0,
            inventory: Inventory::new(),
            achievements: Achievements::new(),
            record: RunRecord::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Adds XP and levels up once per threshold crossed.
    pub fn gain_xp(&mut self, amount: i32) -> Vec<GameEvent> {
        self.xp += amount;
        let mut events = Vec::new();
        while self.xp >= self.xp_to_next_level {
            events.extend(self.level_up());
        }
        events
    }

    /// Applies one level. The remainder after subtracting the old threshold
    /// carries over unclamped.
    pub fn level_up(&mut self) -> Vec<GameEvent> {
        self.level += 1;
        self.xp -= self.xp_to_next_level;
        self.xp_to_next_level = (self.xp_to_next_level as f64 * XP_CURVE_MULTIPLIER) as i32;
        self.max_hp += LEVEL_UP_MAX_HP;
        self.hp = self.max_hp;
        self.attack += LEVEL_UP_ATTACK;
        self.defense += LEVEL_UP_DEFENSE;
        self.special_ability_ready = true;
        debug!(
            "level up: level={} xp={} next={}",
            self.level, self.xp, self.xp_to_next_level
        );

        let mut events = vec![GameEvent::LeveledUp {
            level: self.level,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
        }];
        events.extend(self.unlock(Milestone::LeveledUp(self.level)));
        events
    }

    /// Doubles the current attack until the ability recharges.
    /// When not ready this only reports and changes nothing.
    pub fn use_special_ability(&mut self) -> Vec<GameEvent> {
        if !self.special_ability_ready {
            return vec![GameEvent::SpecialAbilityNotReady];
        }
        let bonus = self.attack;
        self.attack += bonus;
        self.special_attack_bonus += bonus;
        self.special_ability_ready = false;
        self.record.special_uses += 1;

        let mut events = vec![GameEvent::SpecialAbilityUsed];
        events.extend(self.unlock(Milestone::SpecialAbilitiesUsed(self.record.special_uses)));
        events
    }

    /// Recharges the ability once at least half the XP to the next level has
    /// been earned, reverting any attack it added.
    pub fn reset_special_ability(&mut self) -> Vec<GameEvent> {
        let threshold = self.xp_to_next_level as f64 * SPECIAL_RECHARGE_XP_FRACTION;
        if self.special_ability_ready || (self.xp as f64) < threshold {
            return Vec::new();
        }
        self.special_ability_ready = true;
        self.attack -= self.special_attack_bonus;
        self.special_attack_bonus = 0;
        vec![GameEvent::SpecialAbilityRecharged]
    }

    /// Resolves a milestone against the catalog and unlocks the result.
    pub fn unlock(&mut self, milestone: Milestone) -> Option<GameEvent> {
        AchievementId::for_milestone(milestone).and_then(|id| self.unlock_achievement(id))
    }

    /// Unlocks `id` if it is not already unlocked.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> Option<GameEvent> {
        if self.achievements.unlock(id) {
            debug!("achievement unlocked: {:?}", id);
            Some(GameEvent::AchievementUnlocked { id })
        } else {
            None
        }
    }

    /// Restores HP up to `max_hp` and returns the nominal amount.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hp = heal_clamped(self.hp, amount, self.max_hp);
        amount
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Adds an item to the inventory, keeping the key counter in step.
    pub fn receive(&mut self, item: Item) -> Vec<GameEvent> {
        let id = item.id;
        let is_key = item.is_key();
        self.inventory.add(item);

        let mut events = vec![GameEvent::ItemAdded { item: id }];
        if is_key {
            self.keys += 1;
            self.record.keys_collected += 1;
            events.extend(self.unlock(Milestone::KeysCollected(self.record.keys_collected)));
            let held = self.inventory.key_types();
            if KeyType::ELEMENTS.iter().all(|kt| held.contains(kt)) {
                events.extend(self.unlock(Milestone::AllElementKeysHeld));
            }
        }
        events
    }

    /// Removes one key of `key_type`.
    pub fn take_key(&mut self, key_type: KeyType) -> Result<Item, Rejection> {
        let index = self
            .inventory
            .find_key(key_type)
            .ok_or(Rejection::MissingKey(key_type))?;
        let key = self
            .inventory
            .remove_at(index)
            .ok_or(Rejection::MissingKey(key_type))?;
        self.keys = self.keys.saturating_sub(1);
        Ok(key)
    }

    /// Equips the item at `index`, first removing the bonus of whatever the
    /// slot held.
    pub fn equip(&mut self, index: usize) -> Result<Vec<GameEvent>, Rejection> {
        let item = self.inventory.get(index).cloned().ok_or(Rejection::NoSuchItem)?;
        let slot = item.kind.slot().ok_or(Rejection::NotEquippable(item.id))?;

        let mut events = Vec::new();
        if let Some(previous) = self.inventory.set_equipped(slot, None) {
            events.extend(self.remove_bonus(slot, &previous));
        }

        let bonus = match slot {
            EquipmentSlot::Weapon => {
                self.attack += item.attack_bonus;
                item.attack_bonus
            }
            EquipmentSlot::Armor => {
                if item.unique_effect == Some(UniqueEffect::Vitality) {
                    self.max_hp += VITALITY_MAX_HP_BONUS;
                    self.heal(VITALITY_MAX_HP_BONUS);
                    events.push(GameEvent::VitalityGained {
                        amount: VITALITY_MAX_HP_BONUS,
                    });
                }
                self.defense += item.defense_bonus;
                item.defense_bonus
            }
        };
        events.push(GameEvent::Equipped {
            item: item.id,
            slot,
            bonus,
        });
        self.inventory.set_equipped(slot, Some(item));
        Ok(events)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<Vec<GameEvent>, Rejection> {
        let item = self
            .inventory
            .set_equipped(slot, None)
            .ok_or(Rejection::NothingEquipped(slot))?;
        Ok(self.remove_bonus(slot, &item))
    }

    fn remove_bonus(&mut self, slot: EquipmentSlot, item: &Item) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match slot {
            EquipmentSlot::Weapon => self.attack -= item.attack_bonus,
            EquipmentSlot::Armor => {
                self.defense -= item.defense_bonus;
                if item.unique_effect == Some(UniqueEffect::Vitality) {
                    self.max_hp -= VITALITY_MAX_HP_BONUS;
                    self.hp = self.hp.min(self.max_hp);
                    events.push(GameEvent::VitalityLost {
                        amount: VITALITY_MAX_HP_BONUS,
                    });
                }
            }
        }
        events.push(GameEvent::Unequipped { item: item.id, slot });
        events
    }

    /// Sells the item at `index` for its price. An equipped item is taken
    /// off first unless another identical copy stays in the inventory.
    pub fn sell_item(&mut self, index: usize) -> Result<Vec<GameEvent>, Rejection> {
        let item = self.inventory.remove_at(index).ok_or(Rejection::NoSuchItem)?;

        let mut events = Vec::new();
        if let Some(slot) = self.inventory.slot_of(&item) {
            if !self.inventory.items.contains(&item) {
                events.extend(self.unequip(slot)?);
            }
        }
        if item.is_key() {
            self.keys = self.keys.saturating_sub(1);
        }
        self.gold += item.price;
        debug!("sold {:?} for {}", item.id, item.price);
        events.push(GameEvent::ItemSold {
            item: item.id,
            gold: item.price,
        });
        Ok(events)
    }

    /// Records a boss kill and the counter achievements that follow from it.
    pub fn record_boss_defeat(&mut self, kind: BossKind) -> Vec<GameEvent> {
        self.record.bosses_defeated += 1;
        if !self.record.bosses_slain.contains(&kind) {
            self.record.bosses_slain.push(kind);
        }

        let mut events = Vec::new();
        events.extend(self.unlock(Milestone::Defeated(kind)));
        events.extend(self.unlock(Milestone::BossesDefeated(self.record.bosses_defeated)));
        if BossKind::ALL
            .iter()
            .all(|boss| self.record.bosses_slain.contains(boss))
        {
            events.extend(self.unlock(Milestone::AllBossesDefeated));
        }
        events
    }

    /// Records a cleared dungeon of the given element.
    pub fn record_dungeon_clear(&mut self, key_type: KeyType) -> Vec<GameEvent> {
        self.record.dungeons_cleared += 1;
        if !self.record.dungeon_types_cleared.contains(&key_type) {
            self.record.dungeon_types_cleared.push(key_type);
        }

        let mut events = Vec::new();
        events.extend(self.unlock(Milestone::DungeonsCleared(self.record.dungeons_cleared)));
        if KeyType::ALL
            .iter()
            .all(|kt| self.record.dungeon_types_cleared.contains(kt))
        {
            events.extend(self.unlock(Milestone::AllDungeonsCleared));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{template, ItemId};

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.level, 1);
        assert_eq!(player.hp, 288);
        assert_eq!(player.max_hp, 288);
        assert_eq!(player.attack, 12);
        assert_eq!(player.defense, 6);
        assert_eq!(player.gold, 50);
        assert!(player.special_ability_ready);
        assert!(player.is_alive());
    }

    #[test]
    fn test_gain_xp_levels_up_with_carry_over() {
        let mut player = Player::new();
        player.xp = 90;
        player.hp = 10;
        let events = player.gain_xp(15);

        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 5);
        assert_eq!(player.xp_to_next_level, 150);
        assert_eq!(player.max_hp, 308);
        assert_eq!(player.hp, player.max_hp);
        assert!(events.contains(&GameEvent::AchievementUnlocked {
            id: AchievementId::Level2
        }));
    }

    #[test]
    fn test_gain_xp_crosses_several_thresholds() {
        let mut player = Player::new();
        // 100 + 150 + 225 = 475
        player.gain_xp(480);
        assert_eq!(player.level, 4);
        assert_eq!(player.xp, 5);
        assert_eq!(player.xp_to_next_level, 337);
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_level_up_n_times_is_linear() {
        let mut player = Player::new();
        for _ in 0..7 {
            player.level_up();
        }
        assert_eq!(player.attack, 12 + 5 * 7);
        assert_eq!(player.defense, 6 + 2 * 7);
        assert_eq!(player.max_hp, 288 + 20 * 7);
        assert_eq!(player.level, 8);
    }

    #[test]
    fn test_special_ability_doubles_until_reset() {
        let mut player = Player::new();
        let events = player.use_special_ability();
        assert_eq!(events[0], GameEvent::SpecialAbilityUsed);
        assert_eq!(player.attack, 24);
        assert!(!player.special_ability_ready);

        // Not ready: nothing changes
        assert_eq!(
            player.use_special_ability(),
            vec![GameEvent::SpecialAbilityNotReady]
        );
        assert_eq!(player.attack, 24);

        // Below half the threshold: stays spent
        player.xp = 49;
        assert!(player.reset_special_ability().is_empty());
        assert_eq!(player.attack, 24);

        player.xp = 50;
        assert_eq!(
            player.reset_special_ability(),
            vec![GameEvent::SpecialAbilityRecharged]
        );
        assert!(player.special_ability_ready);
        assert_eq!(player.attack, 12);
    }

    #[test]
    fn test_level_up_recharges_without_reverting_attack() {
        let mut player = Player::new();
        player.use_special_ability();
        player.level_up();
        assert!(player.special_ability_ready);
        assert_eq!(player.attack, 24 + 5);
        assert_eq!(player.special_attack_bonus, 12);
    }

    #[test]
    fn test_specialist_after_ten_uses() {
        let mut player = Player::new();
        for _ in 0..10 {
            player.use_special_ability();
            player.special_ability_ready = true;
        }
        assert!(player.achievements.is_unlocked(AchievementId::Specialist));
    }

    #[test]
    fn test_unlock_achievement_is_idempotent() {
        let mut player = Player::new();
        assert!(player.unlock_achievement(AchievementId::FirstBlood).is_some());
        assert!(player.unlock_achievement(AchievementId::FirstBlood).is_none());
        assert!(player.unlock(Milestone::LeveledUp(7)).is_none());
        assert_eq!(player.achievements.count(), 1);
    }

    #[test]
    fn test_equip_swap_unequip_has_no_drift() {
        let mut player = Player::new();
        player.receive(template(ItemId::IronSword));
        player.receive(template(ItemId::SilverAxe));
        let base = player.attack;

        player.equip(0).unwrap();
        assert_eq!(player.attack, base + 5);
        player.equip(1).unwrap();
        assert_eq!(player.attack, base + 7);
        player.unequip(EquipmentSlot::Weapon).unwrap();
        assert_eq!(player.attack, base);
        assert_eq!(
            player.unequip(EquipmentSlot::Weapon),
            Err(Rejection::NothingEquipped(EquipmentSlot::Weapon))
        );
    }

    #[test]
    fn test_equip_rejects_keys_and_consumables() {
        let mut player = Player::new();
        player.receive(template(ItemId::FireKey));
        player.receive(template(ItemId::Bomb));
        assert_eq!(player.equip(0), Err(Rejection::NotEquippable(ItemId::FireKey)));
        assert_eq!(player.equip(1), Err(Rejection::NotEquippable(ItemId::Bomb)));
        assert_eq!(player.equip(9), Err(Rejection::NoSuchItem));
        assert_eq!(player.attack, STARTING_ATTACK);
    }

    #[test]
    fn test_vitality_amulet_round_trip() {
        let mut player = Player::new();
        player.receive(template(ItemId::AmuletOfVitality));
        player.receive(template(ItemId::SteelArmor));
        player.hp = 100;

        let events = player.equip(0).unwrap();
        assert!(events.contains(&GameEvent::VitalityGained { amount: 30 }));
        assert_eq!(player.max_hp, 318);
        assert_eq!(player.hp, 130);

        player.equip(1).unwrap();
        assert_eq!(player.max_hp, 288);
        assert_eq!(player.defense, STARTING_DEFENSE + 3);
    }

    #[test]
    fn test_receive_keys_tracks_counter_and_master_of_keys() {
        let mut player = Player::new();
        for key_type in KeyType::ELEMENTS {
            player.receive(template(key_type.key_item()));
        }
        assert_eq!(player.keys, 4);
        assert_eq!(player.record.keys_collected, 4);
        assert!(player.achievements.is_unlocked(AchievementId::MasterOfKeys));

        let key = player.take_key(KeyType::Ice).unwrap();
        assert_eq!(key.id, ItemId::IceKey);
        assert_eq!(player.keys, 3);
        assert_eq!(
            player.take_key(KeyType::Ice),
            Err(Rejection::MissingKey(KeyType::Ice))
        );
        assert_eq!(player.keys, 3);
    }

    #[test]
    fn test_sell_equipped_item_unequips_first() {
        let mut player = Player::new();
        player.receive(template(ItemId::SteelArmor));
        player.equip(0).unwrap();
        let events = player.sell_item(0).unwrap();

        assert!(player.inventory.armor.is_none());
        assert_eq!(player.defense, STARTING_DEFENSE);
        assert_eq!(player.gold, STARTING_GOLD + 150);
        assert!(events.contains(&GameEvent::ItemSold {
            item: ItemId::SteelArmor,
            gold: 150
        }));
    }

    #[test]
    fn test_sell_duplicate_keeps_equipped_copy() {
        let mut player = Player::new();
        player.receive(template(ItemId::IronSword));
        player.receive(template(ItemId::IronSword));
        player.equip(0).unwrap();
        player.sell_item(1).unwrap();
        assert!(player.inventory.weapon.is_some());
        assert_eq!(player.attack, STARTING_ATTACK + 5);
    }

    #[test]
    fn test_sell_key_decrements_counter() {
        let mut player = Player::new();
        player.receive(template(ItemId::EarthKey));
        player.sell_item(0).unwrap();
        assert_eq!(player.keys, 0);
        assert_eq!(player.sell_item(0), Err(Rejection::NoSuchItem));
    }

    #[test]
    fn test_record_boss_defeats() {
        let mut player = Player::new();
        for kind in BossKind::ALL {
            player.record_boss_defeat(kind);
        }
        assert!(player.achievements.is_unlocked(AchievementId::UltimateSlayer));
        assert!(player.achievements.is_unlocked(AchievementId::FinalConqueror));
        assert!(!player.achievements.is_unlocked(AchievementId::BossSlayer));
        for _ in 0..5 {
            player.record_boss_defeat(BossKind::IceLord);
        }
        assert!(player.achievements.is_unlocked(AchievementId::BossSlayer));
    }

    #[test]
    fn test_record_dungeon_clears() {
        let mut player = Player::new();
        for key_type in KeyType::ALL {
            player.record_dungeon_clear(key_type);
        }
        assert!(player.achievements.is_unlocked(AchievementId::DungeonExplorer));
        assert!(player.achievements.is_unlocked(AchievementId::DungeonMaster));
    }
}
