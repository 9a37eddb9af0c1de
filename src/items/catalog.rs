//! Static item catalogs: loot table, shop stock, and boss uniques.
//!
//! Every entry is resolved to typed tags here, so combat and use logic match
//! on `ItemKind`/`UniqueEffect` rather than on names.

use super::types::{
    ConsumableEffect, Item, ItemId, ItemKind, KeyType, Rarity, UniqueEffect,
};

/// Items regular enemies can drop, in catalog order.
pub const LOOT_TABLE: &[ItemId] = &[
    ItemId::LeatherBoots,
    ItemId::SilverDagger,
    ItemId::AmuletOfStrength,
    ItemId::GuardianShield,
    ItemId::BootsOfSwiftness,
    ItemId::FlameSword,
    ItemId::FrostArmor,
    ItemId::ShadowBlade,
    ItemId::DragonScaleMail,
    ItemId::GoldenAxe,
    ItemId::TitaniumShield,
    ItemId::CursedRing,
    ItemId::ManaPotion,
    ItemId::Bomb,
    ItemId::ElixirOfFortitude,
    ItemId::ScrollOfFireball,
    ItemId::HealingHerb,
    ItemId::ThunderBolt,
    ItemId::PoisonDagger,
    ItemId::RevivePotion,
    ItemId::LightningScroll,
    ItemId::FireKey,
    ItemId::IceKey,
    ItemId::EarthKey,
    ItemId::LightningKey,
    ItemId::FinalKey,
];

/// Shop stock, in display order. The Final Key is appended separately once
/// the player has enough pages.
pub const SHOP_CATALOG: &[ItemId] = &[
    ItemId::HealthPotion,
    ItemId::HealingHerb,
    ItemId::IronSword,
    ItemId::SteelArmor,
    ItemId::RingOfPower,
    ItemId::Bomb,
    ItemId::ElixirOfFortitude,
    ItemId::ScrollOfFireball,
    ItemId::FireKey,
    ItemId::IceKey,
    ItemId::EarthKey,
    ItemId::LightningKey,
    ItemId::SilverAxe,
    ItemId::GoldenShield,
    ItemId::AmuletOfVitality,
    ItemId::BootsOfTheSwift,
    ItemId::ShadowCloak,
    ItemId::ManaPotion,
    ItemId::ThunderBolt,
    ItemId::PoisonDagger,
    ItemId::RevivePotion,
    ItemId::LightningScroll,
];

fn weapon(id: ItemId, rarity: Rarity, price: u32, attack: i32) -> Item {
    Item {
        id,
        rarity,
        price,
        attack_bonus: attack,
        defense_bonus: 0,
        unique_effect: None,
        kind: ItemKind::Weapon,
    }
}

fn armor(id: ItemId, rarity: Rarity, price: u32, defense: i32) -> Item {
    Item {
        id,
        rarity,
        price,
        attack_bonus: 0,
        defense_bonus: defense,
        unique_effect: None,
        kind: ItemKind::Armor,
    }
}

fn consumable(id: ItemId, rarity: Rarity, price: u32, effect: ConsumableEffect) -> Item {
    Item {
        id,
        rarity,
        price,
        attack_bonus: 0,
        defense_bonus: 0,
        unique_effect: None,
        kind: ItemKind::Consumable(effect),
    }
}

fn key(id: ItemId, rarity: Rarity, price: u32, key_type: KeyType) -> Item {
    Item {
        id,
        rarity,
        price,
        attack_bonus: 0,
        defense_bonus: 0,
        unique_effect: None,
        kind: ItemKind::Key(key_type),
    }
}

fn with_effect(mut item: Item, effect: UniqueEffect) -> Item {
    item.unique_effect = Some(effect);
    item
}

/// Build the unscaled template for an item.
pub fn template(id: ItemId) -> Item {
    use ConsumableEffect::*;
    use Rarity::*;

    match id {
        ItemId::IronSword => weapon(id, Uncommon, 100, 5),
        ItemId::RingOfPower => weapon(id, Epic, 300, 10),
        ItemId::SilverAxe => weapon(id, Uncommon, 120, 7),
        ItemId::SilverDagger => weapon(id, Uncommon, 150, 3),
        ItemId::AmuletOfStrength => with_effect(
            weapon(id, Rare, 300, 7),
            UniqueEffect::DoubleDamageChance,
        ),
        ItemId::FlameSword => with_effect(weapon(id, Epic, 400, 12), UniqueEffect::FireDamage),
        ItemId::ShadowBlade => with_effect(weapon(id, Legendary, 600, 15), UniqueEffect::Blind),
        ItemId::GoldenAxe => weapon(id, Epic, 500, 10),
        ItemId::CursedRing => {
            let mut ring = with_effect(weapon(id, Rare, 250, 5), UniqueEffect::Cursed);
            ring.defense_bonus = -2;
            ring
        }

        ItemId::SteelArmor => armor(id, Rare, 150, 3),
        ItemId::GoldenShield => armor(id, Rare, 200, 5),
        ItemId::AmuletOfVitality => with_effect(armor(id, Epic, 350, 0), UniqueEffect::Vitality),
        ItemId::BootsOfTheSwift => {
            with_effect(armor(id, Epic, 400, 0), UniqueEffect::DoubleStrike)
        }
        ItemId::ShadowCloak => {
            with_effect(armor(id, Legendary, 500, 5), UniqueEffect::Invisibility)
        }
        ItemId::LeatherBoots => armor(id, Common, 50, 2),
        ItemId::GuardianShield => {
            with_effect(armor(id, Rare, 300, 5), UniqueEffect::DamageReduction)
        }
        ItemId::BootsOfSwiftness => {
            with_effect(armor(id, Epic, 500, 0), UniqueEffect::DoubleStrike)
        }
        ItemId::FrostArmor => with_effect(armor(id, Epic, 400, 8), UniqueEffect::Slow),
        ItemId::DragonScaleMail => {
            with_effect(armor(id, Legendary, 700, 12), UniqueEffect::FireResistance)
        }
        ItemId::TitaniumShield => armor(id, Epic, 500, 8),

        ItemId::HealthPotion => consumable(id, Common, 20, Heal(50)),
        ItemId::HealingHerb => consumable(id, Common, 20, Heal(40)),
        ItemId::Bomb => consumable(id, Uncommon, 50, Blast(20)),
        ItemId::ElixirOfFortitude => consumable(id, Rare, 150, Fortify(5)),
        ItemId::ScrollOfFireball => consumable(id, Epic, 300, Blast(30)),
        ItemId::ManaPotion => consumable(id, Common, 25, Inert),
        ItemId::ThunderBolt => consumable(id, Rare, 200, Inert),
        ItemId::PoisonDagger => consumable(id, Rare, 180, Poison(15)),
        ItemId::RevivePotion => consumable(id, Epic, 400, Revive),
        ItemId::LightningScroll => consumable(id, Epic, 350, Blast(40)),

        ItemId::FireKey => key(id, Rare, 200, KeyType::Fire),
        ItemId::IceKey => key(id, Rare, 200, KeyType::Ice),
        ItemId::EarthKey => key(id, Rare, 200, KeyType::Earth),
        ItemId::LightningKey => key(id, Rare, 200, KeyType::Lightning),
        ItemId::FinalKey => key(id, Legendary, 500, KeyType::Final),

        ItemId::FlameCrown => with_effect(
            weapon(id, Legendary, 1000, 15),
            UniqueEffect::Immunity(KeyType::Fire),
        ),
        ItemId::FrostPendant => with_effect(
            armor(id, Legendary, 1000, 10),
            UniqueEffect::Immunity(KeyType::Ice),
        ),
        ItemId::GaiasShield => with_effect(armor(id, Legendary, 1000, 15), UniqueEffect::Reflect),
        ItemId::StormBracer => with_effect(
            weapon(id, Legendary, 1000, 12),
            UniqueEffect::Immunity(KeyType::Lightning),
        ),
        ItemId::CrownOfTheConqueror => with_effect(
            weapon(id, Legendary, 1500, 20),
            UniqueEffect::PoisonImmunity,
        ),
    }
}

impl ItemId {
    /// Shop and inventory blurb.
    pub fn description(&self) -> &'static str {
        match self {
            ItemId::IronSword => "Increases attack by 5.",
            ItemId::RingOfPower => "Increases attack by 10.",
            ItemId::SilverAxe => "Increases attack by 7.",
            ItemId::SilverDagger => "Increases attack by 3.",
            ItemId::AmuletOfStrength => "Increases attack by 7.",
            ItemId::FlameSword => "Deals additional fire damage.",
            ItemId::ShadowBlade => "Deals shadow damage and has a chance to blind enemies.",
            ItemId::GoldenAxe => "Increases attack by 10.",
            ItemId::CursedRing => "Increases attack by 5 but reduces defense by 2.",
            ItemId::SteelArmor => "Increases defense by 3.",
            ItemId::GoldenShield => "Increases defense by 5.",
            ItemId::AmuletOfVitality => "Increases max HP by 30.",
            ItemId::BootsOfTheSwift => "Allows double attack per turn.",
            ItemId::ShadowCloak => "Grants invisibility for one turn.",
            ItemId::LeatherBoots => "Increases defense by 2.",
            ItemId::GuardianShield => "Increases defense by 5.",
            ItemId::BootsOfSwiftness => "Allows the player to attack twice per turn.",
            ItemId::FrostArmor => "Increases defense by 8 and slows enemies.",
            ItemId::DragonScaleMail => "Increases defense by 12 and grants fire resistance.",
            ItemId::TitaniumShield => "Increases defense by 8.",
            ItemId::HealthPotion => "Restores 50 HP.",
            ItemId::HealingHerb => "Heals 40 HP.",
            ItemId::Bomb => "Deals 20 damage to the enemy.",
            ItemId::ElixirOfFortitude => "Permanently increases defense by 5.",
            ItemId::ScrollOfFireball => "Deals 30 damage to all enemies.",
            ItemId::ManaPotion => "Restores 30 MP (not implemented).",
            ItemId::ThunderBolt => "Deals 25 lightning damage to the enemy.",
            ItemId::PoisonDagger => "Deals 15 poison damage over time.",
            ItemId::RevivePotion => "Revives the player with 50% HP.",
            ItemId::LightningScroll => "Deals 40 lightning damage to all enemies.",
            ItemId::FireKey => "Opens Fire Dungeons.",
            ItemId::IceKey => "Opens Ice Dungeons.",
            ItemId::EarthKey => "Opens Earth Dungeons.",
            ItemId::LightningKey => "Opens Lightning Dungeons.",
            ItemId::FinalKey => "Opens the Final Dungeon.",
            ItemId::FlameCrown => {
                "A crown imbued with the power of fire. Increases attack by 15 and grants fire immunity."
            }
            ItemId::FrostPendant => {
                "A pendant that channels the essence of ice. Increases defense by 10 and grants ice immunity."
            }
            ItemId::GaiasShield => {
                "A shield forged from the heart of the earth. Increases defense by 15 and reflects a portion of damage back."
            }
            ItemId::StormBracer => {
                "Bracers that harness the power of lightning. Increases attack by 12 and grants lightning immunity."
            }
            ItemId::CrownOfTheConqueror => {
                "A majestic crown that increases attack by 20 and grants immunity to one negative effect."
            }
        }
    }
}

impl Item {
    pub fn description(&self) -> &'static str {
        self.id.description()
    }
}

/// Loot-table entries that can be worn.
pub fn equippable_loot() -> Vec<ItemId> {
    LOOT_TABLE
        .iter()
        .copied()
        .filter(|id| template(*id).is_equippable())
        .collect()
}

/// Shop stock for a player holding `pages` pages.
pub fn shop_stock(pages: u32) -> Vec<ItemId> {
    let mut stock = SHOP_CATALOG.to_vec();
    if pages >= crate::core::constants::FINAL_DUNGEON_PAGES_REQUIRED {
        stock.push(ItemId::FinalKey);
    }
    stock
}
