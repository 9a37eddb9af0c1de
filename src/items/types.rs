use serde::{Deserialize, Serialize};

/// Cosmetic rarity tier. Ordering is display-only; no power invariant follows from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Element of a dungeon key. Also names the dungeon it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Fire,
    Ice,
    Earth,
    Lightning,
    Final,
}

impl KeyType {
    /// The four elemental dungeons, in menu order.
    pub const ELEMENTS: [KeyType; 4] = [
        KeyType::Fire,
        KeyType::Ice,
        KeyType::Earth,
        KeyType::Lightning,
    ];

    pub const ALL: [KeyType; 5] = [
        KeyType::Fire,
        KeyType::Ice,
        KeyType::Earth,
        KeyType::Lightning,
        KeyType::Final,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KeyType::Fire => "Fire",
            KeyType::Ice => "Ice",
            KeyType::Earth => "Earth",
            KeyType::Lightning => "Lightning",
            KeyType::Final => "Final",
        }
    }

    /// The key item that opens this dungeon.
    pub fn key_item(&self) -> ItemId {
        match self {
            KeyType::Fire => ItemId::FireKey,
            KeyType::Ice => ItemId::IceKey,
            KeyType::Earth => ItemId::EarthKey,
            KeyType::Lightning => ItemId::LightningKey,
            KeyType::Final => ItemId::FinalKey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

impl EquipmentSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
        }
    }
}

/// What a consumable does when used. Resolved once when the catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    /// Restore this much HP plus a per-page bonus.
    Heal(i32),
    /// Permanent defense increase.
    Fortify(i32),
    /// Self-inflicted damage plus a per-page bonus.
    Poison(i32),
    /// Bring a downed player back to half HP.
    Revive,
    /// Flat damage to the current enemy. Only lands inside combat.
    Blast(i32),
    /// Nothing happens.
    Inert,
}

/// Special behaviour attached to a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniqueEffect {
    /// Weapon: chance to double attack damage.
    DoubleDamageChance,
    /// Weapon: flat fire damage on every attack.
    FireDamage,
    /// Armor: attack twice per turn.
    DoubleStrike,
    /// Armor: incoming damage reduced by 10%.
    DamageReduction,
    /// Armor: the enemy's attack decays by 10% every turn it strikes.
    Slow,
    /// Armor: chance to avoid an attack entirely.
    Invisibility,
    /// Armor: extra max HP while worn.
    Vitality,
    // Flavour only, no combat handler
    Blind,
    FireResistance,
    Cursed,
    Reflect,
    Immunity(KeyType),
    PoisonImmunity,
}

impl UniqueEffect {
    pub fn description(&self) -> &'static str {
        match self {
            UniqueEffect::DoubleDamageChance => "Grants a chance to deal double damage.",
            UniqueEffect::FireDamage => "Adds 10 fire damage on each attack.",
            UniqueEffect::DoubleStrike => "Allows the player to attack twice per turn.",
            UniqueEffect::DamageReduction => "Reduces incoming damage by 10%.",
            UniqueEffect::Slow => "Slows enemies by 10%.",
            UniqueEffect::Invisibility => "Grants invisibility for one turn.",
            UniqueEffect::Vitality => "Increases max HP by 30.",
            UniqueEffect::Blind => "Chance to blind enemies on hit.",
            UniqueEffect::FireResistance => "Grants fire resistance.",
            UniqueEffect::Cursed => "Increases attack by 5 but reduces defense by 2.",
            UniqueEffect::Reflect => "Reflects 10% of incoming damage back to the attacker.",
            UniqueEffect::Immunity(KeyType::Fire) => "Grants immunity to fire damage.",
            UniqueEffect::Immunity(KeyType::Ice) => "Grants immunity to ice damage.",
            UniqueEffect::Immunity(KeyType::Lightning) => "Grants immunity to lightning damage.",
            UniqueEffect::Immunity(_) => "Grants elemental immunity.",
            UniqueEffect::PoisonImmunity => "Grants immunity to poison.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable(ConsumableEffect),
    Key(KeyType),
}

impl ItemKind {
    /// Slot this kind of item is worn in, if any.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon => Some(EquipmentSlot::Weapon),
            ItemKind::Armor => Some(EquipmentSlot::Armor),
            ItemKind::Consumable(_) | ItemKind::Key(_) => None,
        }
    }
}

/// Identity of every item the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    // Weapons
    IronSword,
    RingOfPower,
    SilverAxe,
    SilverDagger,
    AmuletOfStrength,
    FlameSword,
    ShadowBlade,
    GoldenAxe,
    CursedRing,
    // Armor
    SteelArmor,
    GoldenShield,
    AmuletOfVitality,
    BootsOfTheSwift,
    ShadowCloak,
    LeatherBoots,
    GuardianShield,
    BootsOfSwiftness,
    FrostArmor,
    DragonScaleMail,
    TitaniumShield,
    // Consumables
    HealthPotion,
    HealingHerb,
    Bomb,
    ElixirOfFortitude,
    ScrollOfFireball,
    ManaPotion,
    ThunderBolt,
    PoisonDagger,
    RevivePotion,
    LightningScroll,
    // Keys
    FireKey,
    IceKey,
    EarthKey,
    LightningKey,
    FinalKey,
    // Boss uniques
    FlameCrown,
    FrostPendant,
    GaiasShield,
    StormBracer,
    CrownOfTheConqueror,
}

impl ItemId {
    pub fn name(&self) -> &'static str {
        match self {
            ItemId::IronSword => "Iron Sword",
            ItemId::RingOfPower => "Ring of Power",
            ItemId::SilverAxe => "Silver Axe",
            ItemId::SilverDagger => "Silver Dagger",
            ItemId::AmuletOfStrength => "Amulet of Strength",
            ItemId::FlameSword => "Flame Sword",
            ItemId::ShadowBlade => "Shadow Blade",
            ItemId::GoldenAxe => "Golden Axe",
            ItemId::CursedRing => "Cursed Ring",
            ItemId::SteelArmor => "Steel Armor",
            ItemId::GoldenShield => "Golden Shield",
            ItemId::AmuletOfVitality => "Amulet of Vitality",
            ItemId::BootsOfTheSwift => "Boots of the Swift",
            ItemId::ShadowCloak => "Shadow Cloak",
            ItemId::LeatherBoots => "Leather Boots",
            ItemId::GuardianShield => "Guardian Shield",
            ItemId::BootsOfSwiftness => "Boots of Swiftness",
            ItemId::FrostArmor => "Frost Armor",
            ItemId::DragonScaleMail => "Dragon Scale Mail",
            ItemId::TitaniumShield => "Titanium Shield",
            ItemId::HealthPotion => "Health Potion",
            ItemId::HealingHerb => "Healing Herb",
            ItemId::Bomb => "Bomb",
            ItemId::ElixirOfFortitude => "Elixir of Fortitude",
            ItemId::ScrollOfFireball => "Scroll of Fireball",
            ItemId::ManaPotion => "Mana Potion",
            ItemId::ThunderBolt => "Thunder Bolt",
            ItemId::PoisonDagger => "Poison Dagger",
            ItemId::RevivePotion => "Revive Potion",
            ItemId::LightningScroll => "Lightning Scroll",
            ItemId::FireKey => "Fire Key",
            ItemId::IceKey => "Ice Key",
            ItemId::EarthKey => "Earth Key",
            ItemId::LightningKey => "Lightning Key",
            ItemId::FinalKey => "Final Key",
            ItemId::FlameCrown => "Flame Crown",
            ItemId::FrostPendant => "Frost Pendant",
            ItemId::GaiasShield => "Gaia's Shield",
            ItemId::StormBracer => "Storm Bracer",
            ItemId::CrownOfTheConqueror => "Crown of the Conqueror",
        }
    }
}

/// An owned item. Catalog templates are never mutated; drops and purchases
/// are fresh copies with page-scaled bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub rarity: Rarity,
    pub price: u32,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub unique_effect: Option<UniqueEffect>,
    pub kind: ItemKind,
}

impl Item {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn is_key(&self) -> bool {
        matches!(self.kind, ItemKind::Key(_))
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable(_))
    }

    pub fn is_equippable(&self) -> bool {
        self.kind.slot().is_some()
    }

    pub fn key_type(&self) -> Option<KeyType> {
        match self.kind {
            ItemKind::Key(key_type) => Some(key_type),
            _ => None,
        }
    }

    /// Copy with attack and defense bonuses raised by the page count.
    pub fn scaled(&self, pages: u32) -> Item {
        let bonus = pages as i32;
        Item {
            attack_bonus: self.attack_bonus + bonus,
            defense_bonus: self.defense_bonus + bonus,
            ..self.clone()
        }
    }
}
