//! Rest, shop, inventory and achievement screens.

use rand::Rng;

use super::session::{labels, Game};
use crate::achievements::{get_achievements_by_category, AchievementCategory};
use crate::errors::{GameError, Rejection};
use crate::events::{GameEvent, Tone};
use crate::items::{shop_stock, template, use_consumable, ItemKind};
use crate::town;
use crate::ui::Presenter;

impl<P: Presenter, R: Rng> Game<P, R> {
    pub fn rest(&mut self) -> Result<(), GameError> {
        self.screen()?;
        let events = town::rest(&mut self.state.player);
        self.presenter.show_events(&events);
        self.presenter.pause()
    }

    pub fn visit_shop(&mut self) -> Result<(), GameError> {
        let options = labels(&[
            "Buy Items 🛍️",
            "Sell Dungeon Keys 🏷️",
            "Return to Main Menu ↩️",
        ]);
        loop {
            self.screen()?;
            match self.presenter.choose("--- Shop --- 🛒", &options)? {
                0 => self.buy_items()?,
                1 => self.sell_keys()?,
                _ => return Ok(()),
            }
        }
    }

    fn buy_items(&mut self) -> Result<(), GameError> {
        loop {
            self.screen()?;
            let stock = shop_stock(self.state.player.pages);
            let mut options: Vec<String> = stock
                .iter()
                .map(|id| {
                    let item = template(*id);
                    format!(
                        "{} - {} | Price: {} gold",
                        item.name(),
                        item.description(),
                        item.price
                    )
                })
                .collect();
            options.push("Return to Shop".to_string());

            let choice = self
                .presenter
                .choose("--- Shop: Buy Items --- 🛍️", &options)?;
            let Some(&id) = stock.get(choice) else {
                return Ok(());
            };
            match town::buy(&mut self.state.player, id) {
                Ok(events) => self.presenter.show_events(&events),
                Err(rejection) => self.say(&rejection.to_string(), Tone::Warning),
            }
            self.presenter.pause()?;
        }
    }

    fn sell_keys(&mut self) -> Result<(), GameError> {
        loop {
            self.screen()?;
            let keys = self.state.player.keys;
            self.say("--- Shop: Sell Dungeon Keys --- 🏷️", Tone::Info);
            self.say(
                &format!("You have {} Dungeon Key(s). Each key sells for 10 gold.", keys),
                Tone::Info,
            );
            let Some(quantity) = self
                .presenter
                .ask_quantity("Enter number of keys to sell", keys)?
            else {
                return Ok(());
            };
            match town::sell_keys(&mut self.state.player, quantity) {
                Ok(events) => self.presenter.show_events(&events),
                Err(rejection) => self.say(&rejection.to_string(), Tone::Warning),
            }
            self.presenter.pause()?;
        }
    }

    pub fn view_inventory(&mut self) -> Result<(), GameError> {
        loop {
            self.screen()?;
            let inventory = &self.state.player.inventory;
            if inventory.is_empty() {
                return self.reject(Rejection::EmptyInventory);
            }
            let mut options: Vec<String> = inventory
                .items
                .iter()
                .map(|item| {
                    let worn = if inventory.slot_of(item).is_some() {
                        " [equipped]"
                    } else {
                        ""
                    };
                    format!(
                        "{} ({}) - {}{}",
                        item.name(),
                        item.rarity.name(),
                        item.description(),
                        worn
                    )
                })
                .collect();
            options.push("Return to Main Menu".to_string());

            let choice = self.presenter.choose("--- Inventory --- 📦", &options)?;
            if choice >= self.state.player.inventory.len() {
                return Ok(());
            }
            self.item_menu(choice)?;
        }
    }

    fn item_menu(&mut self, index: usize) -> Result<(), GameError> {
        let Some(item) = self.state.player.inventory.get(index).cloned() else {
            return self.reject(Rejection::NoSuchItem);
        };
        let worn = self.state.player.inventory.slot_of(&item);
        let primary = match (item.kind, worn) {
            (_, Some(_)) => Some("Unequip ↩️"),
            (ItemKind::Weapon, None) => Some("Equip as Weapon 🗡️"),
            (ItemKind::Armor, None) => Some("Equip as Armor 🛡️"),
            (ItemKind::Consumable(_), None) => Some("Use Item 🍎"),
            (ItemKind::Key(_), None) => None,
        };
        let mut options: Vec<String> = primary.into_iter().map(str::to_string).collect();
        let sell_label = if item.is_key() { "Sell Key 💰" } else { "Sell Item 💰" };
        options.push(sell_label.to_string());
        options.push("Return to Inventory ↩️".to_string());

        let title = format!("Selected: {}", item.name());
        let mut choice = self.presenter.choose(&title, &options)?;
        if primary.is_none() {
            choice += 1;
        }

        let result: Result<Vec<GameEvent>, Rejection> = match choice {
            0 => match (item.kind, worn) {
                (_, Some(slot)) => self.state.player.unequip(slot),
                (ItemKind::Consumable(_), None) => {
                    use_consumable(&mut self.state.player, index, None)
                }
                _ => self.state.player.equip(index),
            },
            1 => self.state.player.sell_item(index),
            _ => return Ok(()),
        };
        match result {
            Ok(events) => self.presenter.show_events(&events),
            Err(rejection) => self.say(&rejection.to_string(), Tone::Warning),
        }
        self.presenter.pause()
    }

    pub fn view_achievements(&mut self) -> Result<(), GameError> {
        self.screen()?;
        self.say("--- Achievements --- 🏆", Tone::Info);
        for category in AchievementCategory::ALL {
            self.say(&format!("[{}]", category.name()), Tone::Info);
            for def in get_achievements_by_category(category) {
                let unlocked = self.state.player.achievements.is_unlocked(def.id);
                let (mark, tone) = if unlocked {
                    ("✔️", Tone::Success)
                } else {
                    ("❌", Tone::Danger)
                };
                self.say(
                    &format!("{} {} - {}", mark, def.name, def.description),
                    tone,
                );
            }
        }
        let unlocked = self.state.player.achievements.count();
        self.say(&format!("Unlocked: {}", unlocked), Tone::Info);
        self.presenter.pause()
    }
}
