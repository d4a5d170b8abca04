//! Creator merchandise shop

use super::types::{Merchandise, MerchandiseUpdate};

#[derive(Clone, Debug, Default)]
pub struct MerchandiseStore {
    items: Vec<Merchandise>,
}

impl MerchandiseStore {
    pub fn new(items: Vec<Merchandise>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Merchandise] {
        &self.items
    }

    pub fn add(&mut self, item: Merchandise) {
        tracing::debug!(merch_id = %item.id, creator_id = %item.creator_id, "Merchandise added");
        self.items.push(item);
    }

    pub fn update(&mut self, id: &str, update: MerchandiseUpdate) {
        if let Some(item) = self.items.iter_mut().find(|m| m.id == id) {
            update.apply(item);
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|m| m.id != id);
    }

    pub fn by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a Merchandise> {
        self.items.iter().filter(move |m| m.creator_id == creator_id)
    }
}
