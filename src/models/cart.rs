use serde::{Deserialize, Serialize};

use super::catalog_item::{CatalogItem, ItemId};

/// A copy of a catalog item taken when it was first added, plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    fn new(item: &CatalogItem) -> Self {
        Self {
            item: item.clone(),
            quantity: 1,
        }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.item.unit_price) * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_item_count: u64,
    pub total_price: u64,
}

/// Result of changing a line's quantity by a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// No line with that id is in the cart.
    Missing,
    Updated(u32),
    /// The quantity would have dropped to zero or below.
    Removed,
}

/// Ordered cart lines for one session. Lines keep insertion order.
///
/// Mutation goes through [`crate::services::CartService`]; the methods here
/// only apply already-checked transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn quantity_of(&self, id: ItemId) -> Option<u32> {
        self.line(id).map(|line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        self.lines.iter().fold(CartTotals::default(), |acc, line| CartTotals {
            total_item_count: acc.total_item_count + u64::from(line.quantity),
            total_price: acc.total_price + line.line_total(),
        })
    }

    /// Returns the new quantity, or `None` if it would overflow.
    pub(crate) fn push_or_increment(&mut self, item: &CatalogItem) -> Option<u32> {
        match self.lines.iter_mut().find(|line| line.id() == item.id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(1)?;
                Some(line.quantity)
            }
            None => {
                self.lines.push(CartLine::new(item));
                Some(1)
            }
        }
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Returns `None` if the new quantity would overflow `u32` or `i64`.
    pub(crate) fn adjust(&mut self, id: ItemId, delta: i64) -> Option<Adjustment> {
        let Some(index) = self.lines.iter().position(|line| line.id() == id) else {
            return Some(Adjustment::Missing);
        };

        let new_quantity = i64::from(self.lines[index].quantity).checked_add(delta)?;
        if new_quantity <= 0 {
            self.lines.remove(index);
            return Some(Adjustment::Removed);
        }

        let new_quantity = u32::try_from(new_quantity).ok()?;
        self.lines[index].quantity = new_quantity;
        Some(Adjustment::Updated(new_quantity))
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
