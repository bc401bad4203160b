use crate::models::{MenuItem, SelectionEntry};

/// The customer's in-progress choices, kept in first-selection order.
///
/// Every entry has a quantity of at least one; decrementing the last unit
/// removes the entry instead of leaving a zero behind.
#[derive(Debug, Default, Clone)]
pub struct SelectionLedger {
    entries: Vec<SelectionEntry>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`. Availability and lifecycle checks belong to
    /// the session; the ledger only does the bookkeeping.
    pub fn add(&mut self, item: &MenuItem) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item.id) {
            entry.quantity += 1;
            return entry.quantity;
        }

        self.entries.push(SelectionEntry {
            item_id: item.id,
            name: item.name.clone(),
            image: item.image.clone(),
            prep_minutes: item.prep_minutes,
            quantity: 1,
        });
        1
    }

    /// Removes one unit. Returns the remaining quantity, or `None` when the
    /// item was not selected.
    pub fn remove(&mut self, item_id: i64) -> Option<u32> {
        let index = self.entries.iter().position(|e| e.item_id == item_id)?;

        let entry = &mut self.entries[index];
        entry.quantity -= 1;
        let remaining = entry.quantity;

        if remaining == 0 {
            self.entries.remove(index);
        }

        Some(remaining)
    }

    pub fn is_selected(&self, item_id: i64) -> bool {
        self.entries.iter().any(|e| e.item_id == item_id)
    }

    pub fn quantity_of(&self, item_id: i64) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }
}
