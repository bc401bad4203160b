use crate::error::SessionError;
use crate::models::{Availability, Category, MenuItem};
use rusqlite::Connection;

/// The fixed menu, read once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn load(conn: &Connection) -> Result<Self, SessionError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, availability, category, image, prep_minutes
             FROM menu_items
             ORDER BY sort_order, id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, u32>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut items = Vec::with_capacity(rows.len());
        for (id, name, availability, category, image, prep_minutes) in rows {
            let availability = Availability::parse(&availability)
                .ok_or(SessionError::UnknownAvailability(availability))?;
            let category =
                Category::parse(&category).ok_or(SessionError::UnknownCategory(category))?;

            items.push(MenuItem {
                id,
                name,
                availability,
                category,
                image,
                prep_minutes,
            });
        }

        Ok(Self { items })
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in menu order whose category matches; `Unfiltered` returns everything.
    pub fn filter(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category == Category::Unfiltered || item.category == category)
            .collect()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
