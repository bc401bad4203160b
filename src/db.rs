use crate::models::{OrderReceipt, ReceiptLine, SelectionEntry};
use rusqlite::{Connection, Result};
use std::sync::Mutex;
use tauri::AppHandle;

/// Orders placed through this window. The database lives in memory, so the
/// menu is reseeded and the history starts empty on every launch.
pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        initialize_conn(&conn)
    }
}

pub fn initialize_conn(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Menu catalog
        CREATE TABLE IF NOT EXISTS menu_items (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            availability TEXT NOT NULL DEFAULT 'available',
            category TEXT NOT NULL DEFAULT 'unfiltered',
            image TEXT,
            prep_minutes INTEGER NOT NULL DEFAULT 10,
            sort_order INTEGER NOT NULL DEFAULT 0
        );

        -- Submitted orders
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            table_label TEXT NOT NULL,
            estimated_minutes INTEGER NOT NULL DEFAULT 0,
            submitted_at TEXT NOT NULL
        );

        -- Order lines, copied from the selection at submission time
        CREATE TABLE IF NOT EXISTS order_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL,
            menu_item_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(id)
        );
        ",
    )?;

    let seeded: i64 = conn.query_row("SELECT COUNT(*) FROM menu_items", [], |row| row.get(0))?;
    if seeded == 0 {
        seed_menu(conn)?;
    }

    Ok(())
}

fn seed_menu(conn: &Connection) -> Result<()> {
    // Items without an image render as a placeholder block
    let menu: [(i64, &str, &str, &str, Option<&str>, u32); 8] = [
        (1, "Basmati Fried Rice", "available", "kitchen", Some("images/rice.svg"), 15),
        (2, "Smokey Jollof Rice", "available", "kitchen", Some("images/jollof.svg"), 15),
        (3, "Suya Pasta", "unavailable", "kitchen", None, 20),
        (4, "Peppered Chicken", "available", "kitchen", None, 25),
        (5, "Chapman", "available", "bar", Some("images/chapman.svg"), 5),
        (6, "Palm Wine", "unavailable", "bar", None, 2),
        (7, "Zobo", "available", "bar", Some("images/zobo.svg"), 3),
        (8, "Chef's Platter", "available", "unfiltered", None, 30),
    ];

    let mut stmt = conn.prepare(
        "INSERT INTO menu_items (id, name, availability, category, image, prep_minutes, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for (position, (id, name, availability, category, image, prep_minutes)) in
        menu.into_iter().enumerate()
    {
        stmt.execute(rusqlite::params![
            id,
            name,
            availability,
            category,
            image,
            prep_minutes,
            position as i64
        ])?;
    }

    Ok(())
}

/// Writes a submitted order and its lines in one transaction.
pub fn record_order(
    conn: &Connection,
    table_label: &str,
    entries: &[SelectionEntry],
    estimated_minutes: u32,
) -> Result<OrderReceipt> {
    let submitted_at = chrono::Local::now().to_rfc3339();

    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO orders (table_label, estimated_minutes, submitted_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![table_label, estimated_minutes, submitted_at],
    )?;

    let order_id = tx.last_insert_rowid();

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        tx.execute(
            "INSERT INTO order_items (order_id, menu_item_id, name, quantity)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![order_id, entry.item_id, entry.name, entry.quantity],
        )?;

        items.push(ReceiptLine {
            menu_item_id: entry.item_id,
            name: entry.name.clone(),
            quantity: entry.quantity,
        });
    }

    tx.commit()?;

    Ok(OrderReceipt {
        id: order_id,
        table_label: table_label.to_string(),
        items,
        estimated_minutes,
        submitted_at,
    })
}

/// Orders submitted since launch, newest first.
pub fn order_history(conn: &Connection) -> Result<Vec<OrderReceipt>> {
    let mut stmt = conn.prepare(
        "SELECT id, table_label, estimated_minutes, submitted_at
         FROM orders
         ORDER BY id DESC",
    )?;

    let mut orders = stmt
        .query_map([], |row| {
            Ok(OrderReceipt {
                id: row.get(0)?,
                table_label: row.get(1)?,
                items: Vec::new(),
                estimated_minutes: row.get(2)?,
                submitted_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    let mut item_stmt = conn.prepare(
        "SELECT menu_item_id, name, quantity FROM order_items WHERE order_id = ?1 ORDER BY id",
    )?;

    for order in &mut orders {
        order.items = item_stmt
            .query_map([order.id], |row| {
                Ok(ReceiptLine {
                    menu_item_id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;
    }

    Ok(orders)
}

use tauri::Manager;

pub trait DatabaseExt {
    fn db(&self) -> &Database;
}

impl DatabaseExt for AppHandle {
    fn db(&self) -> &Database {
        self.state::<Database>().inner()
    }
}
