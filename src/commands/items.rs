use crate::catalog::Catalog;
use crate::db::Database;
use crate::models::{BasketItem, Category, ItemRef, Product};
use rusqlite::{Connection, Row};

fn item_from_row(row: &Row) -> rusqlite::Result<BasketItem> {
    let product_id: Option<String> = row.get(2)?;
    let custom_name: Option<String> = row.get(3)?;

    let product = match product_id {
        Some(product_id) => ItemRef::Catalog { product_id },
        None => ItemRef::Custom {
            name: custom_name.unwrap_or_default(),
        },
    };

    Ok(BasketItem {
        id: row.get(0)?,
        list_id: row.get(1)?,
        product,
        quantity: row.get(4)?,
        added_at: row.get(5)?,
    })
}

fn fetch_item(conn: &Connection, id: i64) -> rusqlite::Result<Option<BasketItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, list_id, product_id, custom_name, quantity, added_at
         FROM list_items
         WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map([id], item_from_row)?;
    rows.next().transpose()
}

/// Add a catalog product to a list. Items are keyed by (list, product): a
/// second add of the same product bumps the existing row's quantity instead
/// of inserting a duplicate.
pub fn add_item_to_list(
    db: &Database,
    list_id: i64,
    product: &Product,
    quantity: i64,
) -> Result<BasketItem, String> {
    let quantity = quantity.max(1);
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM list_items WHERE list_id = ?1 AND product_id = ?2",
            rusqlite::params![list_id, product.id],
            |row| row.get(0),
        )
        .ok();

    let id = match existing {
        Some(id) => {
            conn.execute(
                "UPDATE list_items SET quantity = quantity + ?1 WHERE id = ?2",
                rusqlite::params![quantity, id],
            )
            .map_err(|e| e.to_string())?;
            id
        }
        None => {
            conn.execute(
                "INSERT INTO list_items (list_id, product_id, quantity) VALUES (?1, ?2, ?3)",
                rusqlite::params![list_id, product.id, quantity],
            )
            .map_err(|e| e.to_string())?;
            conn.last_insert_rowid()
        }
    };

    log::debug!("added {} x{} to list {}", product.id, quantity, list_id);

    fetch_item(&conn, id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Item not found after insert".to_string())
}

/// Free-text entry with no catalog match. Customs are never merged; each
/// add is its own row.
pub fn add_custom_item(
    db: &Database,
    list_id: i64,
    name: &str,
    quantity: i64,
) -> Result<BasketItem, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Item name cannot be empty".to_string());
    }
    let quantity = quantity.max(1);

    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT INTO list_items (list_id, custom_name, quantity) VALUES (?1, ?2, ?3)",
        rusqlite::params![list_id, name, quantity],
    )
    .map_err(|e| e.to_string())?;

    let id = conn.last_insert_rowid();

    fetch_item(&conn, id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Item not found after insert".to_string())
}

/// Set an item's quantity. A quantity of zero or below removes the row
/// entirely; no zero-quantity item ever persists. Returns the updated item,
/// or `None` when the item was removed or never existed.
pub fn update_item_quantity(
    db: &Database,
    item_id: i64,
    quantity: i64,
) -> Result<Option<BasketItem>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    if quantity <= 0 {
        conn.execute("DELETE FROM list_items WHERE id = ?1", [item_id])
            .map_err(|e| e.to_string())?;
        return Ok(None);
    }

    conn.execute(
        "UPDATE list_items SET quantity = ?1 WHERE id = ?2",
        rusqlite::params![quantity, item_id],
    )
    .map_err(|e| e.to_string())?;

    if conn.changes() == 0 {
        return Ok(None);
    }

    fetch_item(&conn, item_id).map_err(|e| e.to_string())
}

pub fn remove_item_from_list(db: &Database, item_id: i64) -> Result<(), String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    conn.execute("DELETE FROM list_items WHERE id = ?1", [item_id])
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// All items of a list in insertion order.
pub fn get_list_items(db: &Database, list_id: i64) -> Result<Vec<BasketItem>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT id, list_id, product_id, custom_name, quantity, added_at
             FROM list_items
             WHERE list_id = ?1
             ORDER BY id",
        )
        .map_err(|e| e.to_string())?;

    let items = stmt
        .query_map([list_id], item_from_row)
        .map_err(|e| e.to_string())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    Ok(items)
}

/// Group a list's items for display, in the fixed category order. Custom
/// entries land in Pantry, like unmatched extractions do.
pub fn get_items_by_category(
    db: &Database,
    catalog: &Catalog,
    list_id: i64,
) -> Result<Vec<(Category, Vec<BasketItem>)>, String> {
    let items = get_list_items(db, list_id)?;

    let mut grouped: Vec<(Category, Vec<BasketItem>)> =
        Category::ALL.iter().map(|&c| (c, Vec::new())).collect();

    for item in items {
        let category = match &item.product {
            ItemRef::Catalog { product_id } => catalog
                .product_by_id(product_id)
                .map(|p| p.category)
                .unwrap_or(Category::Pantry),
            ItemRef::Custom { .. } => Category::Pantry,
        };
        if let Some(group) = grouped.iter_mut().find(|(c, _)| *c == category) {
            group.1.push(item);
        }
    }

    Ok(grouped)
}
