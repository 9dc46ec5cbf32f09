use crate::catalog::Catalog;
use crate::db::Database;
use crate::models::{Collaborator, CreateList, List, Role, UpdateList};
use rusqlite::Connection;

const ACTIVE_LIST_KEY: &str = "active_list";

pub fn get_lists(db: &Database) -> Result<Vec<List>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT id, name, color, image_url, created_at, updated_at
             FROM lists
             ORDER BY id",
        )
        .map_err(|e| e.to_string())?;

    let lists = stmt
        .query_map([], |row| {
            Ok(List {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
                image_url: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })
        .map_err(|e| e.to_string())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    Ok(lists)
}

pub fn get_list(db: &Database, id: i64) -> Result<Option<List>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;
    fetch_list(&conn, id).map_err(|e| e.to_string())
}

fn fetch_list(conn: &Connection, id: i64) -> rusqlite::Result<Option<List>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, color, image_url, created_at, updated_at
         FROM lists
         WHERE id = ?1",
    )?;

    let mut rows = stmt.query_map([id], |row| {
        Ok(List {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
            image_url: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    })?;

    rows.next().transpose()
}

/// Create a list and make it the active one. Extracted initial items are
/// fuzzy-matched against the catalog; unmatched lines become custom entries.
pub fn create_list(db: &Database, catalog: &Catalog, req: CreateList) -> Result<List, String> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err("List name cannot be empty".to_string());
    }

    let conn = db.conn.lock().map_err(|e| e.to_string())?;
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO lists (name, color, image_url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![name, req.color, req.image_url, now, now],
    )
    .map_err(|e| e.to_string())?;

    let id = conn.last_insert_rowid();

    for item in &req.initial_items {
        let item_name = item.name.trim();
        if item_name.is_empty() {
            continue;
        }
        let quantity = item.quantity.max(1);

        match catalog.fuzzy_match(item_name) {
            Some(product) => conn.execute(
                "INSERT INTO list_items (list_id, product_id, quantity) VALUES (?1, ?2, ?3)",
                rusqlite::params![id, product.id, quantity],
            ),
            None => conn.execute(
                "INSERT INTO list_items (list_id, custom_name, quantity) VALUES (?1, ?2, ?3)",
                rusqlite::params![id, item_name, quantity],
            ),
        }
        .map_err(|e| e.to_string())?;
    }

    set_active(&conn, Some(id)).map_err(|e| e.to_string())?;

    log::info!(
        "created list {} with {} initial items",
        id,
        req.initial_items.len()
    );

    Ok(List {
        id,
        name: name.to_string(),
        color: req.color,
        image_url: req.image_url,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Merge the supplied fields onto an existing list. An unknown id is a
/// benign no-op and returns `None`.
pub fn update_list(db: &Database, update: UpdateList) -> Result<Option<List>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;
    let now = chrono::Utc::now().to_rfc3339();

    let name = update
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    conn.execute(
        "UPDATE lists
         SET name = COALESCE(?1, name),
             color = COALESCE(?2, color),
             image_url = COALESCE(?3, image_url),
             updated_at = ?4
         WHERE id = ?5",
        rusqlite::params![name, update.color, update.image_url, now, update.id],
    )
    .map_err(|e| e.to_string())?;

    if conn.changes() == 0 {
        return Ok(None);
    }

    fetch_list(&conn, update.id).map_err(|e| e.to_string())
}

/// Delete a list with an explicit cascade over its items and collaborators.
/// If the deleted list was active, the first remaining list (in creation
/// order) becomes active.
pub fn delete_list(db: &Database, id: i64) -> Result<(), String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    conn.execute("DELETE FROM list_items WHERE list_id = ?1", [id])
        .map_err(|e| e.to_string())?;
    conn.execute("DELETE FROM collaborators WHERE list_id = ?1", [id])
        .map_err(|e| e.to_string())?;
    conn.execute("DELETE FROM lists WHERE id = ?1", [id])
        .map_err(|e| e.to_string())?;

    let active: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [ACTIVE_LIST_KEY],
            |row| row.get(0),
        )
        .ok();

    if active == Some(id.to_string()) {
        let next: Option<i64> = conn
            .query_row("SELECT id FROM lists ORDER BY id LIMIT 1", [], |row| {
                row.get(0)
            })
            .ok();
        set_active(&conn, next).map_err(|e| e.to_string())?;
    }

    log::info!("deleted list {}", id);
    Ok(())
}

fn set_active(conn: &Connection, id: Option<i64>) -> rusqlite::Result<()> {
    match id {
        Some(id) => {
            conn.execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![ACTIVE_LIST_KEY, id.to_string()],
            )?;
        }
        None => {
            conn.execute("DELETE FROM settings WHERE key = ?1", [ACTIVE_LIST_KEY])?;
        }
    }
    Ok(())
}

/// Point the active-list marker at an existing list; unknown ids are ignored.
pub fn set_active_list(db: &Database, id: i64) -> Result<(), String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let exists: bool = conn
        .query_row("SELECT 1 FROM lists WHERE id = ?1", [id], |_| Ok(true))
        .unwrap_or(false);
    if !exists {
        return Ok(());
    }

    set_active(&conn, Some(id)).map_err(|e| e.to_string())
}

pub fn get_active_list(db: &Database) -> Result<Option<List>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [ACTIVE_LIST_KEY],
            |row| row.get(0),
        )
        .ok();

    match value.and_then(|v| v.parse::<i64>().ok()) {
        Some(id) => fetch_list(&conn, id).map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

/// Additive sharing metadata. Duplicate emails are allowed; deduplication
/// is left to callers.
pub fn add_collaborator(
    db: &Database,
    list_id: i64,
    email: &str,
    role: Role,
) -> Result<Collaborator, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Collaborator email cannot be empty".to_string());
    }

    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT INTO collaborators (list_id, email, role) VALUES (?1, ?2, ?3)",
        rusqlite::params![list_id, email, role.as_str()],
    )
    .map_err(|e| e.to_string())?;

    let id = conn.last_insert_rowid();
    let added_at: String = conn
        .query_row(
            "SELECT added_at FROM collaborators WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;

    log::debug!("added collaborator {} to list {}", email, list_id);

    Ok(Collaborator {
        id,
        list_id,
        email: email.to_string(),
        role,
        added_at,
    })
}

pub fn remove_collaborator(db: &Database, id: i64) -> Result<(), String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    conn.execute("DELETE FROM collaborators WHERE id = ?1", [id])
        .map_err(|e| e.to_string())?;

    Ok(())
}

pub fn get_list_collaborators(db: &Database, list_id: i64) -> Result<Vec<Collaborator>, String> {
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT id, list_id, email, role, added_at
             FROM collaborators
             WHERE list_id = ?1
             ORDER BY id",
        )
        .map_err(|e| e.to_string())?;

    let collaborators = stmt
        .query_map([list_id], |row| {
            Ok(Collaborator {
                id: row.get(0)?,
                list_id: row.get(1)?,
                email: row.get(2)?,
                role: Role::from_db(&row.get::<_, String>(3)?),
                added_at: row.get(4)?,
            })
        })
        .map_err(|e| e.to_string())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    Ok(collaborators)
}
