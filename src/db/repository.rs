use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use crate::db::migrations::run_migrations;
use crate::error::Result;
use crate::models::UserProfile;
use crate::profile::ProfileStore;

// ─── Profile rows ────────────────────────────────────────────────────────────

pub struct ProfileRepo;

impl ProfileRepo {
    pub fn get(conn: &Connection, id: &str) -> Result<Option<UserProfile>> {
        let raw = conn
            .query_row(
                "SELECT data FROM profiles WHERE id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match raw {
            None => Ok(None),
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        }
    }

    pub fn put(conn: &Connection, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        conn.execute(
            "INSERT INTO profiles (id, data, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![profile.id, json],
        )?;
        Ok(())
    }

    pub fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let n = conn.execute("DELETE FROM profiles WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    pub fn list_ids(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare("SELECT id FROM profiles ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A [`ProfileStore`] backed by SQLite. Each store is bound to one profile id,
/// so several profiles can share a database without seeing each other.
pub struct SqliteProfileStore {
    conn: Connection,
    profile_id: String,
}

impl SqliteProfileStore {
    pub fn open(path: &Path, profile_id: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        // WAL keeps readers from blocking on the settings writer
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::from_connection(conn, profile_id)
    }

    pub fn open_in_memory(profile_id: &str) -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, profile_id)
    }

    fn from_connection(conn: Connection, profile_id: &str) -> Result<Self> {
        run_migrations(&conn)?;
        Ok(Self {
            conn,
            profile_id: profile_id.to_string(),
        })
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn delete(&self) -> Result<bool> {
        ProfileRepo::delete(&self.conn, &self.profile_id)
    }
}

impl ProfileStore for SqliteProfileStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        log::debug!("loading profile '{}'", self.profile_id);
        ProfileRepo::get(&self.conn, &self.profile_id)
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        // the store's id wins so a profile cannot be written under another key
        if profile.id == self.profile_id {
            ProfileRepo::put(&self.conn, profile)?;
        } else {
            let mut owned = profile.clone();
            owned.id = self.profile_id.clone();
            ProfileRepo::put(&self.conn, &owned)?;
        }
        log::debug!("saved profile '{}'", self.profile_id);
        Ok(())
    }
}
