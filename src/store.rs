use std::path::Path;

use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use crate::structs::person::{NewPerson, Person};

pub const DATABASE_PATH: &str = "agenda.db";

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS pessoas (
    id INTEGER PRIMARY KEY,
    nome TEXT,
    email TEXT,
    data_nascimento TEXT,
    phone TEXT
)";

#[derive(Debug, thiserror::Error)]
#[error("database failure: {0}")]
pub struct StoreError(#[from] tokio_rusqlite::Error);

/// Handle to the pessoas table. Cloning is cheap; every clone funnels its
/// statements through the same background connection thread, so storage
/// access is serialized without an explicit lock.
#[derive(Clone)]
pub struct PersonStore {
    connection: Connection,
}

impl PersonStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open(path.as_ref().to_owned()).await?).await
    }

    pub async fn open_in_memory() -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open_in_memory().await?).await
    }

    async fn bootstrap(connection: Connection) -> Result<Self, StoreError> {
        connection
            .call(|conn| {
                conn.execute(CREATE_TABLE, [])?;
                Ok(())
            })
            .await?;
        Ok(Self { connection })
    }

    pub async fn list_all(&self) -> Result<Vec<Person>, StoreError> {
        let people = self
            .connection
            .call(|conn| {
                let mut statement =
                    conn.prepare("SELECT id, nome, email, data_nascimento, phone FROM pessoas")?;
                let people = statement
                    .query_map([], Person::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(people)
            })
            .await?;
        Ok(people)
    }

    pub async fn create(&self, fields: NewPerson) -> Result<Person, StoreError> {
        let person = self
            .connection
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO pessoas (nome, email, data_nascimento, phone) \
                     VALUES (?1, ?2, ?3, ?4)",
                    params![fields.name, fields.email, fields.birth_date, fields.phone],
                )?;
                Ok(fields.into_person(conn.last_insert_rowid()))
            })
            .await?;
        Ok(person)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Person>, StoreError> {
        let person = self
            .connection
            .call(move |conn| {
                let person = conn
                    .query_row(
                        "SELECT id, nome, email, data_nascimento, phone FROM pessoas \
                         WHERE id = ?1",
                        params![id],
                        Person::from_row,
                    )
                    .optional()?;
                Ok(person)
            })
            .await?;
        Ok(person)
    }

    pub async fn update(&self, id: i64, fields: NewPerson) -> Result<Option<Person>, StoreError> {
        let person = self
            .connection
            .call(move |conn| {
                let changed = conn.execute(
                    "UPDATE pessoas SET nome = ?1, email = ?2, data_nascimento = ?3, phone = ?4 \
                     WHERE id = ?5",
                    params![fields.name, fields.email, fields.birth_date, fields.phone, id],
                )?;
                Ok((changed > 0).then(|| fields.into_person(id)))
            })
            .await?;
        Ok(person)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let deleted = self
            .connection
            .call(move |conn| {
                let deleted = conn.execute("DELETE FROM pessoas WHERE id = ?1", params![id])?;
                Ok(deleted > 0)
            })
            .await?;
        Ok(deleted)
    }
}
