//! PostgreSQL Contact Repository Implementation
//!
//! Implements the ContactRepository trait using SQLx for PostgreSQL.
//! Identifiers are generated by the database on insert.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::ContactRepository;
use crate::domain::models::contact::{Contact, ContactFields, ContactId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the contacts table
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact::restore(ContactId::from_uuid(row.id), row.name, row.email, row.phone)
    }
}

/// PostgreSQL implementation of ContactRepository
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Create a new PostgresContactRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, name, email, phone
            FROM contacts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn create(&self, fields: &ContactFields) -> Result<Contact, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.phone.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, RepositoryError> {
        // COALESCE keeps the stored value for every field the caller left out
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone)
            WHERE id = $1
            RETURNING id, name, email, phone
            "#,
        )
        .bind(id.as_uuid())
        .bind(fields.name.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.phone.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Contact::from))
    }

    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            DELETE FROM contacts
            WHERE id = $1
            RETURNING id, name, email, phone
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Contact::from))
    }
}
