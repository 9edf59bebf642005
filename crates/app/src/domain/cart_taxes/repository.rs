//! Cart Taxes Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::domain::{
    cart_taxes::records::{CartTaxDocument, CartTaxRecord, CartTaxUuid},
    store::StoreError,
};

const SAVE_CART_TAX_SQL: &str = include_str!("sql/save_cart_tax.sql");
const FIND_CART_TAX_SQL: &str = include_str!("sql/find_cart_tax.sql");
const DELETE_CART_TAX_SQL: &str = include_str!("sql/delete_cart_tax.sql");

/// Store gateway for the cart tax collection.
#[automock]
#[async_trait]
pub trait CartTaxesRepository: Send + Sync {
    /// Persist a document. Without a UUID the store assigns one; with a UUID
    /// the stored document is replaced (or created) under that UUID.
    async fn save(
        &self,
        uuid: Option<CartTaxUuid>,
        document: CartTaxDocument,
    ) -> Result<CartTaxRecord, StoreError>;

    async fn find_by_id(&self, uuid: CartTaxUuid) -> Result<Option<CartTaxRecord>, StoreError>;

    async fn delete_by_id(&self, uuid: CartTaxUuid) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct PgCartTaxesRepository {
    pool: PgPool,
}

impl PgCartTaxesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartTaxesRepository for PgCartTaxesRepository {
    async fn save(
        &self,
        uuid: Option<CartTaxUuid>,
        document: CartTaxDocument,
    ) -> Result<CartTaxRecord, StoreError> {
        let uuid = uuid.unwrap_or_else(CartTaxUuid::new);

        let record = query_as::<Postgres, CartTaxRecord>(SAVE_CART_TAX_SQL)
            .bind(uuid.into_uuid())
            .bind(Json(&document))
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn find_by_id(&self, uuid: CartTaxUuid) -> Result<Option<CartTaxRecord>, StoreError> {
        let record = query_as::<Postgres, CartTaxRecord>(FIND_CART_TAX_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, uuid: CartTaxUuid) -> Result<(), StoreError> {
        query(DELETE_CART_TAX_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for CartTaxRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(document) = row.try_get::<Json<CartTaxDocument>, _>("document")?;

        Ok(Self {
            uuid: CartTaxUuid::from_uuid(row.try_get("uuid")?),
            document,
        })
    }
}
