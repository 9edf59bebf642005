//! Cart Delivery Groups Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::domain::{
    delivery_groups::{
        data::DeliveryGroupFilter,
        records::{DeliveryGroupDocument, DeliveryGroupRecord, DeliveryGroupUuid},
    },
    store::StoreError,
};

const SAVE_DELIVERY_GROUP_SQL: &str = include_str!("sql/save_delivery_group.sql");
const FIND_DELIVERY_GROUP_SQL: &str = include_str!("sql/find_delivery_group.sql");
const DELETE_DELIVERY_GROUP_SQL: &str = include_str!("sql/delete_delivery_group.sql");
const FIND_BY_CART_ID_SQL: &str = include_str!("sql/find_by_cart_id.sql");
const FIND_BY_CUSTOMER_NAME_SQL: &str = include_str!("sql/find_by_customer_name.sql");
const FIND_BY_DELIVERY_METHOD_ID_SQL: &str = include_str!("sql/find_by_delivery_method_id.sql");
const FIND_BY_SHIP_TO_PHONE_NUMBER_SQL: &str =
    include_str!("sql/find_by_ship_to_phone_number.sql");

/// Store gateway for the delivery group collection.
#[automock]
#[async_trait]
pub trait DeliveryGroupsRepository: Send + Sync {
    /// Persist a document, under a fresh UUID when none is given.
    async fn save(
        &self,
        uuid: Option<DeliveryGroupUuid>,
        document: DeliveryGroupDocument,
    ) -> Result<DeliveryGroupRecord, StoreError>;

    async fn find_by_id(
        &self,
        uuid: DeliveryGroupUuid,
    ) -> Result<Option<DeliveryGroupRecord>, StoreError>;

    /// All stored groups matching `filter`, in UUID order.
    async fn find_by(
        &self,
        filter: DeliveryGroupFilter,
    ) -> Result<Vec<DeliveryGroupRecord>, StoreError>;

    async fn delete_by_id(&self, uuid: DeliveryGroupUuid) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct PgDeliveryGroupsRepository {
    pool: PgPool,
}

impl PgDeliveryGroupsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryGroupsRepository for PgDeliveryGroupsRepository {
    async fn save(
        &self,
        uuid: Option<DeliveryGroupUuid>,
        document: DeliveryGroupDocument,
    ) -> Result<DeliveryGroupRecord, StoreError> {
        let uuid = uuid.unwrap_or_else(DeliveryGroupUuid::new);

        let record = query_as::<Postgres, DeliveryGroupRecord>(SAVE_DELIVERY_GROUP_SQL)
            .bind(uuid.into_uuid())
            .bind(Json(&document))
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn find_by_id(
        &self,
        uuid: DeliveryGroupUuid,
    ) -> Result<Option<DeliveryGroupRecord>, StoreError> {
        let record = query_as::<Postgres, DeliveryGroupRecord>(FIND_DELIVERY_GROUP_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn find_by(
        &self,
        filter: DeliveryGroupFilter,
    ) -> Result<Vec<DeliveryGroupRecord>, StoreError> {
        let (sql, value) = match filter {
            DeliveryGroupFilter::CartId(value) => (FIND_BY_CART_ID_SQL, value),
            DeliveryGroupFilter::CustomerName(value) => (FIND_BY_CUSTOMER_NAME_SQL, value),
            DeliveryGroupFilter::DeliveryMethodId(value) => (FIND_BY_DELIVERY_METHOD_ID_SQL, value),
            DeliveryGroupFilter::ShipToPhoneNumber(value) => {
                (FIND_BY_SHIP_TO_PHONE_NUMBER_SQL, value)
            }
        };

        let records = query_as::<Postgres, DeliveryGroupRecord>(sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn delete_by_id(&self, uuid: DeliveryGroupUuid) -> Result<(), StoreError> {
        query(DELETE_DELIVERY_GROUP_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for DeliveryGroupRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(document) = row.try_get::<Json<DeliveryGroupDocument>, _>("document")?;

        Ok(Self {
            uuid: DeliveryGroupUuid::from_uuid(row.try_get("uuid")?),
            document,
        })
    }
}
