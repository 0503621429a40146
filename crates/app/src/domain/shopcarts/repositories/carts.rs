//! Shopcarts Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::shopcarts::models::{CustomerId, ProductId, Shopcart, ShopcartId};

const GET_SHOPCART_SQL: &str = include_str!("../sql/get_shopcart.sql");
const LIST_SHOPCARTS_SQL: &str = include_str!("../sql/list_shopcarts.sql");
const FIND_SHOPCART_BY_CUSTOMER_SQL: &str = include_str!("../sql/find_shopcart_by_customer.sql");
const LIST_SHOPCARTS_WITH_PRODUCT_SQL: &str =
    include_str!("../sql/list_shopcarts_with_product.sql");
const CREATE_SHOPCART_SQL: &str = include_str!("../sql/create_shopcart.sql");
const SET_SHOPCART_CUSTOMER_SQL: &str = include_str!("../sql/set_shopcart_customer.sql");
const DELETE_SHOPCART_SQL: &str = include_str!("../sql/delete_shopcart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShopcartsRepository;

impl PgShopcartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
    ) -> Result<Shopcart, sqlx::Error> {
        query_as::<Postgres, Shopcart>(GET_SHOPCART_SQL)
            .bind(shopcart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_shopcarts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(LIST_SHOPCARTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(FIND_SHOPCART_BY_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_with_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Vec<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(LIST_SHOPCARTS_WITH_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Shopcart, sqlx::Error> {
        query_as::<Postgres, Shopcart>(CREATE_SHOPCART_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        customer: CustomerId,
    ) -> Result<Shopcart, sqlx::Error> {
        query_as::<Postgres, Shopcart>(SET_SHOPCART_CUSTOMER_SQL)
            .bind(shopcart.into_i64())
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SHOPCART_SQL)
            .bind(shopcart.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Shopcart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ShopcartId::from_i64(row.try_get("id")?),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            items: Vec::new(),
        })
    }
}
