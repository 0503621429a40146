//! Cart Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::shopcarts::{
    data::NewCartItem,
    models::{CartItem, ProductId, ShopcartId},
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");
const FIND_CART_ITEM_SQL: &str = include_str!("../sql/find_cart_item.sql");
const UPSERT_CART_ITEM_SQL: &str = include_str!("../sql/upsert_cart_item.sql");
const UPDATE_CART_ITEM_SQL: &str = include_str!("../sql/update_cart_item.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("../sql/delete_cart_item.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");
const DELETE_CART_ITEMS_BY_PRODUCT_SQL: &str =
    include_str!("../sql/delete_cart_items_by_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
            .bind(shopcart.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(LIST_CART_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(FIND_CART_ITEM_SQL)
            .bind(shopcart.into_i64())
            .bind(product.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Insert an item, or merge into the existing (shopcart, product) row by
    /// incrementing its quantity.
    pub(crate) async fn upsert_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        item: &NewCartItem,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(UPSERT_CART_ITEM_SQL)
            .bind(shopcart.into_i64())
            .bind(item.product_id.into_i64())
            .bind(try_bind_quantity(item.quantity)?)
            .bind(item.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        product: ProductId,
        quantity: u32,
        price: f64,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(UPDATE_CART_ITEM_SQL)
            .bind(shopcart.into_i64())
            .bind(product.into_i64())
            .bind(try_bind_quantity(quantity)?)
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(shopcart.into_i64())
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEMS_SQL)
            .bind(shopcart.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_cart_items_by_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        products: &[ProductId],
    ) -> Result<u64, sqlx::Error> {
        let product_ids: Vec<i64> = products.iter().copied().map(ProductId::into_i64).collect();

        let rows_affected = query(DELETE_CART_ITEMS_BY_PRODUCT_SQL)
            .bind(shopcart.into_i64())
            .bind(product_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            shopcart_id: ShopcartId::from_i64(row.try_get("shopcart_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: try_get_quantity(row, "quantity")?,
            price: row.try_get("price")?,
        })
    }
}

fn try_get_quantity(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let quantity_i32: i32 = row.try_get(col)?;

    u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_bind_quantity(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}
