//! Shopcarts service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    database::Db,
    domain::shopcarts::{
        data::{CartItemUpdate, NewCartItem, NewShopcart},
        errors::ShopcartsServiceError,
        models::{CartItem, CustomerId, ProductId, Shopcart, ShopcartId},
        repositories::{PgCartItemsRepository, PgShopcartsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgShopcartsService {
    db: Db,
    shopcarts_repository: PgShopcartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgShopcartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            shopcarts_repository: PgShopcartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ShopcartsService for PgShopcartsService {
    async fn list_shopcarts(&self) -> Result<Vec<Shopcart>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let shopcarts = self.shopcarts_repository.list_shopcarts(&mut tx).await?;
        let items = self.items_repository.list_cart_items(&mut tx).await?;

        tx.commit().await?;

        Ok(attach_items(shopcarts, items))
    }

    async fn get_shopcart(&self, shopcart: ShopcartId) -> Result<Shopcart, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self
            .shopcarts_repository
            .get_shopcart(&mut tx, shopcart)
            .await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, shopcart)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn find_shopcart_by_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(mut cart) = self
            .shopcarts_repository
            .find_by_customer(&mut tx, customer)
            .await?
        else {
            tx.commit().await?;

            return Ok(None);
        };

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.id)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(Some(cart))
    }

    async fn find_shopcarts_with_product(
        &self,
        product: ProductId,
    ) -> Result<Vec<Shopcart>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut shopcarts = self
            .shopcarts_repository
            .list_with_product(&mut tx, product)
            .await?;

        for cart in &mut shopcarts {
            let items = self
                .items_repository
                .get_cart_items(&mut tx, cart.id)
                .await?;

            cart.items.extend(items);
        }

        tx.commit().await?;

        Ok(shopcarts)
    }

    async fn create_shopcart(
        &self,
        shopcart: NewShopcart,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        debug!(customer_id = %shopcart.customer_id, "creating shopcart");

        let mut tx = self.db.begin_transaction().await?;

        let mut created = self
            .shopcarts_repository
            .create_shopcart(&mut tx, shopcart.customer_id)
            .await?;

        for item in &shopcart.items {
            self.items_repository
                .upsert_cart_item(&mut tx, created.id, item)
                .await?;
        }

        let items = self
            .items_repository
            .get_cart_items(&mut tx, created.id)
            .await?;

        tx.commit().await?;

        created.items.extend(items);

        Ok(created)
    }

    async fn replace_shopcart(
        &self,
        shopcart: ShopcartId,
        replacement: NewShopcart,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        debug!(%shopcart, "replacing shopcart");

        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self
            .shopcarts_repository
            .set_customer(&mut tx, shopcart, replacement.customer_id)
            .await?;

        self.items_repository
            .delete_cart_items(&mut tx, shopcart)
            .await?;

        for item in &replacement.items {
            self.items_repository
                .upsert_cart_item(&mut tx, shopcart, item)
                .await?;
        }

        let items = self
            .items_repository
            .get_cart_items(&mut tx, shopcart)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn delete_shopcart(&self, shopcart: ShopcartId) -> Result<(), ShopcartsServiceError> {
        debug!(%shopcart, "deleting shopcart");

        let mut tx = self.db.begin_transaction().await?;

        // Idempotent; items go with the cart via the FK cascade.
        self.shopcarts_repository
            .delete_shopcart(&mut tx, shopcart)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn clear_shopcart(
        &self,
        shopcart: ShopcartId,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        debug!(%shopcart, "clearing shopcart items");

        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .shopcarts_repository
            .get_shopcart(&mut tx, shopcart)
            .await?;

        self.items_repository
            .delete_cart_items(&mut tx, shopcart)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        shopcart: ShopcartId,
        item: NewCartItem,
    ) -> Result<CartItem, ShopcartsServiceError> {
        debug!(%shopcart, product_id = %item.product_id, "adding cart item");

        let mut tx = self.db.begin_transaction().await?;

        self.shopcarts_repository
            .get_shopcart(&mut tx, shopcart)
            .await?;

        let item = self
            .items_repository
            .upsert_cart_item(&mut tx, shopcart, &item)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn list_items(
        &self,
        shopcart: ShopcartId,
    ) -> Result<Vec<CartItem>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.shopcarts_repository
            .get_shopcart(&mut tx, shopcart)
            .await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, shopcart)
            .await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<CartItem, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let item = self
            .items_repository
            .find_cart_item(&mut tx, shopcart, product)
            .await?
            .ok_or(ShopcartsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(item)
    }

    async fn update_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
        update: CartItemUpdate,
    ) -> Result<CartItem, ShopcartsServiceError> {
        debug!(%shopcart, %product, "updating cart item");

        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .items_repository
            .find_cart_item(&mut tx, shopcart, product)
            .await?
            .ok_or(ShopcartsServiceError::NotFound)?;

        let quantity = update.quantity.unwrap_or(existing.quantity);
        let price = update.price.unwrap_or(existing.price);

        let updated = self
            .items_repository
            .update_cart_item(&mut tx, shopcart, product, quantity, price)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<(), ShopcartsServiceError> {
        debug!(%shopcart, %product, "removing cart item");

        let mut tx = self.db.begin_transaction().await?;

        // Idempotent; a missing item is not an error.
        self.items_repository
            .delete_cart_item(&mut tx, shopcart, product)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn remove_items(
        &self,
        shopcart: ShopcartId,
        products: Vec<ProductId>,
    ) -> Result<(), ShopcartsServiceError> {
        debug!(%shopcart, count = products.len(), "removing cart items");

        let mut tx = self.db.begin_transaction().await?;

        // Lenient bulk delete: ids without a matching row are skipped.
        self.items_repository
            .delete_cart_items_by_product(&mut tx, shopcart, &products)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Distribute item rows onto their owning carts.
fn attach_items(mut shopcarts: Vec<Shopcart>, items: Vec<CartItem>) -> Vec<Shopcart> {
    let mut by_cart: FxHashMap<ShopcartId, Vec<CartItem>> = FxHashMap::default();

    for item in items {
        by_cart.entry(item.shopcart_id).or_default().push(item);
    }

    for cart in &mut shopcarts {
        if let Some(items) = by_cart.remove(&cart.id) {
            cart.items = items;
        }
    }

    shopcarts
}

#[automock]
#[async_trait]
pub trait ShopcartsService: Send + Sync {
    /// List every shopcart with its items.
    async fn list_shopcarts(&self) -> Result<Vec<Shopcart>, ShopcartsServiceError>;

    /// Retrieve a single shopcart with its items.
    async fn get_shopcart(&self, shopcart: ShopcartId) -> Result<Shopcart, ShopcartsServiceError>;

    /// Find the shopcart owned by the given customer, if any.
    async fn find_shopcart_by_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, ShopcartsServiceError>;

    /// List the shopcarts holding at least one item for the given product.
    async fn find_shopcarts_with_product(
        &self,
        product: ProductId,
    ) -> Result<Vec<Shopcart>, ShopcartsServiceError>;

    /// Create a shopcart (and any supplied items) for a customer.
    async fn create_shopcart(
        &self,
        shopcart: NewShopcart,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// Replace a shopcart's customer and item list wholesale.
    async fn replace_shopcart(
        &self,
        shopcart: ShopcartId,
        replacement: NewShopcart,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// Delete a shopcart and its items. Deleting an absent cart is not an
    /// error.
    async fn delete_shopcart(&self, shopcart: ShopcartId) -> Result<(), ShopcartsServiceError>;

    /// Delete every item in a shopcart, keeping the cart itself.
    async fn clear_shopcart(&self, shopcart: ShopcartId)
    -> Result<Shopcart, ShopcartsServiceError>;

    /// Add an item to a shopcart. Adding a product already in the cart
    /// increments the stored quantity instead of inserting a duplicate row.
    async fn add_item(
        &self,
        shopcart: ShopcartId,
        item: NewCartItem,
    ) -> Result<CartItem, ShopcartsServiceError>;

    /// List the items in a shopcart.
    async fn list_items(
        &self,
        shopcart: ShopcartId,
    ) -> Result<Vec<CartItem>, ShopcartsServiceError>;

    /// Retrieve a single item by its (shopcart, product) key.
    async fn get_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<CartItem, ShopcartsServiceError>;

    /// Update an item's quantity and/or price.
    async fn update_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
        update: CartItemUpdate,
    ) -> Result<CartItem, ShopcartsServiceError>;

    /// Remove a single item. Removing an absent item is not an error.
    async fn remove_item(
        &self,
        shopcart: ShopcartId,
        product: ProductId,
    ) -> Result<(), ShopcartsServiceError>;

    /// Remove the items matching the given product ids. Ids without a
    /// matching row are skipped.
    async fn remove_items(
        &self,
        shopcart: ShopcartId,
        products: Vec<ProductId>,
    ) -> Result<(), ShopcartsServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cart(id: i64, customer_id: i64) -> Shopcart {
        Shopcart {
            id: id.into(),
            customer_id: customer_id.into(),
            items: Vec::new(),
        }
    }

    fn make_item(shopcart_id: i64, product_id: i64, quantity: u32) -> CartItem {
        CartItem {
            shopcart_id: shopcart_id.into(),
            product_id: product_id.into(),
            quantity,
            price: 9.99,
        }
    }

    #[test]
    fn attach_items_groups_by_cart() {
        let shopcarts = vec![make_cart(1, 10), make_cart(2, 20), make_cart(3, 30)];
        let items = vec![make_item(1, 7, 1), make_item(2, 7, 2), make_item(2, 8, 1)];

        let shopcarts = attach_items(shopcarts, items);

        assert_eq!(shopcarts[0].items, vec![make_item(1, 7, 1)]);
        assert_eq!(
            shopcarts[1].items,
            vec![make_item(2, 7, 2), make_item(2, 8, 1)]
        );
        assert!(shopcarts[2].items.is_empty(), "cart 3 has no items");
    }

    #[test]
    fn attach_items_with_no_items_leaves_carts_empty() {
        let shopcarts = attach_items(vec![make_cart(1, 10)], Vec::new());

        assert!(shopcarts[0].items.is_empty());
    }
}
