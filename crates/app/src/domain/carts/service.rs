//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::Mutex;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{CartItem, NewCartItem, ProductId},
        repositories::{MemoryCartStore, PgCartItemsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_items(&self) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items_repository.list_cart_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, product: ProductId) -> Result<Option<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.items_repository.get_cart_item(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartsServiceError> {
        check_new_item(&item)?;

        let mut tx = self.db.begin().await?;

        let item = self.items_repository.upsert_cart_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn update_quantity(
        &self,
        product: ProductId,
        quantity: i64,
    ) -> Result<Option<CartItem>, CartsServiceError> {
        let quantity = checked_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        let item = match quantity {
            Some(quantity) => {
                self.items_repository
                    .update_cart_item_quantity(&mut tx, &product, quantity)
                    .await?
            }
            None => {
                self.items_repository
                    .delete_cart_item(&mut tx, &product)
                    .await?;

                None
            }
        };

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(&self, product: ProductId) -> Result<bool, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, &product)
            .await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }

    async fn clear(&self) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items_repository.clear_cart_items(&mut tx).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

/// Process-local cart kept behind a single async mutex.
///
/// Every operation holds the lock for its whole read-modify-write, so concurrent adds of the
/// same product always merge.
#[derive(Debug, Default)]
pub struct MemoryCartsService {
    store: Mutex<MemoryCartStore>,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(MemoryCartStore::new()),
        }
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn list_items(&self) -> Result<Vec<CartItem>, CartsServiceError> {
        Ok(self.store.lock().await.all_items())
    }

    async fn get_item(&self, product: ProductId) -> Result<Option<CartItem>, CartsServiceError> {
        Ok(self.store.lock().await.item(&product))
    }

    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartsServiceError> {
        check_new_item(&item)?;

        let product = item.product_id.clone();

        let Some(item) = self.store.lock().await.add_item(item, Timestamp::now()) else {
            tracing::debug!(product_id = %product, "merged quantity out of range");

            return Err(CartsServiceError::InvalidData);
        };

        Ok(item)
    }

    async fn update_quantity(
        &self,
        product: ProductId,
        quantity: i64,
    ) -> Result<Option<CartItem>, CartsServiceError> {
        let quantity = checked_quantity(quantity)?;

        let mut store = self.store.lock().await;

        let item = match quantity {
            Some(quantity) => store.set_quantity(&product, quantity),
            None => {
                store.remove_item(&product);

                None
            }
        };

        Ok(item)
    }

    async fn remove_item(&self, product: ProductId) -> Result<bool, CartsServiceError> {
        Ok(self.store.lock().await.remove_item(&product))
    }

    async fn clear(&self) -> Result<u64, CartsServiceError> {
        let mut store = self.store.lock().await;

        let removed = store.len() as u64;

        store.clear();

        Ok(removed)
    }
}

/// Both backends refuse the same inputs: a non-positive or non-finite price, a zero quantity,
/// or a quantity the `INTEGER` column cannot hold.
fn check_new_item(item: &NewCartItem) -> Result<(), CartsServiceError> {
    if item.product_id.as_str().is_empty() || item.product_name.is_empty() {
        return Err(CartsServiceError::MissingRequiredData);
    }

    if !item.is_valid() {
        return Err(CartsServiceError::InvalidData);
    }

    i32::try_from(item.quantity)?;

    Ok(())
}

/// `None` means the line should be removed.
fn checked_quantity(quantity: i64) -> Result<Option<u32>, CartsServiceError> {
    if quantity <= 0 {
        return Ok(None);
    }

    Ok(Some(u32::try_from(i32::try_from(quantity)?)?))
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// All cart lines, oldest first.
    async fn list_items(&self) -> Result<Vec<CartItem>, CartsServiceError>;

    /// A single cart line, if the product is in the cart.
    async fn get_item(&self, product: ProductId) -> Result<Option<CartItem>, CartsServiceError>;

    /// Add a product to the cart, merging quantities when it is already there.
    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartsServiceError>;

    /// Set the quantity of a cart line. A quantity of zero or less removes the line.
    ///
    /// Returns `None` when nothing was left to update.
    async fn update_quantity(
        &self,
        product: ProductId,
        quantity: i64,
    ) -> Result<Option<CartItem>, CartsServiceError>;

    /// Remove a cart line; returns whether anything was removed.
    async fn remove_item(&self, product: ProductId) -> Result<bool, CartsServiceError>;

    /// Empty the cart, returning the number of lines removed.
    async fn clear(&self) -> Result<u64, CartsServiceError>;
}
