use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_core::traits::CrudStore;
use docesabor_entity::catalog::{Cake, CakeInput, Category, CategoryInput, SearchTerm};

use super::Tables;
use crate::store::CakeStore;

/// In-memory category store.
#[derive(Debug, Clone)]
pub struct MemoryCategories {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryCategories {
    pub(super) fn new(tables: Arc<Mutex<Tables>>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl CrudStore for MemoryCategories {
    type Entity = Category;
    type Input = CategoryInput;
    type Id = i64;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.tables.lock().await.categories.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let tables = self.tables.lock().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, input: &CategoryInput) -> AppResult<Category> {
        let mut tables = self.tables.lock().await;
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            name: input.name.clone(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn replace(&self, id: i64, input: &CategoryInput) -> AppResult<Option<Category>> {
        let mut tables = self.tables.lock().await;
        Ok(tables.categories.get_mut(&id).map(|category| {
            category.name = input.name.clone();
            category.clone()
        }))
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        if tables.cakes.values().any(|c| c.category_id == id) {
            return Err(AppError::validation(
                "Category still has cakes and cannot be deleted",
            ));
        }
        Ok(tables.categories.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.tables.lock().await.categories.len() as u64)
    }
}

/// In-memory cake store.
#[derive(Debug, Clone)]
pub struct MemoryCakes {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryCakes {
    pub(super) fn new(tables: Arc<Mutex<Tables>>) -> Self {
        Self { tables }
    }

    async fn active_where(&self, keep: impl Fn(&Cake) -> bool + Send) -> Vec<Cake> {
        let tables = self.tables.lock().await;
        let mut cakes: Vec<Cake> = tables
            .cakes
            .values()
            .filter(|c| c.active)
            .map(|c| tables.joined_cake(c))
            .filter(|c| keep(c))
            .collect();
        cakes.sort_by(|a, b| a.name.cmp(&b.name));
        cakes
    }

    async fn update_with(
        &self,
        id: i64,
        apply: impl FnOnce(&mut Cake) + Send,
    ) -> AppResult<Option<Cake>> {
        let mut tables = self.tables.lock().await;
        let Some(cake) = tables.cakes.get_mut(&id) else {
            return Ok(None);
        };
        apply(cake);
        let updated = cake.clone();
        Ok(Some(tables.joined_cake(&updated)))
    }
}

#[async_trait]
impl CrudStore for MemoryCakes {
    type Entity = Cake;
    type Input = CakeInput;
    type Id = i64;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cake>> {
        let tables = self.tables.lock().await;
        Ok(tables.cakes.get(&id).map(|c| tables.joined_cake(c)))
    }

    async fn find_all(&self) -> AppResult<Vec<Cake>> {
        Ok(self.active_where(|_| true).await)
    }

    async fn create(&self, input: &CakeInput) -> AppResult<Cake> {
        let mut tables = self.tables.lock().await;
        if !tables.categories.contains_key(&input.category_id) {
            return Err(AppError::validation("Unknown category"));
        }
        tables.last_cake_id += 1;
        let cake = Cake {
            id: tables.last_cake_id,
            name: input.name.clone(),
            price: input.price,
            photo: input.photo.clone(),
            ingredients: input.ingredients.clone(),
            featured: input.featured,
            active: true,
            category_id: input.category_id,
            category_name: None,
            created_at: Utc::now(),
        };
        tables.cakes.insert(cake.id, cake.clone());
        Ok(tables.joined_cake(&cake))
    }

    async fn replace(&self, id: i64, input: &CakeInput) -> AppResult<Option<Cake>> {
        {
            let tables = self.tables.lock().await;
            if tables.cakes.contains_key(&id) && !tables.categories.contains_key(&input.category_id)
            {
                return Err(AppError::validation("Unknown category"));
            }
        }
        let input = input.clone();
        self.update_with(id, move |cake| {
            cake.name = input.name;
            cake.price = input.price;
            cake.photo = input.photo;
            cake.ingredients = input.ingredients;
            cake.featured = input.featured;
            cake.category_id = input.category_id;
        })
        .await
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        if tables.orders.values().any(|o| o.cake_id == id) {
            return Err(AppError::validation("Cake has orders and cannot be deleted"));
        }
        Ok(tables.cakes.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        let tables = self.tables.lock().await;
        Ok(tables.cakes.values().filter(|c| c.active).count() as u64)
    }
}

#[async_trait]
impl CakeStore for MemoryCakes {
    async fn find_featured(&self) -> AppResult<Vec<Cake>> {
        Ok(self.active_where(|c| c.featured).await)
    }

    async fn find_recent(&self, limit: u32) -> AppResult<Vec<Cake>> {
        let mut cakes = self.active_where(|_| true).await;
        cakes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        cakes.truncate(limit as usize);
        Ok(cakes)
    }

    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Cake>> {
        let mut cakes = self.active_where(|c| c.matches_search(term)).await;
        if matches!(term, SearchTerm::MaxPrice(_)) {
            cakes.sort_by(|a, b| a.price.cmp(&b.price));
        }
        Ok(cakes)
    }

    async fn deactivate(&self, id: i64) -> AppResult<Option<Cake>> {
        self.update_with(id, |cake| cake.active = false).await
    }

    async fn toggle_featured(&self, id: i64) -> AppResult<Option<Cake>> {
        self.update_with(id, |cake| cake.featured = !cake.featured).await
    }
}
