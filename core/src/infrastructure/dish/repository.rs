use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::dish::{
    entities::{BeginGeneration, Dish, DishUpdate},
    ports::DishRepository,
};

/// Dish store backed by an ordered vector behind a single lock. Every mutation is one short
/// critical section, never held across a call to the generation service.
#[derive(Debug, Default)]
pub struct InMemoryDishRepository {
    dishes: RwLock<Vec<Dish>>,
}

impl InMemoryDishRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DishRepository for InMemoryDishRepository {
    async fn list(&self) -> Vec<Dish> {
        self.dishes.read().await.clone()
    }

    async fn get_by_id(&self, dish_id: Uuid) -> Option<Dish> {
        self.dishes
            .read()
            .await
            .iter()
            .find(|dish| dish.id == dish_id)
            .cloned()
    }

    async fn replace_all(&self, dishes: Vec<Dish>) {
        *self.dishes.write().await = dishes;
    }

    async fn update_by_id(&self, dish_id: Uuid, update: DishUpdate) -> Option<Dish> {
        let mut dishes = self.dishes.write().await;

        let Some(dish) = dishes.iter_mut().find(|dish| dish.id == dish_id) else {
            debug!(%dish_id, "Update for unknown dish ignored");
            return None;
        };

        dish.apply(update);
        Some(dish.clone())
    }

    async fn begin_generation(&self, dish_id: Uuid) -> BeginGeneration {
        let mut dishes = self.dishes.write().await;

        match dishes.iter_mut().find(|dish| dish.id == dish_id) {
            None => BeginGeneration::NotFound,
            Some(dish) if dish.is_generating => BeginGeneration::AlreadyGenerating,
            Some(dish) => {
                dish.is_generating = true;
                BeginGeneration::Started(dish.clone())
            }
        }
    }

    async fn clear(&self) {
        self.dishes.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str) -> Dish {
        Dish::new(name.to_string(), format!("{name} description"))
    }

    #[tokio::test]
    async fn replace_all_discards_previous_batch() {
        let repository = InMemoryDishRepository::new();
        repository.replace_all(vec![dish("a"), dish("b")]).await;

        let fresh = vec![dish("c")];
        repository.replace_all(fresh.clone()).await;

        assert_eq!(repository.list().await, fresh);
    }

    #[tokio::test]
    async fn update_unknown_id_is_a_no_op() {
        let repository = InMemoryDishRepository::new();
        let existing = dish("a");
        repository.replace_all(vec![existing.clone()]).await;

        let updated = repository
            .update_by_id(Uuid::new_v4(), DishUpdate::image_replaced("x".into()))
            .await;

        assert!(updated.is_none());
        assert_eq!(repository.list().await, vec![existing]);
    }

    #[tokio::test]
    async fn begin_generation_is_exclusive() {
        let repository = InMemoryDishRepository::new();
        let target = dish("a");
        repository.replace_all(vec![target.clone()]).await;

        assert!(matches!(
            repository.begin_generation(target.id).await,
            BeginGeneration::Started(ref d) if d.is_generating
        ));
        assert_eq!(
            repository.begin_generation(target.id).await,
            BeginGeneration::AlreadyGenerating
        );
        assert_eq!(
            repository.begin_generation(Uuid::new_v4()).await,
            BeginGeneration::NotFound
        );
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let repository = InMemoryDishRepository::new();
        repository.replace_all(vec![dish("a")]).await;

        repository.clear().await;

        assert!(repository.list().await.is_empty());
    }
}
