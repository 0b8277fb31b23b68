use std::sync::Arc;

use tracing::info;

use crate::item::{ItemBody, ItemDto};
use crate::mapper::{item_body_to_item, item_to_dto};
use crate::repository::ItemRepository;
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn find_all_items(&self) -> CoreResult<Vec<ItemDto>> {
        let items = self
            .items
            .find_all_items()
            .await
            .map_err(|e| CoreError::InternalError(e.to_string()))?;
        Ok(items.iter().map(item_to_dto).collect())
    }

    pub async fn find_item_by_id(&self, id: i32) -> CoreResult<ItemDto> {
        self.items
            .find_item_by_id(id)
            .await
            .map_err(|e| CoreError::InternalError(e.to_string()))?
            .map(|item| item_to_dto(&item))
            .ok_or_else(|| CoreError::NotFound(format!("item {} not found", id)))
    }

    pub async fn register_item(&self, body: &ItemBody) -> CoreResult<i32> {
        let item = item_body_to_item(None, body);
        let id = self
            .items
            .save_item(&item)
            .await
            .map_err(|e| CoreError::InternalError(e.to_string()))?;
        info!("Registered item {} ({})", id, item.name);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemSpec};
    use crate::repository::RepoResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct VecItems {
        items: Mutex<Vec<Item>>,
    }

    #[async_trait]
    impl ItemRepository for VecItems {
        async fn find_all_items(&self) -> RepoResult<Vec<Item>> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn find_item_by_id(&self, id: i32) -> RepoResult<Option<Item>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == Some(id))
                .cloned())
        }

        async fn save_item(&self, item: &Item) -> RepoResult<i32> {
            let mut items = self.items.lock().unwrap();
            let id = items.len() as i32 + 1;
            items.push(Item {
                id: Some(id),
                ..item.clone()
            });
            Ok(id)
        }
    }

    #[tokio::test]
    async fn test_register_then_fetch() {
        let service = ItemService::new(Arc::new(VecItems::default()));
        let body = ItemBody {
            name: "Galaxy S24".to_string(),
            item_type: Some("phone".to_string()),
            price: Some(1_200_000),
            spec: Some(ItemSpec {
                cpu: Some("Snapdragon".to_string()),
                capacity: Some("512GB".to_string()),
            }),
        };

        let id = service.register_item(&body).await.unwrap();
        let item = service.find_item_by_id(id).await.unwrap();

        assert_eq!(item.id, Some(id.to_string()));
        assert_eq!(item.spec.capacity.as_deref(), Some("512GB"));
        assert_eq!(service.find_all_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let service = ItemService::new(Arc::new(VecItems::default()));
        let err = service.find_item_by_id(9).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
