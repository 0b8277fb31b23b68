use airres_core::repository::{ItemRepository, RepoResult};
use airres_core::Item;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i32,
    name: String,
    #[sqlx(rename = "type")]
    item_type: Option<String>,
    price: Option<i32>,
    stock: i32,
    cpu: Option<String>,
    capacity: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: Some(row.id),
            name: row.name,
            item_type: row.item_type,
            price: row.price,
            stock: row.stock,
            cpu: row.cpu,
            capacity: row.capacity,
        }
    }
}

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_all_items(&self) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, type, price, stock, cpu, capacity FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_item_by_id(&self, id: i32) -> RepoResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, type, price, stock, cpu, capacity FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    async fn save_item(&self, item: &Item) -> RepoResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO items (name, type, price, stock, cpu, capacity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&item.name)
        .bind(&item.item_type)
        .bind(item.price)
        .bind(item.stock)
        .bind(&item.cpu)
        .bind(&item.capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
