use std::str::FromStr;

use sea_query::{
    ColumnDef, Expr, ExprTrait, Iden, Index, OnConflict, Order, Query, SqliteQueryBuilder, Table,
};
use sea_query_sqlx::SqlxBinder;
use serde_json::Value;
use sqlx::{
    SqlitePool,
    prelude::FromRow,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::Store;
use crate::Result;

#[derive(Iden, Clone)]
enum Document {
    Table,
    Id,
    Collection,
    Key,
    Value,
}

#[derive(FromRow)]
struct DocumentRow {
    key: String,
    value: String,
}

/// SQLite-backed store. All collections share one `document` table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating the file if needed) and migrate.
    #[tracing::instrument]
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<()> {
        let create_table = Table::create()
            .table(Document::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Document::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Document::Collection).string().not_null())
            .col(ColumnDef::new(Document::Key).string().not_null())
            .col(ColumnDef::new(Document::Value).text().not_null())
            .to_owned()
            .to_string(SqliteQueryBuilder);

        let create_index = Index::create()
            .if_not_exists()
            .name("idx_document_collection_key")
            .table(Document::Table)
            .col(Document::Collection)
            .col(Document::Key)
            .unique()
            .to_owned()
            .to_string(SqliteQueryBuilder);

        sqlx::query(&create_table).execute(&self.pool).await?;
        sqlx::query(&create_index).execute(&self.pool).await?;

        tracing::debug!("document table ready");

        Ok(())
    }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let statement = Query::select()
            .columns([Document::Key, Document::Value])
            .from(Document::Table)
            .and_where(Expr::col(Document::Collection).eq(collection))
            .and_where(Expr::col(Document::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(serde_json::from_str(&row.value)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<()> {
        let statement = Query::insert()
            .into_table(Document::Table)
            .columns([Document::Collection, Document::Key, Document::Value])
            .values_panic([
                collection.to_owned().into(),
                key.to_owned().into(),
                value.to_string().into(),
            ])
            .on_conflict(
                OnConflict::columns([Document::Collection, Document::Key])
                    .update_column(Document::Value)
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        let statement = Query::delete()
            .from_table(Document::Table)
            .and_where(Expr::col(Document::Collection).eq(collection))
            .and_where(Expr::col(Document::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        let statement = Query::select()
            .columns([Document::Key, Document::Value])
            .from(Document::Table)
            .and_where(Expr::col(Document::Collection).eq(collection))
            .order_by(Document::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| Ok((row.key, serde_json::from_str(&row.value)?)))
            .collect()
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        let statement = Query::delete()
            .from_table(Document::Table)
            .and_where(Expr::col(Document::Collection).eq(collection))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }
}
