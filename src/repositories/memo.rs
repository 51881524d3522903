//! Memo repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::entities::memo;

/// Repository for memo-related database operations.
pub struct MemoRepository;

impl MemoRepository {
    /// Get the memo row for a `YYYY-MM-DD` key.
    pub async fn get_by_date<C>(conn: &C, date: &str) -> Result<Option<memo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(memo::Entity::find().filter(memo::Column::Date.eq(date)).one(conn).await?)
    }

    /// Get all rows with keys in `start..=end`, ordered by date.
    ///
    /// Keys are zero-padded so lexical order matches calendar order.
    pub async fn get_in_range<C>(conn: &C, start: &str, end: &str) -> Result<Vec<memo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(memo::Entity::find()
            .filter(memo::Column::Date.between(start, end))
            .order_by_asc(memo::Column::Date)
            .all(conn)
            .await?)
    }

    /// Insert or overwrite the memo for a date in a single statement.
    pub async fn upsert<C>(conn: &C, date: &str, text: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = memo::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(date.to_string()),
            memo: ActiveValue::Set(Some(text.to_string())),
        };

        memo::Entity::insert(model)
            .on_conflict(
                OnConflict::column(memo::Column::Date)
                    .update_column(memo::Column::Memo)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    /// Total number of stored rows.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(memo::Entity::find().count(conn).await?)
    }
}
