use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One memo per calendar day, keyed by `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "memos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Memo text, treating NULL and empty as absent.
    pub fn text(&self) -> Option<&str> {
        self.memo.as_deref().filter(|m| !m.is_empty())
    }
}
