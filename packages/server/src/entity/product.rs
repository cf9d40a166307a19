use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A data product of one experiment. Its files are found through `file.product_id`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub desc: String,

    // Not a foreign key constraint: the owning experiment may be deleted
    // while its products remain.
    pub experiment_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
