use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Location of the artifact on the remote archive server.
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub path: String,
    #[sea_orm(column_name = "dateTime")]
    pub date_time: DateTime,
    /// Processing level code, e.g. "L2" or "L3S".
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub level: String,

    pub product_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
