use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A research campaign. Its products are found through `product.experiment_id`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub desc: String,
}

impl ActiveModelBehavior for ActiveModel {}
