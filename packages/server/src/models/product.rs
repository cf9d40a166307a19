use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::entity::product;
use crate::error::AppError;

use super::shared::{validate_desc, validate_name};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "SST L4 OSTIA")]
    pub name: String,
    pub desc: Option<String>,
    /// Owning experiment. Not checked for existence.
    pub experiment_id: i32,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub experiment_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub desc: String,
    pub experiment_id: i32,
}

/// `{"product": {...}}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductEnvelope {
    pub product: ProductResponse,
}

/// `{"products": [...]}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductListEnvelope {
    pub products: Vec<ProductResponse>,
}

impl From<product::Model> for ProductResponse {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            desc: m.desc,
            experiment_id: m.experiment_id,
        }
    }
}

pub struct Products;

impl Resource for Products {
    type Entity = product::Entity;
    type Model = product::Model;
    type ActiveModel = product::ActiveModel;
    type Create = CreateProductRequest;
    type Update = UpdateProductRequest;
    type Response = ProductResponse;

    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id_column() -> product::Column {
        product::Column::Id
    }

    fn new_row(req: CreateProductRequest) -> Result<product::ActiveModel, AppError> {
        let desc = req.desc.unwrap_or_default();
        validate_name(&req.name)?;
        validate_desc(&desc)?;

        Ok(product::ActiveModel {
            name: Set(req.name),
            desc: Set(desc),
            experiment_id: Set(req.experiment_id),
            ..Default::default()
        })
    }

    fn apply_update(
        row: &mut product::ActiveModel,
        req: UpdateProductRequest,
    ) -> Result<(), AppError> {
        if let Some(ref name) = req.name {
            validate_name(name)?;
        }
        if let Some(ref desc) = req.desc {
            validate_desc(desc)?;
        }

        if let Some(name) = req.name {
            row.name = Set(name);
        }
        if let Some(desc) = req.desc {
            row.desc = Set(desc);
        }
        if let Some(experiment_id) = req.experiment_id {
            row.experiment_id = Set(experiment_id);
        }
        Ok(())
    }
}
