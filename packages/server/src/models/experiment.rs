use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::entity::experiment;
use crate::error::AppError;

use super::shared::{validate_desc, validate_name};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateExperimentRequest {
    #[schema(example = "Sea Surface Temperature")]
    pub name: String,
    /// Defaults to an empty string.
    pub desc: Option<String>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateExperimentRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ExperimentResponse {
    pub id: i32,
    pub name: String,
    pub desc: String,
}

/// `{"experiment": {...}}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ExperimentEnvelope {
    pub experiment: ExperimentResponse,
}

/// `{"experiments": [...]}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ExperimentListEnvelope {
    pub experiments: Vec<ExperimentResponse>,
}

impl From<experiment::Model> for ExperimentResponse {
    fn from(m: experiment::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            desc: m.desc,
        }
    }
}

pub struct Experiments;

impl Resource for Experiments {
    type Entity = experiment::Entity;
    type Model = experiment::Model;
    type ActiveModel = experiment::ActiveModel;
    type Create = CreateExperimentRequest;
    type Update = UpdateExperimentRequest;
    type Response = ExperimentResponse;

    const SINGULAR: &'static str = "experiment";
    const PLURAL: &'static str = "experiments";
    const LABEL: &'static str = "Experiment";

    fn id_column() -> experiment::Column {
        experiment::Column::Id
    }

    fn new_row(req: CreateExperimentRequest) -> Result<experiment::ActiveModel, AppError> {
        let desc = req.desc.unwrap_or_default();
        validate_name(&req.name)?;
        validate_desc(&desc)?;

        Ok(experiment::ActiveModel {
            name: Set(req.name),
            desc: Set(desc),
            ..Default::default()
        })
    }

    fn apply_update(
        row: &mut experiment::ActiveModel,
        req: UpdateExperimentRequest,
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
        Ok(())
    }
}
