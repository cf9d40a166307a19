use chrono::NaiveDateTime;
use common::timestamp;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::entity::file;
use crate::error::AppError;

use super::shared::validate_max_chars;

pub const PATH_MAX_CHARS: usize = 1000;
pub const LEVEL_MAX_CHARS: usize = 10;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateFileRequest {
    #[schema(example = "/neodc/esacci/sst/data/CDR_v2/20200101-ESACCI-L4_GHRSST.nc")]
    pub path: String,
    /// Owning product. Not checked for existence.
    pub product_id: i32,
    /// `YYYY-MM-DD HH:MM:SS`. Defaults to `1900-01-01 00:00:00`.
    #[serde(rename = "dateTime")]
    #[schema(example = "2020-01-01 00:00:00")]
    pub date_time: Option<String>,
    /// Processing level code. Defaults to an empty string.
    #[schema(example = "L4")]
    pub level: Option<String>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateFileRequest {
    pub path: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
    pub level: Option<String>,
    pub product_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FileResponse {
    pub id: i32,
    pub path: String,
    #[serde(rename = "dateTime", serialize_with = "timestamp::serialize")]
    #[schema(value_type = String, example = "2020-01-01 00:00:00")]
    pub date_time: NaiveDateTime,
    pub level: String,
    pub product_id: i32,
}

/// `{"file": {...}}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct FileEnvelope {
    pub file: FileResponse,
}

/// `{"files": [...]}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct FileListEnvelope {
    pub files: Vec<FileResponse>,
}

/// Optional body of `GET /files/`.
#[derive(Debug, Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct FileFilterRequest {
    /// Inclusive lower bound, `YYYY-MM-DD HH:MM:SS`.
    #[schema(example = "2020-06-01 00:00:00")]
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD HH:MM:SS`.
    pub end_date: Option<String>,
    pub product_ids: Option<Vec<i32>>,
    /// Expanded to every product of each listed experiment.
    pub experiment_ids: Option<Vec<i32>>,
}

impl From<file::Model> for FileResponse {
    fn from(m: file::Model) -> Self {
        Self {
            id: m.id,
            path: m.path,
            date_time: m.date_time,
            level: m.level,
            product_id: m.product_id,
        }
    }
}

fn validate_path(path: &str) -> Result<(), AppError> {
    validate_max_chars("path", path, PATH_MAX_CHARS)
}

fn validate_level(level: &str) -> Result<(), AppError> {
    validate_max_chars("level", level, LEVEL_MAX_CHARS)
}

pub struct Files;

impl Resource for Files {
    type Entity = file::Entity;
    type Model = file::Model;
    type ActiveModel = file::ActiveModel;
    type Create = CreateFileRequest;
    type Update = UpdateFileRequest;
    type Response = FileResponse;

    const SINGULAR: &'static str = "file";
    const PLURAL: &'static str = "files";
    const LABEL: &'static str = "File";

    fn id_column() -> file::Column {
        file::Column::Id
    }

    fn new_row(req: CreateFileRequest) -> Result<file::ActiveModel, AppError> {
        let date_time = match req.date_time {
            Some(ref raw) => timestamp::parse(raw)?,
            None => timestamp::FILE_DEFAULT,
        };
        let level = req.level.unwrap_or_default();
        validate_path(&req.path)?;
        validate_level(&level)?;

        Ok(file::ActiveModel {
            path: Set(req.path),
            date_time: Set(date_time),
            level: Set(level),
            product_id: Set(req.product_id),
            ..Default::default()
        })
    }

    fn apply_update(row: &mut file::ActiveModel, req: UpdateFileRequest) -> Result<(), AppError> {
        let date_time = req.date_time.as_deref().map(timestamp::parse).transpose()?;
        if let Some(ref path) = req.path {
            validate_path(path)?;
        }
        if let Some(ref level) = req.level {
            validate_level(level)?;
        }

        if let Some(path) = req.path {
            row.path = Set(path);
        }
        if let Some(date_time) = date_time {
            row.date_time = Set(date_time);
        }
        if let Some(level) = req.level {
            row.level = Set(level);
        }
        if let Some(product_id) = req.product_id {
            row.product_id = Set(product_id);
        }
        Ok(())
    }
}
