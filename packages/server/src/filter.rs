//! File listing with product/experiment selection and a date range.

use chrono::NaiveDateTime;
use common::timestamp;
use sea_orm::sea_query::Query as SeaQuery;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Select,
};
use tracing::instrument;

use crate::entity::{experiment, file, product};
use crate::error::AppError;
use crate::models::file::FileFilterRequest;

/// Upper bound on distinct ids per selector list. Both lists together stay
/// under the smallest bind-parameter limit of the supported backends.
pub const MAX_SELECTOR_IDS: usize = 10_000;

/// A parsed filter request.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFilter {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub product_ids: Option<Vec<i32>>,
    pub experiment_ids: Option<Vec<i32>>,
}

/// Sort and dedup a selector list, rejecting it when it is too long.
fn selector_ids(field: &str, ids: Option<Vec<i32>>) -> Result<Option<Vec<i32>>, AppError> {
    let Some(mut ids) = ids else {
        return Ok(None);
    };
    ids.sort_unstable();
    ids.dedup();
    if ids.len() > MAX_SELECTOR_IDS {
        return Err(AppError::Validation(format!(
            "Too many ids in '{field}' ({}). Maximum is {MAX_SELECTOR_IDS}.",
            ids.len()
        )));
    }
    Ok(Some(ids))
}

impl TryFrom<FileFilterRequest> for FileFilter {
    type Error = AppError;

    fn try_from(req: FileFilterRequest) -> Result<Self, AppError> {
        let start = match req.start_date {
            Some(ref raw) => timestamp::parse(raw)?,
            None => timestamp::MIN,
        };
        let end = match req.end_date {
            Some(ref raw) => timestamp::parse(raw)?,
            None => timestamp::MAX,
        };

        Ok(Self {
            start,
            end,
            product_ids: selector_ids("product_ids", req.product_ids)?,
            experiment_ids: selector_ids("experiment_ids", req.experiment_ids)?,
        })
    }
}

impl FileFilter {
    /// Condition on `product` matching the listed products plus every product
    /// of the listed (existing) experiments.
    ///
    /// `None` when neither list has an id: the filter then matches no file
    /// whatever the date range.
    fn product_selection(&self) -> Option<Condition> {
        let mut selection = Condition::any();
        let mut selects_any = false;

        if let Some(ids) = self.product_ids.as_ref().filter(|ids| !ids.is_empty()) {
            selection = selection.add(product::Column::Id.is_in(ids.iter().copied()));
            selects_any = true;
        }

        if let Some(ids) = self.experiment_ids.as_ref().filter(|ids| !ids.is_empty()) {
            selection = selection.add(
                product::Column::ExperimentId.in_subquery(
                    SeaQuery::select()
                        .column(experiment::Column::Id)
                        .from(experiment::Entity)
                        .and_where(experiment::Column::Id.is_in(ids.iter().copied()))
                        .to_owned(),
                ),
            );
            selects_any = true;
        }

        selects_any.then_some(selection)
    }

    /// The single query resolving this filter, or `None` if it selects nothing.
    pub fn select(&self) -> Option<Select<file::Entity>> {
        let products = self.product_selection()?;

        Some(
            file::Entity::find()
                .filter(
                    file::Column::ProductId.in_subquery(
                        SeaQuery::select()
                            .column(product::Column::Id)
                            .from(product::Entity)
                            .cond_where(products)
                            .to_owned(),
                    ),
                )
                .filter(file::Column::DateTime.gte(self.start))
                .filter(file::Column::DateTime.lte(self.end))
                .order_by_asc(file::Column::Id),
        )
    }

    /// Files of the selected products whose timestamp lies in `[start, end]`.
    #[instrument(skip(self, db), fields(start = %self.start, end = %self.end))]
    pub async fn apply<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<file::Model>, AppError> {
        let Some(select) = self.select() else {
            tracing::debug!("Filter selects no product");
            return Ok(Vec::new());
        };

        let files = select.all(db).await?;
        tracing::debug!(count = files.len(), "Resolved file filter");
        Ok(files)
    }
}

/// Resolve `GET /files/`: every file without a payload, the filtered set otherwise.
pub async fn list_files<C: ConnectionTrait>(
    db: &C,
    req: Option<FileFilterRequest>,
) -> Result<Vec<file::Model>, AppError> {
    match req {
        None => Ok(file::Entity::find()
            .order_by_asc(file::Column::Id)
            .all(db)
            .await?),
        Some(req) => FileFilter::try_from(req)?.apply(db).await,
    }
}
