//! Generic CRUD operations shared by every catalog entity.
//!
//! Each entity type is described once by a [`Resource`] implementation; the
//! functions here perform the datastore work and wrap results under the
//! resource's JSON key.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::error::AppError;
use crate::models::shared::{DeletedResponse, Envelope};

/// Schema descriptor for one entity type.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: IntoActiveModel<Self::ActiveModel> + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    /// Body accepted on create. Required fields are non-optional.
    type Create: DeserializeOwned + Send + 'static;
    /// Body accepted on update. Every field is optional.
    type Update: DeserializeOwned + Default + PartialEq + Send + 'static;
    type Response: Serialize + From<Self::Model> + Send + 'static;

    /// Key wrapping a single row, e.g. `experiment`.
    const SINGULAR: &'static str;
    /// Key wrapping a list of rows, e.g. `experiments`.
    const PLURAL: &'static str;
    /// Name used in error messages, e.g. `Experiment`.
    const LABEL: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Validate a create request and build the row to insert, filling defaults.
    fn new_row(req: Self::Create) -> Result<Self::ActiveModel, AppError>;

    /// Overwrite the fields present in `req`. Must validate everything before
    /// touching `row`.
    fn apply_update(row: &mut Self::ActiveModel, req: Self::Update) -> Result<(), AppError>;
}

/// Checked lookup by id.
pub async fn find<R, C>(db: &C, id: i32) -> Result<R::Model, AppError>
where
    R: Resource,
    C: ConnectionTrait,
{
    R::Entity::find()
        .filter(R::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::LABEL, id)))
}

#[instrument(skip(db), fields(resource = R::PLURAL))]
pub async fn list<R: Resource>(
    db: &DatabaseConnection,
) -> Result<Envelope<Vec<R::Response>>, AppError> {
    let rows = R::Entity::find()
        .order_by_asc(R::id_column())
        .all(db)
        .await?;

    tracing::debug!(count = rows.len(), "Listed rows");
    Ok(Envelope::new(
        R::PLURAL,
        rows.into_iter().map(R::Response::from).collect(),
    ))
}

#[instrument(skip(db), fields(resource = R::SINGULAR))]
pub async fn get<R: Resource>(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Envelope<R::Response>, AppError> {
    let model = find::<R, _>(db, id).await?;
    Ok(Envelope::new(R::SINGULAR, model.into()))
}

#[instrument(skip(db, req), fields(resource = R::SINGULAR))]
pub async fn create<R: Resource>(
    db: &DatabaseConnection,
    req: R::Create,
) -> Result<Envelope<R::Response>, AppError> {
    let row = R::new_row(req)?;
    let model = row.insert(db).await?;

    tracing::info!("Created {}", R::SINGULAR);
    Ok(Envelope::new(R::SINGULAR, model.into()))
}

#[instrument(skip(db, req), fields(resource = R::SINGULAR))]
pub async fn update<R: Resource>(
    db: &DatabaseConnection,
    id: i32,
    req: R::Update,
) -> Result<Envelope<R::Response>, AppError> {
    if req == R::Update::default() {
        let existing = find::<R, _>(db, id).await?;
        return Ok(Envelope::new(R::SINGULAR, existing.into()));
    }

    let txn = db.begin().await?;

    let existing = find::<R, _>(&txn, id).await?;
    let mut row: R::ActiveModel = existing.into_active_model();
    R::apply_update(&mut row, req)?;

    let model = row.update(&txn).await?;
    txn.commit().await?;

    Ok(Envelope::new(R::SINGULAR, model.into()))
}

/// Remove one row. Rows referencing it through a parent id are left in place.
#[instrument(skip(db), fields(resource = R::SINGULAR))]
pub async fn delete<R: Resource>(
    db: &DatabaseConnection,
    id: i32,
) -> Result<DeletedResponse, AppError> {
    let existing = find::<R, _>(db, id).await?;
    existing.into_active_model().delete(db).await?;

    tracing::info!("Deleted {}", R::SINGULAR);
    Ok(DeletedResponse { result: true })
}
