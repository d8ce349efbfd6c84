use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Matches the `varchar(256)` column created by the migration.
pub const NAME_MAX_LEN: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_item")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `name` is optional, but when given it must carry text and fit the column.
pub fn validate_name(name: Option<&str>) -> Result<(), errors::ModelError> {
    let Some(name) = name else { return Ok(()) };
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be blank".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Insert a new item; the store assigns the id.
pub async fn create(
    db: &DatabaseConnection,
    name: Option<&str>,
    is_complete: bool,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.map(str::to_string)),
        is_complete: Set(is_complete),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
