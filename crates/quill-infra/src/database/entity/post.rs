//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain BlogPost.
impl From<Model> for quill_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Conversion from a domain draft to a SeaORM ActiveModel.
///
/// The id stays `NotSet` so the storage engine assigns it on insert.
impl From<quill_core::domain::NewBlogPost> for ActiveModel {
    fn from(draft: quill_core::domain::NewBlogPost) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
        }
    }
}
