use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "setlist_song")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub setlist_id: i32,
    /// Zero-based order within the setlist.
    pub position: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub song_key: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::setlist::Entity",
        from = "Column::SetlistId",
        to = "super::setlist::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Setlist,
}

impl Related<super::setlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Setlist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
