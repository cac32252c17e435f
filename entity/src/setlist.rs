use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "setlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub band_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_by: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::band::Entity",
        from = "Column::BandId",
        to = "super::band::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Band,
    #[sea_orm(has_many = "super::setlist_song::Entity")]
    SetlistSong,
    #[sea_orm(has_many = "super::rehearsal::Entity")]
    Rehearsal,
}

impl Related<super::band::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Band.def()
    }
}

impl Related<super::setlist_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SetlistSong.def()
    }
}

impl Related<super::rehearsal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rehearsal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
