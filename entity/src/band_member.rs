use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "band_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub band_id: i32,
    pub user_id: i32,
    /// One of `admin`, `member`, `substitute`.
    pub role: String,
    pub instrument: String,
    pub joined_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::band::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Band.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
