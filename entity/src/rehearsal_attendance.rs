use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rehearsal_attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rehearsal_id: i32,
    pub user_id: i32,
    /// One of `going`, `maybe`, `not_going`.
    pub status: String,
    pub note: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rehearsal::Entity",
        from = "Column::RehearsalId",
        to = "super::rehearsal::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Rehearsal,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::rehearsal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rehearsal.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
