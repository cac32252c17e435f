use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    /// Band the user last selected. Not a foreign key; cleared or moved by the
    /// band service when the band goes away.
    pub current_band_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::band_member::Entity")]
    BandMember,
    #[sea_orm(has_many = "super::rehearsal_attendance::Entity")]
    RehearsalAttendance,
}

impl Related<super::band_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BandMember.def()
    }
}

impl Related<super::rehearsal_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RehearsalAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
