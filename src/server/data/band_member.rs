//! Band membership data repository.
//!
//! Provides `BandMemberRepository` for listing, adding, updating and removing band
//! members, plus the membership lookups used by access control and by the current
//! band fallback.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::band::MemberRole,
    server::{
        model::band::{BandMember, CreateMemberParams, UpdateMemberParams},
        util::parse::parse_stored,
    },
};

/// Repository providing database operations for band memberships.
pub struct BandMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandMemberRepository<'a> {
    /// Creates a new BandMemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all members of a band ordered by join date, then membership ID.
    ///
    /// # Returns
    /// - `Ok(Vec<BandMember>)` - Members with their user profiles
    /// - `Err(DbErr)` - Database error, unknown stored role or missing user
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<BandMember>, DbErr> {
        let rows = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::band_member::Column::JoinedAt)
            .order_by_asc(entity::band_member::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(member, user)| BandMember::from_entity(member, user))
            .collect()
    }

    /// Finds a single membership with the member's profile.
    ///
    /// # Returns
    /// - `Ok(Some(BandMember))` - The user is a member of the band
    /// - `Ok(None)` - The user is not a member
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find(&self, band_id: i32, user_id: i32) -> Result<Option<BandMember>, DbErr> {
        let row = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(member, user)| BandMember::from_entity(member, user))
            .transpose()
    }

    /// Gets the user's role in a band without loading the profile.
    ///
    /// Used by the auth guard on every band-scoped request.
    ///
    /// # Returns
    /// - `Ok(Some(MemberRole))` - The user's role
    /// - `Ok(None)` - The user is not a member
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn get_role(&self, band_id: i32, user_id: i32) -> Result<Option<MemberRole>, DbErr> {
        let role: Option<String> = entity::prelude::BandMember::find()
            .select_only()
            .column(entity::band_member::Column::Role)
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .into_tuple()
            .one(self.db)
            .await?;

        role.map(|role| parse_stored("member role", &role))
            .transpose()
    }

    /// Adds a user to a band.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - The created membership
    /// - `Err(DbErr)` - Database error, including duplicate membership
    pub async fn create(&self, params: CreateMemberParams) -> Result<BandMember, DbErr> {
        let member = entity::band_member::ActiveModel {
            band_id: ActiveValue::Set(params.band_id),
            user_id: ActiveValue::Set(params.user_id),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            instrument: ActiveValue::Set(params.instrument),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(member.user_id)
            .one(self.db)
            .await?;

        BandMember::from_entity(member, user)
    }

    /// Replaces a member's role and instrument.
    ///
    /// Demoting an admin only succeeds while the band has another admin. The check is
    /// part of the `UPDATE` itself, so concurrent demotions cannot both pass it.
    ///
    /// # Returns
    /// - `Ok(Some(BandMember))` - The updated membership
    /// - `Ok(None)` - The user is not a member, or is the band's last admin
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Option<BandMember>, DbErr> {
        let (band_id, user_id) = (params.band_id, params.user_id);

        let mut update = entity::prelude::BandMember::update_many()
            .col_expr(
                entity::band_member::Column::Role,
                Expr::value(params.role.as_str()),
            )
            .col_expr(
                entity::band_member::Column::Instrument,
                Expr::value(params.instrument),
            )
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .filter(entity::band_member::Column::UserId.eq(user_id));
        if params.role != MemberRole::Admin {
            update = update.filter(
                Condition::any()
                    .add(entity::band_member::Column::Role.ne(MemberRole::Admin.as_str()))
                    .add(has_other_admin(band_id)),
            );
        }

        if update.exec(self.db).await?.rows_affected == 0 {
            return Ok(None);
        }

        self.find(band_id, user_id).await
    }

    /// Removes a user from a band together with their attendance answers for the
    /// band's rehearsals.
    ///
    /// An admin is only removed while the band has another admin, checked by the
    /// `DELETE` itself. Both deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - The user was not a member, or is the band's last admin
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, band_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::BandMember::delete_many()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::band_member::Column::Role.ne(MemberRole::Admin.as_str()))
                    .add(has_other_admin(band_id)),
            )
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        entity::prelude::RehearsalAttendance::delete_many()
            .filter(entity::rehearsal_attendance::Column::UserId.eq(user_id))
            .filter(
                entity::rehearsal_attendance::Column::RehearsalId.in_subquery(
                    Query::select()
                        .column(entity::rehearsal::Column::Id)
                        .from(entity::prelude::Rehearsal)
                        .and_where(entity::rehearsal::Column::BandId.eq(band_id))
                        .to_owned(),
                ),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Gets the band the user joined first.
    ///
    /// Ties on join date are broken by the lowest band ID. Used to pick a new current
    /// band when the current one goes away.
    ///
    /// # Returns
    /// - `Ok(Some(band_id))` - The user's earliest band
    /// - `Ok(None)` - The user belongs to no band
    /// - `Err(DbErr)` - Database error during query
    pub async fn first_band_for_user(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::BandMember::find()
            .select_only()
            .column(entity::band_member::Column::BandId)
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .order_by_asc(entity::band_member::Column::JoinedAt)
            .order_by_asc(entity::band_member::Column::BandId)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Checks whether two users are members of at least one common band.
    pub async fn share_band(&self, user_id: i32, other_user_id: i32) -> Result<bool, DbErr> {
        let band_ids: Vec<i32> = entity::prelude::BandMember::find()
            .select_only()
            .column(entity::band_member::Column::BandId)
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if band_ids.is_empty() {
            return Ok(false);
        }

        let shared = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::UserId.eq(other_user_id))
            .filter(entity::band_member::Column::BandId.is_in(band_ids))
            .count(self.db)
            .await?;

        Ok(shared > 0)
    }
}

/// Condition that holds while the band has more than one admin.
fn has_other_admin(band_id: i32) -> SimpleExpr {
    Expr::cust_with_values(
        "(SELECT COUNT(*) FROM band_member AS admins WHERE admins.band_id = ? AND admins.role = ?) > 1",
        [
            sea_orm::Value::from(band_id),
            sea_orm::Value::from(MemberRole::Admin.as_str()),
        ],
    )
}
