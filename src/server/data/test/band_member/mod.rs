use crate::{
    model::band::MemberRole,
    server::{
        data::band_member::BandMemberRepository,
        model::band::{CreateMemberParams, UpdateMemberParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod first_band_for_user;
mod get_by_band;
mod get_role;
mod share_band;
mod update;
