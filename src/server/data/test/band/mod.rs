use crate::{
    model::band::MemberRole,
    server::{
        data::band::BandRepository,
        model::band::{CreateBandParams, UpdateBandParams},
    },
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user;
mod update;
