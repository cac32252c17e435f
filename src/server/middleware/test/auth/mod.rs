use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
};
use test_utils::{builder::TestBuilder, factory};

mod check_member_removal;
