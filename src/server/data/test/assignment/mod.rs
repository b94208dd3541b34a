use crate::server::{
    data::assignment::AssignmentRepository, error::AppError,
    model::assignment::CreateAssignmentParams,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
