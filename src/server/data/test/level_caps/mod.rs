use crate::server::{
    data::level_caps::LevelCapsRepository,
    error::AppError,
    model::level_caps::{EnforcementMode, GlobalLevelCapConfig, UpdateGlobalConfigParam},
};
use test_utils::{builder::TestBuilder, factory};

mod delete_all;
mod get_history;
mod get_or_create_default;
mod update_global_config;
