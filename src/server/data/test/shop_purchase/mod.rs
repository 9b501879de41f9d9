use crate::server::data::shop_purchase::ShopPurchaseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod get_unclaimed_by_uuid;
