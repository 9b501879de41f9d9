use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_purchase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Minecraft UUID of the buyer.
    pub uuid: String,
    pub username: String,
    pub ball_id: String,
    pub quantity: i32,
    pub purchased_at: DateTimeUtc,
    pub claimed: bool,
    pub claimed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
