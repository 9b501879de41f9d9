mod level_caps;
mod shop_purchase;
mod user;
