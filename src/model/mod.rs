//! JSON data transfer objects exchanged with the browser and the Minecraft plugin.

pub mod admin;
pub mod api;
pub mod lenient;
pub mod level_caps;
pub mod player;
pub mod shop;
pub mod user;
pub mod verification;
