//! HTTP request handlers.
//!
//! Controllers validate input, apply the admin guard where required, call into the
//! service layer and convert domain models into DTOs.

pub mod admin;
pub mod auth;
pub mod extract;
pub mod level_caps;
pub mod param;
pub mod player;
pub mod seed;
pub mod shop;
pub mod user;
pub mod verification;

#[cfg(test)]
mod test;
