//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the verification, moderation and seeding rules
//! - **Orchestration**: Coordinating repository calls and the Discord API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod level_caps;
pub mod player;
pub mod seed;
pub mod shop;
pub mod user;
pub mod verification;
