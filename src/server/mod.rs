//! HTTP backend for the Cobblemon portal.
//!
//! A request enters through `router`, lands in a `controller` handler that checks
//! input and access, then calls a `service`. Services hold the game rules (starters,
//! shop claims, level caps) and talk to the store only through the `data`
//! repositories, which hand back `model` types rather than entities. `error` turns
//! failures into status codes and `middleware` wraps the session and the admin guard.
//!
//! `config`, `startup` and `state` build the long-lived handles once in `main`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
