//! # Order Service
//!
//! A small order-taking service built on the generic actor framework.
//!
//! - **[model]**: the fixed menu [`Catalog`](model::Catalog) and the [`Order`](model::Order) entity.
//! - **[order_actor]**: the `ActorEntity` implementation owning the order store and work queue.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the typed wrapper over the actor channel.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) wiring and the periodic [`Advancer`](lifecycle::Advancer).
//! - **[api]**: axum routes for `GET /menu`, `POST /order` and `GET /order/{id}`.
//! - **[config]**: command-line and environment settings.
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
