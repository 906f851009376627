//! # API crate: typed client for the SafePath backend
//!
//! This crate is the boundary between SafePath consumers (the CLI today, a web front
//! end tomorrow) and the backend that plans safe routes and stores danger-zone reports.
//! It holds no domain logic of its own: route planning, hazard storage and token
//! verification all happen server-side.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpClient`]: base address, JSON defaults, per-request bearer token injection |
//! | [`auth`] | [`AuthApi`]: `login`, `register` |
//! | [`danger_zones`] | [`DangerZoneApi`]: `report`, `get_by_radius` |
//! | [`routes`] | [`RouteApi`]: `get_safe_route` |
//! | [`models`] | Request/response payloads and caller-side input parsing |
//! | [`config`] | [`ClientConfig`] from `safepath.toml` and `SAFEPATH_API_URL` |
//! | [`error`] | [`ApiError`] taxonomy |
//!
//! ## Backend surface
//!
//! | Method | Path | Call |
//! |--------|------|------|
//! | POST | `/auth/login` | [`AuthApi::login`] |
//! | POST | `/auth/register` | [`AuthApi::register`] |
//! | POST | `/danger-zones/report` | [`DangerZoneApi::report`] |
//! | GET | `/danger-zones/radius?lat&lng&radius` | [`DangerZoneApi::get_by_radius`] |
//! | POST | `/routes/safe-route` | [`RouteApi::get_safe_route`] |
//!
//! ## Session handling
//!
//! The [`HttpClient`] is built around a [`session::Session`] and reads the token from
//! it for every request. Resource clients never write to the session; after a
//! successful login the consumer stores the result itself:
//!
//! ```no_run
//! # async fn demo() -> api::Result<()> {
//! use api::{Credentials, HttpClient};
//! use session::{MemoryStorage, Session};
//!
//! let client = HttpClient::new("http://localhost:8080/api", Session::new(MemoryStorage::new()))?;
//! let (token, profile) = client
//!     .auth()
//!     .login(&Credentials::new("a@b.com", "x"))
//!     .await?
//!     .into_parts();
//! client.session().establish(&token, &profile);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod danger_zones;
pub mod error;
pub mod models;
pub mod routes;

pub use auth::AuthApi;
pub use client::{ApiResponse, HttpClient};
pub use config::ClientConfig;
pub use danger_zones::DangerZoneApi;
pub use error::{ApiError, Result};
pub use models::{
    AuthResponse, Credentials, DangerCategory, DangerZone, DangerZoneReport, Registration,
    RouteDangerZone, RouteRequest, RouteResult,
};
pub use routes::RouteApi;

pub use session::UserProfile;
