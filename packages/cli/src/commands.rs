//! Subcommands of the `safepath` binary and their execution against an [`HttpClient`].
//!
//! Every command prints a JSON value. Commands that hit protected endpoints refuse to
//! run without a stored token instead of letting the backend answer 401.

use anyhow::{bail, Result};
use api::{ApiError, Credentials, DangerZoneReport, HttpClient, Registration, RouteRequest};
use clap::Subcommand;
use serde_json::{json, Value};
use session::SessionStorage;

/// Map centre the dashboard opens on when no location is given.
const DEFAULT_LAT: &str = "40.7128";
const DEFAULT_LNG: &str = "-74.0060";
const DEFAULT_RADIUS_KM: &str = "10";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SAFEPATH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, env = "SAFEPATH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored profile
    Whoami,
    /// Report a danger zone
    Report {
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lng: String,
        /// POTHOLE, ACCIDENT_SPOT, POORLY_LIT_ROAD or CRIME_PRONE
        #[arg(long)]
        category: String,
    },
    /// List danger zones around a point
    Zones {
        #[arg(long, allow_hyphen_values = true, default_value = DEFAULT_LAT)]
        lat: String,
        #[arg(long, allow_hyphen_values = true, default_value = DEFAULT_LNG)]
        lng: String,
        /// Radius in kilometres
        #[arg(long, default_value = DEFAULT_RADIUS_KM)]
        radius: String,
    },
    /// Compute the safest route between two points
    Route {
        #[arg(long, allow_hyphen_values = true)]
        from_lat: String,
        #[arg(long, allow_hyphen_values = true)]
        from_lng: String,
        #[arg(long, allow_hyphen_values = true)]
        to_lat: String,
        #[arg(long, allow_hyphen_values = true)]
        to_lng: String,
    },
}

impl Command {
    fn requires_session(&self) -> bool {
        matches!(
            self,
            Command::Report { .. } | Command::Zones { .. } | Command::Route { .. }
        )
    }
}

/// Turn an API failure into the message a user should see.
fn explain(fallback: &'static str) -> impl FnOnce(ApiError) -> anyhow::Error {
    move |e| {
        tracing::debug!("{}", e);
        anyhow::anyhow!(e.user_message(fallback).to_string())
    }
}

/// Run one command and return what should be printed.
pub async fn run<S: SessionStorage>(command: Command, client: &HttpClient<S>) -> Result<Value> {
    let session = client.session();
    if command.requires_session() && !session.is_authenticated() {
        bail!("Not signed in. Run `safepath login` first.");
    }

    let output = match command {
        Command::Login { email, password } => {
            let response = client
                .auth()
                .login(&Credentials::new(email, password))
                .await
                .map_err(explain("Login failed"))?;
            let (token, profile) = response.into_parts();
            session.establish(&token, &profile);
            tracing::info!("Signed in as {}", profile.email);
            serde_json::to_value(&profile)?
        }
        Command::Register {
            name,
            email,
            phone,
            password,
        } => {
            let registration = Registration {
                name,
                email,
                phone,
                password,
            };
            let response = client
                .auth()
                .register(&registration)
                .await
                .map_err(explain("Registration failed"))?;
            let (token, profile) = response.into_parts();
            session.establish(&token, &profile);
            tracing::info!("Registered {}", profile.email);
            serde_json::to_value(&profile)?
        }
        Command::Logout => {
            session.clear();
            json!({ "signedOut": true })
        }
        Command::Whoami => match session.get_user_profile() {
            Some(profile) if session.is_authenticated() => serde_json::to_value(&profile)?,
            _ => json!({ "signedIn": false }),
        },
        Command::Report { lat, lng, category } => {
            let report = DangerZoneReport::parse(&lat, &lng, &category)?;
            let stored = client
                .danger_zones()
                .report(&report)
                .await
                .map_err(explain("Failed to report danger zone"))?;
            serde_json::to_value(&stored)?
        }
        Command::Zones { lat, lng, radius } => {
            let (lat, lng) = api::models::parse_point(&lat, &lng)?;
            let radius: f64 = radius
                .trim()
                .parse()
                .ok()
                .filter(|r: &f64| r.is_finite() && *r > 0.0)
                .ok_or_else(|| anyhow::anyhow!("radius must be a positive number"))?;
            let zones = client
                .danger_zones()
                .get_by_radius(lat, lng, radius)
                .await
                .map_err(explain("Failed to load danger zones"))?;
            serde_json::to_value(&zones)?
        }
        Command::Route {
            from_lat,
            from_lng,
            to_lat,
            to_lng,
        } => {
            let request = RouteRequest::parse(&from_lat, &from_lng, &to_lat, &to_lng)?;
            let route = client
                .routes()
                .get_safe_route(&request)
                .await
                .map_err(explain("Failed to calculate route"))?;
            serde_json::to_value(&route)?
        }
    };
    Ok(output)
}
