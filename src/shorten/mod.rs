//! Client for the shorten endpoint.
//!
//! The backend is an opaque external collaborator: one `POST /shorten`
//! operation, form-urlencoded request, JSON response. This module owns the
//! wire types and the request/response handling; everything UI-facing
//! lives in `ui` and `app`.

mod client;
mod types;

pub use client::{submit_shorten, ShortenError};
pub use types::ShortenOutcome;
