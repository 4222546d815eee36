//! Like/unlike toggle for tweet pages.
//!
//! The CSRF token is read from the cookie header once at start-up and held by
//! a [`LikeClient`]; every click on a likeable element goes through
//! [`toggle_like`], which only touches the DOM after the server answered with
//! a decodable payload.

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod like;
pub mod logging;

pub use client::{LikeClient, LikeRequest, Transport};
pub use config::LikeConfig;
pub use error::LikeError;
pub use handler::{toggle_like, LikeOutcome};
pub use like::{LikeAction, LikeResponse, LikeState};
