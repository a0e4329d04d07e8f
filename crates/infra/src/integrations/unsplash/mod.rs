//! Unsplash photo API adapters
//!
//! - [`UnsplashAuthClient`]: OAuth code → token exchange
//! - [`UnsplashClient`]: photo feed, likes, profile and avatar endpoints

mod auth;
mod client;
pub mod dto;
mod photos;
mod profile;

pub use auth::UnsplashAuthClient;
pub use client::UnsplashClient;
