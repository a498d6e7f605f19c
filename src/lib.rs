//! Targeted dietary suggestions for analysed food photos.
//!
//! The analysis service labels each nutrient of each recognised food as
//! low, medium or high. [`suggestions::classify`] sorts those foods into
//! "eat more", "limit" and "eat less" for a chosen [`audience::AudienceId`].

pub mod app;
pub mod audience;
pub mod config;
pub mod errors;
pub mod nutrition;
pub mod state;
pub mod suggestions;
