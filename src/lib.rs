//! Crop Advisor
//!
//! Rule-based crop recommendations from a short free-text description of
//! farm conditions ("sandy soil with low rainfall").
//!
//! Pipeline, evaluated leaf-first:
//! - `context/`: Free text -> SoilClimateContext (keyword passes)
//! - `engine/`: SoilClimateContext -> RecommendationResult (ordered rule table)
//! - `conversation/`: Quick questions, reply text, caller-owned chat history
//!
//! Both core stages are pure and reentrant, so they can be called from any
//! number of threads without coordination.

pub mod utils;
pub mod context;
pub mod engine;
pub mod conversation;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use context::{extract, SoilClimateContext, SoilTexture, RainfallBand, ClimateZone};
pub use engine::{advise, recommend, Advice, RecommendationResult, Rule, RULES};
pub use conversation::{compose_reply, ChatSession, QUICK_QUESTIONS};
pub use config::{ConfigError, ServerConfig};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
