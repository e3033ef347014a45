mod actions;
mod coach;
mod config;
pub mod data;
mod errors;
mod prompts;
mod session;
mod store;
mod types;

pub use actions::{
    generate_daily_plan, get_habit_suggestions, get_personalized_advice, AdviceOutput,
    FALLBACK_ADVICE, FALLBACK_DAILY_PLAN, FALLBACK_SUGGESTIONS,
};
pub use coach::{Advice, AdviceInput, Coach, CoachParams};
pub use config::{Config, ConfigError};
pub use errors::CoachError;
pub use session::CoachSession;
pub use store::AppState;
pub use types::*;
