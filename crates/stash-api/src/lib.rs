pub mod analytics;
pub mod assistant;
pub mod chat;
pub mod current_user;
pub mod detection;
pub mod error;
pub mod extractors;
pub mod posts;
pub mod reminders;
pub mod router;
pub mod state;
pub mod users;
