pub mod config;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;

pub use config::Config;
pub use routes::create_routes;
pub use state::AppState;
