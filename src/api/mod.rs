pub mod handlers;
pub mod pages;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::create_router;
pub use session::{Session, SessionStore, SESSION_COOKIE};
pub use state::AppState;
