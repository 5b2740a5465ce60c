//! Claim submission page: session state machine and view models

pub mod leaderboard;
pub mod session;
pub mod view;

pub use leaderboard::Leaderboard;
pub use session::ClaimSession;
pub use view::PageTemplate;
