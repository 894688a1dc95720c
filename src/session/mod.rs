/// Session state: credential and session-derived values
pub mod auth;
/// Session store trait and credential type
pub mod interface;
/// In-memory session store
pub mod store;
