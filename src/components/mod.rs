pub mod navbar;
pub mod user_context;
