//! Request-context extractors that run before handlers.
//!
//! - [`current_user::CurrentUser`] -- resolves the `username` header to a
//!   stored user or rejects the request with 404.

pub mod current_user;
