//! Service-layer modules used by the route handlers.

pub mod session;
