//! HTTP handlers for mcp-relay.

pub mod echo;
pub mod health;
pub mod supabase;
pub mod youtube;

pub use echo::service_echo;
pub use health::{health_check, index, metrics};
pub use supabase::supabase;
pub use youtube::youtube;
