//! Remote Table Layer
//!
//! Client abstraction for the hosted `todos` table and its PostgREST implementation.

mod traits;
mod config;
mod postgrest;

pub use traits::RemoteTableClient;
pub use config::{SupabaseConfig, DEFAULT_TABLE};
pub use postgrest::PostgrestClient;
