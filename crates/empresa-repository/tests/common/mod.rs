//! Common test infrastructure for store integration tests.

#![allow(dead_code)]

use empresa_config::StoreConfig;
use empresa_core::KeyValue;
use empresa_repository::SupabaseTableStore;
use serde_json::Value;
use wiremock::MockServer;

/// API key sent by test clients.
pub const TEST_KEY: &str = "test-anon-key";

/// Converts a JSON object literal into a row.
pub fn row(value: Value) -> KeyValue {
    value.as_object().cloned().expect("row literal must be an object")
}

/// Store configuration pointing at a mock HTTP server.
pub fn supabase_config(server: &MockServer) -> StoreConfig {
    StoreConfig::supabase(server.uri(), TEST_KEY)
}

/// Supabase store talking to a mock HTTP server.
pub fn supabase_store(server: &MockServer) -> SupabaseTableStore {
    SupabaseTableStore::new(&supabase_config(server)).expect("Failed to create Supabase store")
}
