//! Vehicle payload validation.
//!
//! A pure routine over the candidate (name, brand, year) triple. Every check
//! runs; the caller receives the full ordered list of failures, and an empty
//! list means the payload is acceptable.

/// Vehicles older than this are rejected.
pub const MIN_VEHICLE_YEAR: i32 = 1950;

/// Validate a candidate vehicle payload, returning human-readable error
/// messages in check order. Checks are independent; none short-circuits.
pub fn validate_vehicle(name: &str, brand: &str, year: i32) -> Vec<String> {
    let mut messages = Vec::new();

    if name.is_empty() {
        messages.push("name must not be empty".to_string());
    }

    if brand.is_empty() {
        messages.push("brand must not be empty".to_string());
    }

    if year < MIN_VEHICLE_YEAR {
        messages.push("invalid year".to_string());
    }

    messages
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
