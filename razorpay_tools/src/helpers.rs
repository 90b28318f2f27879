use chrono::Utc;

/// Receipt tags are a human-readable label on the gateway order, not a uniqueness guarantee.
pub fn new_receipt_id() -> String {
    format!("receipt_{}", Utc::now().timestamp_millis())
}
