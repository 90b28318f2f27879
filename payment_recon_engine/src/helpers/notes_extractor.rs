use serde_json::Value;

/// Digs the gateway order id out of an order's notes field.
///
/// Structured notes carry the id in a `razorpay_order_id` field. Failing that, the raw text is
/// scanned for the first token shaped like a gateway order id (`order_` followed by alphanumerics),
/// which covers notes written by older storefront versions as plain prose.
pub fn extract_gateway_order_id(notes: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<Value>(notes) {
        if let Some(id) = parsed.get("razorpay_order_id").and_then(|v| v.as_str()) {
            return Some(id.to_string());
        }
    }
    let token = regex::Regex::new(r"order_[A-Za-z0-9]+").unwrap();
    token.find(notes).map(|m| m.as_str().to_string())
}
