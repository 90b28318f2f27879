mod notes_extractor;

pub use notes_extractor::extract_gateway_order_id;
