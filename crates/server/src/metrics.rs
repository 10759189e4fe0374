use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static ORDERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "order_service_orders_created_total",
        "Total orders persisted"
    )
    .expect("register orders_created_total")
});

pub static ORDERS_REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "order_service_orders_rejected_total",
        "Total create requests rejected, by reason",
        &["reason"]
    )
    .expect("register orders_rejected_total")
});

pub static STORAGE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "order_service_storage_errors_total",
        "Total requests failed by the storage layer"
    )
    .expect("register storage_errors_total")
});

/// Register every metric so `/metrics` lists them before first use.
pub fn init() {
    Lazy::force(&ORDERS_CREATED_TOTAL);
    Lazy::force(&STORAGE_ERRORS_TOTAL);
    for reason in ["validation", "conflict"] {
        ORDERS_REJECTED_TOTAL.with_label_values(&[reason]);
    }
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
