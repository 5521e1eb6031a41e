use actix_web::{get, Responder};

use crate::handlers::backend_health_handler::backend_health_check;

/// Liveness probe, independent of the match store
#[get("/backend_health")]
async fn backend_health() -> impl Responder {
    backend_health_check().await
}
