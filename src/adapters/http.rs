//! actix-web surface: the upload route, a health probe, and the JSON error
//! envelope returned when an upload cannot be processed.

use crate::core::bridge::ShipmentBridge;
use crate::domain::ports::Submitter;
use crate::utils::error::{BridgeError, Result};
use actix_multipart::Multipart;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures_util::StreamExt;
use serde_json::{json, Value};
use std::error::Error as _;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the request";

pub fn register<S: Submitter + 'static>(cfg: &mut web::ServiceConfig, upload_route: &str) {
    cfg.route("/health", web::get().to(health))
        .route(upload_route, web::post().to(upload_csv::<S>));
}

pub async fn serve<S: Submitter + 'static>(
    bridge: ShipmentBridge<S>,
    host: &str,
    port: u16,
    upload_route: &str,
) -> std::io::Result<()> {
    let bridge = web::Data::new(bridge);
    let route = upload_route.to_string();

    tracing::info!("🚀 Listening on http://{}:{} (upload route: POST {})", host, port, route);

    HttpServer::new(move || {
        let route = route.clone();
        App::new()
            .app_data(bridge.clone())
            .configure(move |cfg| register::<S>(cfg, &route))
    })
    .bind((host, port))?
    .run()
    .await
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn upload_csv<S: Submitter + 'static>(
    bridge: web::Data<ShipmentBridge<S>>,
    payload: Multipart,
) -> HttpResponse {
    let upload = match read_upload(payload).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return error_response(&BridgeError::UploadMissing),
        Err(e) => return error_response(&e),
    };

    tracing::info!("📎 Received upload ({} bytes)", upload.len());

    match bridge.process(&upload).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => error_response(&e),
    }
}

/// Returns the bytes of the first part that carries a filename. Other parts
/// are drained and discarded.
async fn read_upload(mut payload: Multipart) -> Result<Option<Vec<u8>>> {
    let mut upload = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) if upload.is_none() => {
                tracing::warn!("Request body is not a readable multipart form: {}", e);
                return Ok(None);
            }
            Err(e) => {
                return Err(BridgeError::UploadError {
                    message: e.to_string(),
                })
            }
        };

        let is_file = upload.is_none()
            && field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .is_some();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| BridgeError::UploadError {
                message: e.to_string(),
            })?;
            if is_file {
                bytes.extend_from_slice(&chunk);
            }
        }

        if is_file {
            upload = Some(bytes);
        }
    }

    Ok(upload)
}

pub fn error_response(err: &BridgeError) -> HttpResponse {
    if matches!(err, BridgeError::UploadMissing) {
        tracing::warn!("Upload rejected: no file attached");
        return HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
    }

    tracing::error!("❌ Upload processing failed: {}", err);
    HttpResponse::InternalServerError().json(error_envelope(err))
}

pub fn error_envelope(err: &BridgeError) -> Value {
    json!({
        "message": GENERIC_ERROR_MESSAGE,
        "error": {
            "status": err.remote_status().unwrap_or(500),
            "response": error_detail(err),
        }
    })
}

/// Most structured description available: a JSON body from the downstream
/// API, then the cause chain, then the raw text.
fn error_detail(err: &BridgeError) -> Value {
    if let Some(parsed) = err
        .remote_body()
        .and_then(|body| serde_json::from_str::<Value>(body).ok())
    {
        return parsed;
    }

    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    if chain.len() > 1 {
        return Value::String(chain.join("\n  caused by: "));
    }

    match err.remote_body() {
        Some(body) if !body.is_empty() => Value::String(body.to_string()),
        _ => Value::String(err.to_string()),
    }
}
