//! Thin `gloo-net` wrappers over the backend API.
//!
//! Every function returns `Result<T, String>`: components only need a
//! message to show, never the transport error itself. Non-2xx responses
//! surface the body's `detail` field when the backend sent one.

use common::model::parameter::Parameter;
use common::model::sample::{Sample, SampleSubmission};
use common::model::stats::AdminStatistics;
use common::requests::{
    BulkValidateRequest, BulkValidateResponse, PendingCountResponse, SubmitResponse,
    TrackVisitRequest,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_detail(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn check_ok(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_detail(response).await);
    }
    Ok(())
}

/// Prefers the backend's human-readable `detail` message, falls back to the
/// HTTP status.
async fn error_detail(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(detail) = body.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    format!("HTTP {status}")
}

fn with_token(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

pub async fn fetch_parameters() -> Result<Vec<Parameter>, String> {
    let response = Request::get("/api/parameters")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_public_samples() -> Result<Vec<Sample>, String> {
    let response = Request::get("/api/samples")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_admin_samples(token: &str) -> Result<Vec<Sample>, String> {
    let response = with_token(Request::get("/api/samples/admin"), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_pending_count() -> Result<i64, String> {
    let response = Request::get("/api/samples/pending-count")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: PendingCountResponse = read_json(response).await?;
    Ok(body.pending_count)
}

pub async fn submit_sample(submission: &SampleSubmission) -> Result<SubmitResponse, String> {
    let response = Request::post("/api/samples")
        .json(submission)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn set_validated(token: &str, id: i64, validated: bool) -> Result<(), String> {
    let action = if validated { "validate" } else { "invalidate" };
    let response = with_token(Request::post(&format!("/api/samples/{id}/{action}")), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_ok(response).await
}

pub async fn bulk_validate(
    token: &str,
    sample_ids: Vec<i64>,
    validated: bool,
) -> Result<BulkValidateResponse, String> {
    let response = with_token(Request::post("/api/samples/bulk-validate"), token)
        .json(&BulkValidateRequest {
            sample_ids,
            validated,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete_sample(token: &str, id: i64) -> Result<(), String> {
    let response = with_token(Request::delete(&format!("/api/samples/{id}")), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_ok(response).await
}

pub async fn fetch_statistics(token: &str) -> Result<AdminStatistics, String> {
    let response = with_token(Request::get("/api/admin/statistics"), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// Fire-and-forget page-view tracking; failures only reach the console.
pub fn track_visit(page: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        let payload = TrackVisitRequest {
            page: Some(page.to_string()),
            ..Default::default()
        };
        let result = async {
            let response = Request::post("/api/visits")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            check_ok(response).await
        }
        .await;
        if let Err(e) = result {
            gloo_console::warn!("visit tracking failed:", e);
        }
    });
}
