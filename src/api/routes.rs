// ============================================================
// Layer 1 — Routes
// ============================================================
// POST /predict
//   body:     {"features": <records or columns>}
//   200:      {"prediction": [<label>, ...]}
//   failure:  500 "Internal Server Error" (details only in logs)
//
// The body is taken as raw bytes and decoded here rather than
// through the Json extractor, so malformed JSON, a missing
// "features" key and a schema mismatch all surface the same
// way: a generic server error with no input-specific message.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::domain::prediction::{PredictRequest, PredictResponse};
use crate::domain::traits::Classifier;

/// Shared by every handler; cloning only bumps the Arc.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<dyn Classifier>,
}

pub fn router(classifier: Arc<dyn Classifier>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .with_state(AppState { classifier })
}

async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, AppError> {
    let request: PredictRequest = serde_json::from_slice(&body)?;
    let table = request
        .features
        .into_table(state.classifier.feature_names())?;
    let prediction = state.classifier.predict(&table)?;

    tracing::debug!("Predicted {} rows", prediction.len());
    Ok(Json(PredictResponse { prediction }))
}

/// Any handler failure. Rendered as a bare 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("Prediction request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use ndarray::array;
    use tower::ServiceExt;

    use crate::ml::inferencer::FittedModel;

    /// Class 0 for short petals, class 2 for long ones.
    fn petal_router() -> Router {
        let names = ["sepal_length", "sepal_width", "petal_length", "petal_width"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let model = FittedModel::new(
            names,
            vec![0, 2],
            array![[0.0, 0.0], [0.0, 0.0], [-1.0, 1.0], [0.0, 0.0]],
            array![2.5, -2.5],
        )
        .unwrap();
        router(Arc::new(model))
    }

    async fn post_predict(app: Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes  = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_single_row_prediction() {
        let (status, body) = post_predict(
            petal_router(),
            r#"{"features": [{"sepal_length": 5.1, "sepal_width": 3.5,
                              "petal_length": 1.4, "petal_width": 0.2}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"prediction":[0]}"#);
    }

    #[tokio::test]
    async fn test_rows_answered_in_order() {
        let (status, body) = post_predict(
            petal_router(),
            r#"{"features": [
                {"sepal_length": 6.7, "sepal_width": 3.0, "petal_length": 5.2, "petal_width": 2.3},
                {"sepal_length": 5.1, "sepal_width": 3.5, "petal_length": 1.4, "petal_width": 0.2}
            ]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let parsed: PredictResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.prediction, vec![2, 0]);
    }

    #[tokio::test]
    async fn test_column_layout_accepted() {
        let (status, body) = post_predict(
            petal_router(),
            r#"{"features": {"sepal_length": [5.1], "sepal_width": [3.5],
                             "petal_length": [4.0], "petal_width": [1.3]}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"prediction":[2]}"#);
    }

    #[tokio::test]
    async fn test_missing_column_is_server_error() {
        let (status, body) = post_predict(
            petal_router(),
            r#"{"features": [{"sepal_length": 5.1, "petal_length": 1.4}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("petal"), "error body must stay generic: {body}");
    }

    #[tokio::test]
    async fn test_malformed_json_is_server_error() {
        let (status, _) = post_predict(petal_router(), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_features_key_is_server_error() {
        let (status, _) = post_predict(petal_router(), r#"{"rows": []}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_not_allowed() {
        let response = petal_router()
            .oneshot(Request::builder().uri("/predict").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
