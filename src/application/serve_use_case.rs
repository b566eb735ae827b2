// ============================================================
// Layer 2 — ServeUseCase
// ============================================================
// The prediction service has exactly two states:
//
//   initializing  — ServeUseCase::load reads model.pkl once.
//                   A missing or corrupt artifact is a fatal
//                   error; no listener is ever opened.
//
//   ready         — ServeUseCase::run binds the socket and
//                   answers POST /predict until Ctrl-C.
//
// There is no way back from ready to initializing: the model
// is moved into an Arc at load time and never replaced.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::api::routes;
use crate::domain::traits::Classifier;
use crate::infra::{artifacts::ArtifactPaths, model_store::ModelStore};
use crate::ml::inferencer::FittedModel;

// ─── Serving Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    pub artifact_dir: String,
    pub host:         String,
    pub port:         u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            artifact_dir: ".".to_string(),
            host:         "0.0.0.0".to_string(),
            port:         5000,
        }
    }
}

// ─── ServeUseCase ─────────────────────────────────────────────────────────────
/// A service whose model is already loaded and ready to serve.
pub struct ServeUseCase {
    config: ServeConfig,
    model:  Arc<FittedModel>,
}

impl ServeUseCase {
    /// Load the model artifact. This is the only place the model is read.
    pub fn load(config: ServeConfig) -> Result<Self> {
        let paths = ArtifactPaths::new(&config.artifact_dir);
        let model = ModelStore::new(paths.model())
            .load()
            .context("Cannot start the prediction service")?;

        tracing::info!(
            "Model loaded: features {:?}, classes {:?}",
            model.feature_names(),
            model.classes()
        );
        Ok(Self { config, model: Arc::new(model) })
    }

    pub fn model(&self) -> &FittedModel {
        &self.model
    }

    /// The HTTP routes, sharing the loaded model read-only.
    pub fn router(&self) -> Router {
        routes::router(self.model.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Cannot bind '{addr}'"))?;
        tracing::info!("Serving predictions on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed
            tracing::warn!("Cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
