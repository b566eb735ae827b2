// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits rather
// than concrete types:
//   - IrisLoader implements DatasetSource
//   - FittedModel implements Classifier
//
// Serving holds an `Arc<dyn Classifier>`, so the HTTP layer
// can be exercised with any classifier, including test stubs.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::table::{Dataset, FeatureTable, Label};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Anything that can produce the full labelled dataset.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A fitted, read-only classifier.
///
/// `Send + Sync` because one instance is shared by every
/// concurrent request handler for the life of the server.
pub trait Classifier: Send + Sync {
    /// Column names, in the order the model was trained on.
    fn feature_names(&self) -> &[String];

    /// The labels this classifier can emit, ascending.
    fn classes(&self) -> &[Label];

    /// One label per row of `features`, in row order.
    /// Fails if the table's columns differ from `feature_names()`.
    fn predict(&self, features: &FeatureTable) -> Result<Vec<Label>>;
}
