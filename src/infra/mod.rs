// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns shared by several stages:
//
//   artifacts.rs   — the artifact-naming convention. Every
//                    stage resolves its input/output files
//                    through ArtifactPaths, so writer and
//                    reader can never disagree on a name.
//
//   model_store.rs — persists the fitted classifier as the
//                    single binary artifact model.pkl and
//                    loads it back for serving.
//
//   metrics.rs     — accuracy, plus a CSV log of per-epoch
//                    training loss.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Fixed artifact file names and their resolved paths
pub mod artifacts;

/// Binary model artifact save/load
pub mod model_store;

/// Accuracy metric and training loss logger
pub mod metrics;
