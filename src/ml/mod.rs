// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn-specific code lives in model.rs and trainer.rs.
// No other layer imports burn's tensor or optimiser types.
//
//   model.rs      — LogisticRegression: one Linear layer whose
//                   logits feed a softmax cross-entropy loss
//
//   trainer.rs    — the mini-batch Adam training loop on the
//                   NdArray CPU backend with autodiff
//
//   inferencer.rs — FittedModel: the trained weights copied out
//                   of Burn into plain ndarray matrices. This is
//                   what gets persisted and served. It is
//                   immutable, Send + Sync, and needs no device.
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Multinomial logistic regression module
pub mod model;

/// Training loop producing a FittedModel
pub mod trainer;

/// Backend-free fitted classifier used for evaluation and serving
pub mod inferencer;
