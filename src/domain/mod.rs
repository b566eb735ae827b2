// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that every stage of the pipeline agrees on:
//
//   table.rs      — FeatureTable, LabelColumn, Dataset, Partition
//   prediction.rs — the JSON request/response of POST /predict
//   traits.rs     — DatasetSource and Classifier abstractions
//
// Rules for this layer:
//   - NO Burn types, NO file I/O, NO HTTP
//   - Only structs, enums, traits and their invariants
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Feature tables, label columns and train/test partitions
pub mod table;

/// Request and response bodies of the prediction endpoint
pub mod prediction;

/// Core abstractions that other layers implement
pub mod traits;
