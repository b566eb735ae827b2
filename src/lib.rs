#![recursion_limit = "256"]

// ============================================================
// iris-pipeline — crate root
// ============================================================
// Three stages that only talk to each other through files:
//
//   prepare-data  → X_train.csv, X_test.csv, y_train.csv, y_test.csv
//   train-model   → model.pkl (+ train_metrics.csv)
//   serve-model   → POST /predict on 0.0.0.0:5000
//
// Layering (each layer only calls the ones below it):
//
//   cli / api     — Layer 1: argument parsing, HTTP routing
//   application   — Layer 2: one use case per pipeline stage
//   domain        — Layer 3: tables, labels, request/response types
//   data          — Layer 4: dataset loading, splitting, CSV artifacts
//   ml            — Layer 5: the Burn model and training loop
//   infra         — Layer 6: artifact naming, model store, metrics

pub mod api;
pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
