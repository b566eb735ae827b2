// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "the iris table" and "tensors the
// training loop can consume":
//
//   IrisLoader       → embedded iris.csv parsed into a Dataset
//       │
//       ▼
//   train_test_split → seeded 80/20 Partition
//       │
//       ▼
//   PartitionStore   → X_train / X_test / y_train / y_test CSVs
//       │                 (written by prepare, read by train)
//       ▼
//   TabularDataset   → implements Burn's Dataset trait
//       │
//       ▼
//   TabularBatcher   → stacks samples into tensor batches
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            csv crate documentation

/// The fixed iris dataset, embedded at compile time
pub mod loader;

/// Seeded train/test splitting
pub mod splitter;

/// CSV persistence of the four partition artifacts
pub mod partition_store;

/// Implements Burn's Dataset trait for labelled rows
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
