// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per pipeline stage. Each owns a serialisable
// config whose Default is the fixed behaviour of that stage,
// and coordinates the lower layers to get the job done.
//
// Rules for this layer:
//   - No ML math or tensor code here (Layer 5)
//   - No clap types or printing here (Layer 1)
//   - No direct CSV or bincode handling (Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Stage 1: load → split → write CSV artifacts
pub mod prepare_use_case;

// Stage 2: read CSVs → fit → score → write model.pkl
pub mod train_use_case;

// Stage 3: load model.pkl once → serve POST /predict
pub mod serve_use_case;
