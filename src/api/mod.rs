// ============================================================
// Layer 1 — HTTP Presentation Layer
// ============================================================
// The network face of the serving stage. Routes only parse,
// delegate to the shared Classifier, and serialise; they never
// load, train or mutate anything.
//
//   routes.rs — Router construction, POST /predict, AppError

pub mod routes;
