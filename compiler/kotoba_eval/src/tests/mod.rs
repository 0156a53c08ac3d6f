//! End-to-end scripts run through `run_source`.
