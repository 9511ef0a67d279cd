//! Test helpers shared across modules
