// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Wires one Library, one EventBus and one store into the services
// - Menu or GUI layers hold an AppState and call the services directly

pub mod state;

pub use state::AppState;
