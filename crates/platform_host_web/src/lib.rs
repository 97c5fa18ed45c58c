//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the particle-effect service and
//! viewport queries. Bridge bindings live under `bridge/`, with `bridge::interop` routing to the
//! `wasm32` transport or to inert native fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod particles;
pub mod viewport;

pub use particles::{particle_effect_service, WebParticleEffectService};
pub use viewport::viewport_width_px;
