//! Typed host-domain contracts and shared models used across runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes clock/calendar helpers,
//! the particle-effect burst model and its service trait, and viewport layout helpers, while the
//! concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod layout;
pub mod particles;
pub mod time;

pub use layout::{is_compact_viewport, COMPACT_LAYOUT_BREAKPOINT_PX};
pub use particles::{
    ConfettiBurst, MemoryParticleEffectService, NoopParticleEffectService, ParticleEffectService,
    ParticleOrigin, CONFETTI_OVERLAY_Z_INDEX,
};
pub use time::{unix_time_ms_now, CalendarDate, LocalClockReading};
