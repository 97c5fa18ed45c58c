//! Particle-effect (confetti) burst model and host service contracts.
//!
//! Bursts are plain data shaped after the `canvas-confetti` option object so browser adapters can
//! forward them as-is. Native builds and tests use [`NoopParticleEffectService`] or the recording
//! [`MemoryParticleEffectService`].

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Stacking value used for every burst so particles paint above windows and the taskbar.
pub const CONFETTI_OVERLAY_Z_INDEX: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Normalized emission origin; `0.0..1.0` spans the viewport on each axis.
pub struct ParticleOrigin {
    /// Horizontal origin. `None` lets the effect library center the burst.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical origin. May be negative to emit from above the viewport.
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One particle burst request.
pub struct ConfettiBurst {
    /// Number of particles to emit.
    pub particle_count: u32,
    /// Spread angle in degrees.
    pub spread: f64,
    /// Initial particle velocity, library default when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_velocity: Option<f64>,
    /// Particle lifetime in animation frames, library default when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<u32>,
    /// Emission origin.
    pub origin: ParticleOrigin,
    /// Stacking value of the effect canvas.
    pub z_index: i32,
}

impl ConfettiBurst {
    /// The large single burst used for greetings and manual celebrations.
    pub fn finale() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            start_velocity: None,
            ticks: None,
            origin: ParticleOrigin { x: None, y: 0.6 },
            z_index: CONFETTI_OVERLAY_Z_INDEX,
        }
    }

    /// A full-circle fountain burst emitted from `origin`.
    pub fn fountain(particle_count: u32, origin: ParticleOrigin) -> Self {
        Self {
            particle_count,
            spread: 360.0,
            start_velocity: Some(30.0),
            ticks: Some(60),
            origin,
            z_index: CONFETTI_OVERLAY_Z_INDEX,
        }
    }
}

/// Host service that renders particle bursts.
pub trait ParticleEffectService {
    /// Emits one burst.
    ///
    /// # Errors
    ///
    /// Returns a host-specific message when the effect backend is unavailable.
    fn fire(&self, burst: &ConfettiBurst) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op particle service for unsupported targets.
pub struct NoopParticleEffectService;

impl ParticleEffectService for NoopParticleEffectService {
    fn fire(&self, _burst: &ConfettiBurst) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory particle service that records every burst it receives.
pub struct MemoryParticleEffectService {
    fired: Rc<RefCell<Vec<ConfettiBurst>>>,
}

impl MemoryParticleEffectService {
    /// Returns a copy of every burst fired so far, in order.
    pub fn fired(&self) -> Vec<ConfettiBurst> {
        self.fired.borrow().clone()
    }

    /// Returns the number of bursts fired so far.
    pub fn fired_count(&self) -> usize {
        self.fired.borrow().len()
    }
}

impl ParticleEffectService for MemoryParticleEffectService {
    fn fire(&self, burst: &ConfettiBurst) -> Result<(), String> {
        self.fired.borrow_mut().push(burst.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn finale_serializes_as_effect_options() {
        let value = serde_json::to_value(ConfettiBurst::finale()).expect("serialize burst");
        assert_eq!(
            value,
            json!({
                "particleCount": 100,
                "spread": 70.0,
                "origin": { "y": 0.6 },
                "zIndex": 9999
            })
        );
    }

    #[test]
    fn fountain_carries_velocity_and_lifetime() {
        let burst = ConfettiBurst::fountain(
            25,
            ParticleOrigin {
                x: Some(0.2),
                y: -0.1,
            },
        );
        let value = serde_json::to_value(&burst).expect("serialize burst");
        assert_eq!(value["startVelocity"], json!(30.0));
        assert_eq!(value["ticks"], json!(60));
        assert_eq!(value["spread"], json!(360.0));
        assert_eq!(value["origin"]["x"], json!(0.2));
    }

    #[test]
    fn memory_service_records_in_order() {
        let service = MemoryParticleEffectService::default();
        let shared = service.clone();
        service.fire(&ConfettiBurst::finale()).expect("fire");
        service
            .fire(&ConfettiBurst::fountain(3, ParticleOrigin::default()))
            .expect("fire");

        assert_eq!(shared.fired_count(), 2);
        assert_eq!(shared.fired()[1].particle_count, 3);
    }
}
