//! Particle-effect host-service adapters for browser contexts.

use std::rc::Rc;

use platform_host::{ConfettiBurst, ParticleEffectService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser particle adapter backed by the global `canvas-confetti` function.
pub struct WebParticleEffectService;

impl ParticleEffectService for WebParticleEffectService {
    fn fire(&self, burst: &ConfettiBurst) -> Result<(), String> {
        bridge::fire_confetti(burst)
    }
}

/// Builds the particle-effect service used by the browser runtime.
pub fn particle_effect_service() -> Rc<dyn ParticleEffectService> {
    Rc::new(WebParticleEffectService)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_accepts_bursts() {
        let service = particle_effect_service();
        assert_eq!(service.fire(&ConfettiBurst::finale()), Ok(()));
    }
}
