//! Host-side runtime helpers: particle effects, boot-time date gate, and viewport layout tracking.

mod boot;
mod layout;

use std::rc::Rc;

use leptos::{Callback, RwSignal};
use platform_host::{ConfettiBurst, ParticleEffectService};
use platform_host_web::{particle_effect_service, viewport_width_px};

use crate::{celebration, reducer::DesktopAction};

pub use boot::is_celebration_day;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    particles: Rc<dyn ParticleEffectService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(particle_effect_service())
    }
}

impl DesktopHostContext {
    /// Builds a host context around an explicit particle service.
    pub fn new(particles: Rc<dyn ParticleEffectService>) -> Self {
        Self { particles }
    }

    /// Returns the configured particle-effect service.
    pub fn particle_effect_service(&self) -> Rc<dyn ParticleEffectService> {
        self.particles.clone()
    }

    /// Fires one burst, logging backend failures.
    pub fn fire_burst(&self, burst: &ConfettiBurst) {
        celebration::fire_burst(self.particles.as_ref(), burst);
    }

    /// Returns the current viewport width in CSS pixels.
    pub fn viewport_width_px(&self) -> i32 {
        viewport_width_px()
    }

    /// Reveals the celebration window and schedules the greeting burst on the anniversary.
    pub fn install_celebration_date_gate(&self, dispatch: Callback<DesktopAction>) {
        boot::install_celebration_date_gate(self.clone(), dispatch);
    }

    /// Keeps `compact` in sync with the viewport width until the owning scope is disposed.
    pub fn install_layout_tracking(&self, compact: RwSignal<bool>) {
        layout::install_layout_tracking(self.clone(), compact);
    }
}
