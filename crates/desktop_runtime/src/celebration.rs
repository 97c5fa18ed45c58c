//! Birthday celebration scheduling: one greeting burst, then decaying fountains until a deadline.

use leptos::logging::{log, warn};
use platform_host::{ConfettiBurst, ParticleEffectService, ParticleOrigin};
use rand::Rng;

use crate::manifest::CelebrationRule;

/// Fires one burst, logging instead of failing when the effect backend is unavailable.
pub fn fire_burst(effects: &dyn ParticleEffectService, burst: &ConfettiBurst) {
    if let Err(err) = effects.fire(burst) {
        warn!("confetti burst failed: {err}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fountain timing anchored to wall-clock timestamps, so late ticks never extend the sequence.
pub struct CelebrationSchedule {
    started_at_ms: u64,
    deadline_ms: u64,
    base_particle_count: u32,
}

impl CelebrationSchedule {
    pub fn start(now_ms: u64, rule: &CelebrationRule) -> Self {
        Self {
            started_at_ms: now_ms,
            deadline_ms: now_ms.saturating_add(rule.duration_ms),
            base_particle_count: rule.base_particle_count,
        }
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }

    /// Particles per fountain, decaying linearly from the base count to zero.
    pub fn particle_count(&self, now_ms: u64) -> u32 {
        let duration = self.deadline_ms - self.started_at_ms;
        if duration == 0 {
            return 0;
        }
        let remaining = self.remaining_ms(now_ms).min(duration);
        (u64::from(self.base_particle_count) * remaining / duration) as u32
    }

    /// The left and right fountain bursts for one tick, or `None` once the deadline has passed.
    pub fn fountains<R: Rng + ?Sized>(&self, now_ms: u64, rng: &mut R) -> Option<[ConfettiBurst; 2]> {
        if self.remaining_ms(now_ms) == 0 {
            return None;
        }
        let count = self.particle_count(now_ms);
        let left = ParticleOrigin {
            x: Some(rng.gen_range(0.1..0.3)),
            y: rng.gen::<f64>() - 0.2,
        };
        let right = ParticleOrigin {
            x: Some(rng.gen_range(0.7..0.9)),
            y: rng.gen::<f64>() - 0.2,
        };
        Some([
            ConfettiBurst::fountain(count, left),
            ConfettiBurst::fountain(count, right),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    NotTriggered,
    Scheduled,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-mount celebration state for the birthday window.
///
/// Starts at most once; hiding the window ends the sequence and restoring it does not restart it.
pub struct CelebrationTrigger {
    rule: CelebrationRule,
    phase: CelebrationPhase,
    schedule: Option<CelebrationSchedule>,
}

impl CelebrationTrigger {
    pub fn new(rule: CelebrationRule) -> Self {
        Self {
            rule,
            phase: CelebrationPhase::NotTriggered,
            schedule: None,
        }
    }

    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    pub fn schedule(&self) -> Option<CelebrationSchedule> {
        self.schedule
    }

    /// Starts the sequence the first time the window is seen visible and cancels it once hidden.
    ///
    /// Fires the greeting burst and returns `true` only on that first start.
    pub fn observe_visibility(
        &mut self,
        visible: bool,
        now_ms: u64,
        effects: &dyn ParticleEffectService,
    ) -> bool {
        if !visible {
            self.cancel();
            return false;
        }
        if self.phase != CelebrationPhase::NotTriggered {
            return false;
        }
        fire_burst(effects, &ConfettiBurst::finale());
        let schedule = CelebrationSchedule::start(now_ms, &self.rule);
        self.schedule = Some(schedule);
        self.phase = CelebrationPhase::Scheduled;
        log!(
            "celebration scheduled until {} (+{} ms)",
            schedule.deadline_ms(),
            self.rule.duration_ms
        );
        true
    }

    /// Emits one tick of fountains. Returns `false` once ticking should stop.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
        effects: &dyn ParticleEffectService,
    ) -> bool {
        if self.phase != CelebrationPhase::Scheduled {
            return false;
        }
        let Some(bursts) = self.schedule.and_then(|s| s.fountains(now_ms, rng)) else {
            self.phase = CelebrationPhase::Finished;
            log!("celebration finished");
            return false;
        };
        for burst in &bursts {
            fire_burst(effects, burst);
        }
        true
    }

    /// Stops a running sequence early. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        if self.phase != CelebrationPhase::Scheduled {
            return false;
        }
        self.phase = CelebrationPhase::Finished;
        log!("celebration cancelled before its deadline");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::desktop_manifest;
    use platform_host::MemoryParticleEffectService;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const T0: u64 = 1_700_000_000_000;

    fn rule() -> CelebrationRule {
        desktop_manifest().celebration
    }

    #[test]
    fn particle_count_decays_linearly() {
        let schedule = CelebrationSchedule::start(T0, &rule());
        assert_eq!(schedule.particle_count(T0), 50);
        assert_eq!(schedule.particle_count(T0 + 7_500), 25);
        assert_eq!(schedule.particle_count(T0 + 14_999), 0);
        assert_eq!(schedule.particle_count(T0 + 20_000), 0);
        assert_eq!(schedule.remaining_ms(T0 + 20_000), 0);
    }

    #[test]
    fn fountains_use_side_origins_and_fountain_shape() {
        let schedule = CelebrationSchedule::start(T0, &rule());
        let mut rng = StdRng::seed_from_u64(7);
        for step in 0..60 {
            let now = T0 + step * 250;
            let [left, right] = schedule.fountains(now, &mut rng).expect("before deadline");
            let lx = left.origin.x.expect("left x");
            let rx = right.origin.x.expect("right x");
            assert!((0.1..0.3).contains(&lx), "left x {lx}");
            assert!((0.7..0.9).contains(&rx), "right x {rx}");
            for burst in [&left, &right] {
                assert!((-0.2..0.8).contains(&burst.origin.y));
                assert_eq!(burst.spread, 360.0);
                assert_eq!(burst.start_velocity, Some(30.0));
                assert_eq!(burst.ticks, Some(60));
                assert_eq!(burst.z_index, 9999);
                assert_eq!(burst.particle_count, schedule.particle_count(now));
            }
        }
        assert!(schedule.fountains(T0 + 15_000, &mut rng).is_none());
    }

    #[test]
    fn visible_mount_starts_exactly_one_sequence() {
        let effects = MemoryParticleEffectService::default();
        let mut trigger = CelebrationTrigger::new(rule());

        assert!(!trigger.observe_visibility(false, T0, &effects));
        assert_eq!(trigger.phase(), CelebrationPhase::NotTriggered);

        assert!(trigger.observe_visibility(true, T0, &effects));
        assert!(!trigger.observe_visibility(true, T0 + 20, &effects));

        assert_eq!(trigger.phase(), CelebrationPhase::Scheduled);
        assert_eq!(effects.fired(), vec![ConfettiBurst::finale()]);
    }

    #[test]
    fn minimizing_after_start_ends_the_sequence_for_good() {
        let effects = MemoryParticleEffectService::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut trigger = CelebrationTrigger::new(rule());
        assert!(trigger.observe_visibility(true, T0, &effects));
        assert!(trigger.tick(T0 + 250, &mut rng, &effects));
        let fired = effects.fired_count();

        assert!(!trigger.observe_visibility(false, T0 + 300, &effects));
        assert_eq!(trigger.phase(), CelebrationPhase::Finished);
        assert!(!trigger.tick(T0 + 500, &mut rng, &effects));

        assert!(!trigger.observe_visibility(true, T0 + 600, &effects));
        assert!(!trigger.tick(T0 + 750, &mut rng, &effects));
        assert_eq!(trigger.phase(), CelebrationPhase::Finished);
        assert_eq!(effects.fired_count(), fired);
    }

    #[test]
    fn ticks_fire_two_bursts_until_deadline() {
        let effects = MemoryParticleEffectService::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut trigger = CelebrationTrigger::new(rule());
        trigger.observe_visibility(true, T0, &effects);

        let mut ticks = 0;
        let mut now = T0;
        loop {
            now += 250;
            if !trigger.tick(now, &mut rng, &effects) {
                break;
            }
            ticks += 1;
        }

        assert_eq!(ticks, 59);
        assert_eq!(effects.fired_count(), 1 + 2 * 59);
        assert_eq!(trigger.phase(), CelebrationPhase::Finished);
        assert!(!trigger.tick(now + 250, &mut rng, &effects));
    }

    #[test]
    fn late_ticks_do_not_extend_the_sequence() {
        let effects = MemoryParticleEffectService::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut trigger = CelebrationTrigger::new(rule());
        trigger.observe_visibility(true, T0, &effects);

        assert!(trigger.tick(T0 + 14_000, &mut rng, &effects));
        assert!(!trigger.tick(T0 + 16_500, &mut rng, &effects));
        assert_eq!(effects.fired_count(), 3);
    }

    #[test]
    fn cancel_before_deadline_stops_further_bursts() {
        let effects = MemoryParticleEffectService::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut trigger = CelebrationTrigger::new(rule());
        trigger.observe_visibility(true, T0, &effects);
        trigger.tick(T0 + 250, &mut rng, &effects);
        let fired = effects.fired_count();

        assert!(trigger.cancel());
        assert!(!trigger.cancel());
        assert!(!trigger.tick(T0 + 500, &mut rng, &effects));
        assert!(!trigger.observe_visibility(true, T0 + 750, &effects));

        assert_eq!(effects.fired_count(), fired);
        assert_eq!(trigger.phase(), CelebrationPhase::Finished);
    }

    #[test]
    fn hidden_window_never_triggers() {
        let effects = MemoryParticleEffectService::default();
        let mut trigger = CelebrationTrigger::new(rule());
        assert!(!trigger.cancel());
        assert_eq!(trigger.phase(), CelebrationPhase::NotTriggered);
        assert_eq!(trigger.schedule(), None);
        assert_eq!(effects.fired_count(), 0);
    }
}
