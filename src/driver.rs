//! Frame driver
//!
//! One frame = one simulation tick followed by one scene render, repeated
//! at the host's refresh cadence. The clock is injectable so tests can
//! step frames deterministically instead of depending on wall time.
//! Rendering continues after defeat; only the simulation freezes.

use crate::input::InputSnapshot;
use crate::renderer::hud::{HudSink, push_readouts};
use crate::renderer::scene::render_frame;
use crate::renderer::surface::{Color, DrawSurface, TextAlign};
use crate::settings::Settings;
use crate::sim::map::WorldMap;
use crate::sim::state::{GameEvent, WorldState};
use crate::sim::tick::tick;
use crate::tuning::Tuning;

/// Frame timing source
pub trait Clock {
    /// Seconds since an arbitrary epoch
    fn now(&mut self) -> f64;
    /// Block until the next display refresh
    fn wait_for_next_frame(&mut self);
}

/// Wall-clock pacing at a fixed refresh rate
pub struct SystemClock {
    start: std::time::Instant,
    frame: std::time::Duration,
    deadline: std::time::Instant,
}

impl SystemClock {
    pub fn new(refresh_hz: u32) -> Self {
        let start = std::time::Instant::now();
        let frame = std::time::Duration::from_secs_f64(1.0 / refresh_hz.max(1) as f64);
        Self {
            start,
            frame,
            deadline: start + frame,
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn wait_for_next_frame(&mut self) {
        let now = std::time::Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }
        self.deadline += self.frame;
    }
}

/// Owns the world and repeats tick-then-render until the host stops
pub struct FrameDriver {
    map: WorldMap,
    state: WorldState,
    settings: Settings,
    tuning: Tuning,
    frames: u64,
    last_frame_at: Option<f64>,
    fps: f32,
}

impl FrameDriver {
    pub fn new(map: WorldMap, state: WorldState, settings: Settings, tuning: Tuning) -> Self {
        Self {
            map,
            state,
            settings,
            tuning,
            frames: 0,
            last_frame_at: None,
            fps: 0.0,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulate and paint one frame
    pub fn run_frame(
        &mut self,
        now: f64,
        input: &InputSnapshot,
        surface: &mut dyn DrawSurface,
        hud: &mut dyn HudSink,
    ) {
        let events = tick(&mut self.state, &self.map, input, &self.tuning);

        render_frame(surface, &self.map, &self.state, &self.settings);
        if self.settings.show_fps {
            self.track_fps(now);
            surface.draw_text(
                &format!("{:.0} FPS", self.fps),
                8.0,
                16.0,
                14.0,
                TextAlign::Left,
                Color::rgb(255, 255, 255),
            );
        }

        push_readouts(hud, &self.state);
        for event in events {
            if event == GameEvent::PlayerDefeated {
                hud.show_defeat_overlay();
            }
        }

        self.frames += 1;
    }

    fn track_fps(&mut self, now: f64) {
        if let Some(last) = self.last_frame_at {
            let dt = now - last;
            if dt > 0.0 {
                let instant = 1.0 / dt as f32;
                self.fps = if self.fps == 0.0 {
                    instant
                } else {
                    self.fps * 0.9 + instant * 0.1
                };
            }
        }
        self.last_frame_at = Some(now);
    }

    /// Run frames until the optional budget runs out. The host's input
    /// source is polled once per frame for a consistent snapshot.
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        input_source: &mut dyn FnMut() -> InputSnapshot,
        surface: &mut dyn DrawSurface,
        hud: &mut dyn HudSink,
        max_frames: Option<u64>,
    ) {
        loop {
            let now = clock.now();
            let input = input_source();
            self.run_frame(now, &input, surface, hud);
            if let Some(max) = max_frames
                && self.frames >= max
            {
                break;
            }
            clock.wait_for_next_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::hud::test_support::RecordingHud;
    use crate::renderer::surface::{DrawCmd, RecordingSurface};
    use crate::sim::state::EnemyKind;

    /// Fixed-step clock with no real waiting
    struct TestClock {
        t: f64,
    }

    impl Clock for TestClock {
        fn now(&mut self) -> f64 {
            self.t
        }

        fn wait_for_next_frame(&mut self) {
            self.t += 1.0 / 60.0;
        }
    }

    fn driver() -> FrameDriver {
        FrameDriver::new(
            WorldMap::built_in(),
            WorldState::new(1),
            Settings::default(),
            Tuning::default(),
        )
    }

    #[test]
    fn test_run_respects_frame_budget() {
        let mut driver = driver();
        let mut clock = TestClock { t: 0.0 };
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        let mut idle = || InputSnapshot::default();

        driver.run(&mut clock, &mut idle, &mut surface, &mut hud, Some(10));
        assert_eq!(driver.frames(), 10);
        assert_eq!(driver.state().tick_count, 10);
        assert_eq!(hud.health.len(), 10);
    }

    #[test]
    fn test_defeat_overlay_fires_once_rendering_continues() {
        let mut driver = driver();
        driver.state.player.hp = 0.5;
        let at_player = driver.state.player.pos;
        driver.state.spawn_enemy(at_player, EnemyKind::Pursuer);

        let mut clock = TestClock { t: 0.0 };
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        let mut idle = || InputSnapshot::default();

        driver.run(&mut clock, &mut idle, &mut surface, &mut hud, Some(20));
        assert_eq!(hud.defeat_overlays, 1);
        assert!(driver.state().player.is_defeated());
        // Every frame still painted and reported after defeat
        assert_eq!(hud.health.len(), 20);
        assert_eq!(*hud.health.last().unwrap(), 0);
    }

    #[test]
    fn test_fps_readout_drawn_when_enabled() {
        let settings = Settings {
            show_fps: true,
            ..Default::default()
        };
        let mut driver = FrameDriver::new(
            WorldMap::built_in(),
            WorldState::new(1),
            settings,
            Tuning::default(),
        );

        let mut clock = TestClock { t: 0.0 };
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        let mut idle = || InputSnapshot::default();

        driver.run(&mut clock, &mut idle, &mut surface, &mut hud, Some(3));
        let fps_texts = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { text, .. } if text.ends_with("FPS")))
            .count();
        assert_eq!(fps_texts, 3);
    }
}
