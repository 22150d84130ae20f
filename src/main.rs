//! Corridor Crawl entry point
//!
//! No presentation backend is bundled; hosts embed the library and supply
//! their own `DrawSurface`/`HudSink`. Running the binary exercises the
//! full loop headless for a few seconds as a smoke run.

use corridor_crawl::driver::{FrameDriver, SystemClock};
use corridor_crawl::input::InputSnapshot;
use corridor_crawl::renderer::{Color, DrawSurface, HudSink, TextAlign};
use corridor_crawl::sim::{WorldMap, WorldState};
use corridor_crawl::{Settings, Tuning};

/// Discards draw commands
struct NullSurface;

impl DrawSurface for NullSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
    fn draw_line(&mut self, _x0: f32, _y0: f32, _x1: f32, _y1: f32, _color: Color) {}
    fn draw_text(
        &mut self,
        _text: &str,
        _x: f32,
        _y: f32,
        _size: f32,
        _align: TextAlign,
        _color: Color,
    ) {
    }
}

/// Mirrors the HUD fields into the log
#[derive(Default)]
struct LogHud {
    health: u32,
    enemies: usize,
}

impl HudSink for LogHud {
    fn set_health(&mut self, hp: u32) {
        self.health = hp;
    }

    fn set_enemy_count(&mut self, count: usize) {
        self.enemies = count;
    }

    fn show_defeat_overlay(&mut self) {
        log::info!("defeat overlay shown");
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load("settings.json");
    let tuning = Tuning::load("tuning.json");
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Corridor Crawl starting (seed {seed})");
    log::info!("No presentation backend bundled; running a 5 second headless demo");

    let mut driver = FrameDriver::new(
        WorldMap::built_in(),
        WorldState::new(seed),
        settings,
        tuning,
    );
    let mut clock = SystemClock::new(60);
    let mut surface = NullSurface;
    let mut hud = LogHud::default();

    // Scripted input: press forward, sweep right in bursts, attack once a second
    let mut frame = 0u64;
    let mut script = || {
        frame += 1;
        InputSnapshot {
            move_forward: true,
            turn_right: frame % 90 < 20,
            attack: frame % 60 == 0,
            ..Default::default()
        }
    };

    driver.run(&mut clock, &mut script, &mut surface, &mut hud, Some(300));

    log::info!(
        "demo finished after {} frames: hp {}, {} enemies",
        driver.frames(),
        hud.health,
        hud.enemies
    );
}
