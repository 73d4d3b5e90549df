use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::LevelFilter;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};
use structopt::StructOpt;

use crate::camera::{ray_from_screen, Camera, Movement};
use crate::parsing::{load_json, SceneData};
use crate::render::{render, save_png, Film};
use crate::scene::Scene;
use crate::{logging, Error};

const SCREENSHOT_PATH: &str = "screenshot.png";
const FRAME_TIME: Duration = Duration::from_micros(16600);

#[derive(Debug, StructOpt)]
pub struct Opt {
    /// JSON scene description. The demo's built-in scene is used when absent.
    #[structopt(long, parse(from_os_str))]
    pub scene: Option<PathBuf>,

    #[structopt(long, default_value = "640")]
    pub width: usize,

    #[structopt(long, default_value = "480")]
    pub height: usize,

    /// Render threads. Defaults to the number of CPUs.
    #[structopt(long)]
    pub threads: Option<usize>,

    #[structopt(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Render a single frame to this PNG and exit without opening a window.
    #[structopt(long, parse(from_os_str))]
    pub headless: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Demo {
    Sphere,
    Cube,
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::Sphere => "Pick Object using Ray Tracing",
            Demo::Cube => "Pick Rotating Cube using Ray Tracing",
        }
    }

    pub fn builtin_scene(&self) -> SceneData {
        match self {
            Demo::Sphere => SceneData::sphere_demo(),
            Demo::Cube => SceneData::cube_demo(),
        }
    }
}

/// Owned state of a running demo.
pub struct App {
    pub scene: Scene,
    pub camera: Camera,
    pub movable_camera: bool,
    pub film: Film<u32>,
}

impl App {
    pub fn new(data: SceneData, width: usize, height: usize) -> Result<App, Error> {
        let movable_camera = data.movable_camera;
        let (scene, camera) = data.build()?;
        Ok(App {
            scene,
            camera,
            movable_camera,
            film: Film::new(width.max(1), height.max(1), 0u32),
        })
    }

    /// Picks at window pixel `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) -> Option<usize> {
        let ray = ray_from_screen(x, y, self.film.viewport(), &self.camera);
        debug!("click at ({}, {}) cast {:?}", x, y, ray);
        self.scene.pick(ray)
    }

    /// Applies held movement keys and advances the scene by `dt` seconds.
    pub fn step(&mut self, movements: &[Movement], turn: (f32, f32), dt: f32) {
        if self.movable_camera {
            for &movement in movements {
                self.camera.advance(movement, dt);
            }
            self.camera.turn(turn.0, turn.1, dt);
        }
        self.scene.update(dt);
    }

    pub fn draw(&mut self) {
        render(&self.scene, &self.camera, &mut self.film);
    }
}

const MOVEMENT_KEYS: [(Key, Movement); 6] = [
    (Key::W, Movement::Forward),
    (Key::S, Movement::Backward),
    (Key::A, Movement::Left),
    (Key::D, Movement::Right),
    (Key::Space, Movement::Up),
    (Key::LeftShift, Movement::Down),
];

fn held_movements(window: &Window) -> Vec<Movement> {
    MOVEMENT_KEYS
        .iter()
        .filter(|(key, _)| window.is_key_down(*key))
        .map(|(_, movement)| *movement)
        .collect()
}

fn held_turn(window: &Window) -> (f32, f32) {
    let axis = |neg: Key, pos: Key| {
        (window.is_key_down(pos) as i32 - window.is_key_down(neg) as i32) as f32
    };
    (axis(Key::Left, Key::Right), axis(Key::Down, Key::Up))
}

fn load_scene(demo: Demo, path: Option<&PathBuf>) -> Result<SceneData, Error> {
    match path {
        Some(path) => {
            let data: SceneData = load_json(path)?;
            info!("loaded scene {} ({} primitives)", path.display(), data.primitives.len());
            Ok(data)
        }
        None => Ok(demo.builtin_scene()),
    }
}

pub fn run(demo: Demo, opt: Opt) -> Result<(), Error> {
    logging::init(opt.log_level)?;

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("{:?} demo on {} render threads", demo, threads);

    let data = load_scene(demo, opt.scene.as_ref())?;
    let mut app = App::new(data, opt.width, opt.height)?;

    if let Some(path) = opt.headless {
        app.draw();
        return save_png(&app.film, path);
    }

    let mut window = Window::new(
        demo.title(),
        app.film.width,
        app.film.height,
        WindowOptions {
            resize: true,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(FRAME_TIME));

    let mut was_down = false;
    let mut last_frame = Instant::now();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        let (width, height) = window.get_size();
        if app.film.resize(width.max(1), height.max(1), 0u32) {
            debug!("resized to {}x{}", app.film.width, app.film.height);
        }

        let is_down = window.get_mouse_down(MouseButton::Left);
        if is_down && !was_down {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
                app.click(x, y);
            }
        }
        was_down = is_down;

        app.step(&held_movements(&window), held_turn(&window), dt);
        app.draw();

        if window.is_key_pressed(Key::P, KeyRepeat::No) {
            if let Err(e) = save_png(&app.film, SCREENSHOT_PATH) {
                warn!("screenshot failed: {}", e);
            }
        }

        window.update_with_buffer(&app.film.buffer, app.film.width, app.film.height)?;
    }
    Ok(())
}
