//! Terrain flyover viewer.
//!
//! Controls  W/S = forward/back  A/D = strafe  ←/→ = turn
//!           ↑/↓ = pitch  Space/Shift = rise/descend  Esc = quit
//!
//! ```bash
//! cargo run --release -- maps/heightmap.gif maps/colourmap.gif
//! cargo run --release            # procedural island instead
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};

use voxelscape_rs::{
    assets,
    renderer::{FrameBuffer, FrameRenderer},
    sim::{ControlScheme, Controls, InputTranslator},
    world::Camera,
};

#[derive(Parser, Debug)]
#[command(about = "Voxel-space terrain flyover")]
struct Args {
    /// Grayscale heightmap image; omit both paths for a procedural island
    heightmap: Option<PathBuf>,

    /// Colormap image of the same dimensions
    colormap: Option<PathBuf>,

    /// Window zoom factor (1, 2 or 4)
    #[arg(long, default_value_t = 2)]
    zoom: u32,

    /// Classic control variant: no strafing, no pitch
    #[arg(long)]
    classic: bool,

    /// Far-plane distance override
    #[arg(long)]
    far: Option<f32>,

    /// Procedural map size (cells per side)
    #[arg(long, default_value_t = 1024)]
    size: usize,

    /// Procedural terrain seed
    #[arg(long, default_value_t = 3)]
    seed: u32,
}

fn held_controls(win: &Window) -> Controls {
    let mut held = Controls::empty();
    let mut key = |k: Key, c: Controls| {
        if win.is_key_down(k) {
            held |= c;
        }
    };
    key(Key::W, Controls::FORWARD);
    key(Key::S, Controls::BACK);
    key(Key::A, Controls::STRAFE_LEFT);
    key(Key::D, Controls::STRAFE_RIGHT);
    key(Key::Left, Controls::TURN_LEFT);
    key(Key::Right, Controls::TURN_RIGHT);
    key(Key::Up, Controls::PITCH_UP);
    key(Key::Down, Controls::PITCH_DOWN);
    key(Key::Space, Controls::RISE);
    key(Key::LeftShift, Controls::DESCEND);
    key(Key::RightShift, Controls::DESCEND);
    held
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // ─────────── assets ────────────
    let (maps, palette) = match (&args.heightmap, &args.colormap) {
        (Some(h), Some(c)) => assets::load_terrain(h, c)?,
        (None, None) => assets::procedural_terrain(args.size, args.seed)?,
        _ => bail!("heightmap and colormap must be given together"),
    };
    log::info!("terrain loaded: {}x{} cells", maps.width(), maps.depth());

    // ─────────── camera & input ────────────
    let mut camera = Camera::classic_start();
    if let Some(far) = args.far {
        camera.far_plane = far;
    }
    camera.validate()?;

    let scheme = if args.classic {
        ControlScheme::Classic
    } else {
        ControlScheme::Extended
    };
    let translator = InputTranslator::with_scheme(scheme);

    // ─────────── renderer & window ────────────
    let renderer = FrameRenderer::default();
    let mut fb = FrameBuffer::new(renderer.width, renderer.height);
    let mut pixels = vec![0u32; renderer.width * renderer.height];

    let scale = match args.zoom {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        z => bail!("unsupported zoom {z}, pick 1, 2 or 4"),
    };
    let mut win = Window::new(
        "Voxel Space",
        renderer.width,
        renderer.height,
        WindowOptions {
            scale,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        translator.apply(held_controls(&win), &mut camera);

        let t0 = Instant::now();
        renderer.render_frame(&camera, &maps, &mut fb);
        acc_time += t0.elapsed();
        acc_frames += 1;

        palette.expand(fb.indices(), &mut pixels);
        win.update_with_buffer(&pixels, renderer.width, renderer.height)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
