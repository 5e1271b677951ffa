//! Eye Float headless driver
//!
//! Plays the host role: feeds a scripted pointer gesture and variable-rate
//! frames into the engine with a fixed-tick accumulator, logs events, and
//! prints the last frame's draw commands as JSON.
//!
//! Usage: eye-float [--settings FILE] [--mode floating|smart] [--seconds N] [--seed N]

use eye_float::consts::{MAX_SUBSTEPS, TICK_MS};
use eye_float::{DisplayMode, EyeEvent, EyeSettings, EyeWidgetEngine};

const WIDGET_SIZE: (f64, f64) = (320.0, 320.0);

/// Host frame intervals (ms), cycled to mimic an uneven display clock
const FRAME_INTERVALS: [f64; 4] = [16.7, 15.9, 18.2, 16.4];

/// Command-line options
struct Options {
    settings: EyeSettings,
    seconds: f64,
}

fn parse_args() -> Options {
    let mut settings = None;
    let mut mode = None;
    let mut seed = None;
    let mut seconds = 4.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => settings = args.next().map(EyeSettings::load),
            "--mode" => match args.next().as_deref().and_then(DisplayMode::parse) {
                Some(m) => mode = Some(m),
                None => log::warn!("Unknown display mode, keeping settings value"),
            },
            "--seconds" => match args.next().and_then(|s| s.parse().ok()) {
                Some(s) => seconds = s,
                None => log::warn!("Bad --seconds value, using {seconds}"),
            },
            "--seed" => seed = args.next().and_then(|s| s.parse().ok()),
            other => log::warn!("Ignoring argument {other}"),
        }
    }

    let mut settings = settings.unwrap_or_default();
    if let Some(mode) = mode {
        settings.display_mode = mode;
    }
    if seed.is_some() {
        settings.seed = seed;
    }
    Options { settings, seconds }
}

/// Host loop state
struct Host {
    engine: EyeWidgetEngine,
    accumulator: f64,
    ticks: u64,
    pressed: bool,
}

impl Host {
    fn new(settings: &EyeSettings) -> Self {
        let mut engine = EyeWidgetEngine::new(settings);
        engine.set_listener(|event: EyeEvent| match event {
            EyeEvent::Click => log::info!("click"),
            EyeEvent::Move { x, y } => log::debug!("move ({x:.1}, {y:.1})"),
            EyeEvent::Track { x, y } => log::debug!("track ({x:.1}, {y:.1})"),
        });
        engine.resize(WIDGET_SIZE.0, WIDGET_SIZE.1);
        Self {
            engine,
            accumulator: 0.0,
            ticks: 0,
            pressed: false,
        }
    }

    /// Scripted gesture: press the eye at 0.5 s, circle around it, release at 1.5 s
    fn pointer(&mut self, time_ms: f64) {
        let center = self.engine.geometry().center;
        if time_ms >= 500.0 && time_ms < 1500.0 {
            if !self.pressed {
                self.pressed = self.engine.handle_press(center.x + 10.0, center.y);
                return;
            }
            let angle = (time_ms - 500.0) / 1000.0 * std::f64::consts::TAU;
            let radius = self.engine.geometry().eye_radius * 2.0;
            self.engine
                .handle_move(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        } else if self.pressed && time_ms >= 1500.0 {
            self.engine.handle_release();
            self.pressed = false;
        }
    }

    /// Run fixed ticks for one host frame
    fn frame(&mut self, frame_ms: f64) {
        self.accumulator += frame_ms.min(100.0);

        let mut substeps = 0;
        while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.engine.on_tick(TICK_MS);
            self.accumulator -= TICK_MS;
            self.ticks += 1;
            substeps += 1;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args();
    log::info!(
        "Running {} mode for {:.1} s",
        options.settings.display_mode.as_str(),
        options.seconds
    );

    let mut host = Host::new(&options.settings);
    let mut time_ms = 0.0;
    let mut blinks = 0u32;
    let mut was_blinking = false;

    for interval in FRAME_INTERVALS.iter().cycle() {
        if time_ms >= options.seconds * 1000.0 {
            break;
        }
        host.pointer(time_ms);
        host.frame(*interval);
        time_ms += interval;

        let blinking = host.engine.blink().is_blinking();
        if blinking && !was_blinking {
            blinks += 1;
        }
        was_blinking = blinking;
    }

    let frame = host.engine.render();
    log::info!(
        "{} ticks, {} blinks, {} draw commands in last frame",
        host.ticks,
        blinks,
        frame.len()
    );
    host.engine.detach();

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize frame: {e}"),
    }
}
