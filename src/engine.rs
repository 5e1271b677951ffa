//! Eye widget engine: the host-facing interaction contract
//!
//! Owns one [`EyeState`] and turns host calls (resize, pointer input, ticks)
//! into state changes, listener events and per-frame draw commands.

use std::sync::{Arc, Mutex, MutexGuard};

use glam::DVec2;
use serde::Serialize;

use crate::renderer::{DrawCommand, FrameOptions, Palette, build_frame};
use crate::settings::{DisplayMode, EyeSettings};
use crate::sim::{BlinkState, EyeState, GazeState, GeometryModel, tick};

/// Event reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EyeEvent {
    /// Pointer released
    Click,
    /// Pointer dragged while tracking
    Move { x: f64, y: f64 },
    /// Eye started or kept looking at a point
    Track { x: f64, y: f64 },
}

/// Receives engine events synchronously, during the call that caused them
pub trait EyeListener: Send {
    fn on_event(&mut self, event: EyeEvent);
}

impl<F: FnMut(EyeEvent) + Send> EyeListener for F {
    fn on_event(&mut self, event: EyeEvent) {
        (*self)(event)
    }
}

pub struct EyeWidgetEngine {
    state: EyeState,
    palette: Palette,
    options: FrameOptions,
    mode: DisplayMode,
    listener: Option<Box<dyn EyeListener>>,
}

impl std::fmt::Debug for EyeWidgetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EyeWidgetEngine")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for EyeWidgetEngine {
    fn default() -> Self {
        Self::new(&EyeSettings::default())
    }
}

impl EyeWidgetEngine {
    pub fn new(settings: &EyeSettings) -> Self {
        Self {
            state: EyeState::new(settings),
            palette: Palette::with_iris_color(settings.iris_color),
            options: FrameOptions {
                eyelashes: settings.eyelashes,
                tracking_overlay: settings.tracking_overlay,
            },
            mode: settings.display_mode,
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: impl EyeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn emit(&mut self, event: EyeEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_event(event);
        }
    }

    /// Widget bounds changed. Attaches the eye and restarts the blink cadence.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state.geometry.resize(width, height);
        if let Some(size) = self.mode.eye_size_override() {
            self.state.geometry.set_eye_size(size);
        }
        self.state.gaze.refit(&self.state.geometry);
        log::debug!(
            "Resized to {width}x{height}, eye radius {:.1}",
            self.state.geometry.eye_radius
        );
        self.state.attach();
        self.state.schedule_auto_blink();
    }

    /// Widget removed from its surface; nothing fires after this
    pub fn detach(&mut self) {
        self.state.detach();
    }

    /// Look at a point and report it
    pub fn track(&mut self, x: f64, y: f64) -> EyeEvent {
        self.state.gaze.track(DVec2::new(x, y), &self.state.geometry);
        let event = EyeEvent::Track { x, y };
        self.emit(event);
        event
    }

    pub fn stop_tracking(&mut self) {
        self.state.gaze.stop_tracking();
    }

    /// Advance one animation tick
    pub fn on_tick(&mut self, dt_ms: f64) {
        tick(&mut self.state, dt_ms);
    }

    /// Draw commands for the current state, back to front
    pub fn render(&self) -> Vec<DrawCommand> {
        build_frame(&self.state, &self.palette, self.options)
    }

    /// Pointer down. Consumed only inside the eye.
    pub fn handle_press(&mut self, x: f64, y: f64) -> bool {
        if !self.state.geometry.contains(DVec2::new(x, y)) {
            return false;
        }
        self.track(x, y);
        // Click feedback
        self.state.trigger_blink();
        true
    }

    /// Pointer moved. Only consumed while tracking.
    pub fn handle_move(&mut self, x: f64, y: f64) -> bool {
        if !self.state.gaze.is_tracking() {
            return false;
        }
        self.track(x, y);
        self.emit(EyeEvent::Move { x, y });
        true
    }

    /// Pointer up
    pub fn handle_release(&mut self) {
        self.stop_tracking();
        self.emit(EyeEvent::Click);
        self.state.trigger_blink();
    }

    /// Start a blink. Detached eyes don't blink.
    pub fn trigger_blink(&mut self) {
        self.state.trigger_blink();
    }

    pub fn set_eye_color(&mut self, argb: u32) {
        self.palette = self.palette.recolor_iris(argb);
    }

    pub fn set_eye_size(&mut self, size: f64) {
        self.state.geometry.set_eye_size(size);
        self.state.gaze.refit(&self.state.geometry);
    }

    pub fn set_eyelid_openness(&mut self, openness: f64) {
        if !self.state.blink.set_eyelid_openness(openness) {
            log::debug!("Eyelid openness ignored during blink");
        }
    }

    #[inline]
    pub fn geometry(&self) -> &GeometryModel {
        &self.state.geometry
    }

    #[inline]
    pub fn gaze(&self) -> &GazeState {
        &self.state.gaze
    }

    #[inline]
    pub fn blink(&self) -> &BlinkState {
        &self.state.blink
    }

    #[inline]
    pub fn state(&self) -> &EyeState {
        &self.state
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Engine behind a single lock, for hosts that call from several contexts.
///
/// Listeners run with the lock held and must not call back into the same
/// `SharedEngine`.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<EyeWidgetEngine>>,
}

impl SharedEngine {
    pub fn new(engine: EyeWidgetEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // State is consistent between calls, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, EyeWidgetEngine> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut EyeWidgetEngine) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.lock().resize(width, height);
    }

    pub fn on_tick(&self, dt_ms: f64) {
        self.lock().on_tick(dt_ms);
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        self.lock().render()
    }

    pub fn handle_press(&self, x: f64, y: f64) -> bool {
        self.lock().handle_press(x, y)
    }

    pub fn handle_move(&self, x: f64, y: f64) -> bool {
        self.lock().handle_move(x, y)
    }

    pub fn handle_release(&self) {
        self.lock().handle_release();
    }

    pub fn detach(&self) {
        self.lock().detach();
    }

    pub fn track(&self, x: f64, y: f64) -> EyeEvent {
        self.lock().track(x, y)
    }

    pub fn stop_tracking(&self) {
        self.lock().stop_tracking();
    }

    pub fn trigger_blink(&self) {
        self.lock().trigger_blink();
    }

    pub fn set_eye_color(&self, argb: u32) {
        self.lock().set_eye_color(argb);
    }

    pub fn set_eye_size(&self, size: f64) {
        self.lock().set_eye_size(size);
    }

    pub fn set_eyelid_openness(&self, openness: f64) {
        self.lock().set_eyelid_openness(openness);
    }
}
