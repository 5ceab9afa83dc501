//! Pointer-event reduction and per-frame animation for the overlay.
//!
//! [`EngineCore`] is the pure half: it owns the detection and all gesture
//! state, consumes pointer events and clock ticks, and reports what changed
//! as [`Action`]s. [`Engine`] wraps a core around the host's canvas and
//! image, feeding it real layout measurements and wall-clock time.

use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::animate::Transition;
use crate::consts::{GLOW_RATE, VELOCITY_SCALE};
use crate::detection::{Detection, NormalizedRect};
use crate::input::{DragState, Velocity};
use crate::render;
use crate::score;
use crate::surface::{Point, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Something the host should react to, produced by the event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The committed placement changed; carries the rescored confidence.
    Updated {
        id: Uuid,
        rect: NormalizedRect,
        confidence: u8,
    },
    /// The pointer cursor over the canvas should change.
    SetCursor(String),
}

/// Pure gesture and animation state for one detection overlay.
#[derive(Debug, Clone)]
pub struct EngineCore {
    /// The detection being placed.
    pub detection: Detection,
    /// Canvas geometry used for coordinate mapping.
    pub surface: Surface,
    /// Current pointer gesture.
    pub drag: DragState,
    /// Eased move in flight, if any.
    pub transition: Option<Transition>,
    /// Placement drawn on the most recent frame; transitions start here.
    last_rendered: NormalizedRect,
    /// Clock origin for the glow pulse, set on the first tick.
    glow_origin_ms: Option<f64>,
}

impl EngineCore {
    // --- Construction ---

    #[must_use]
    pub fn new(detection: Detection) -> Self {
        let last_rendered = detection.rect;
        Self {
            detection,
            surface: Surface::default(),
            drag: DragState::default(),
            transition: None,
            last_rendered,
            glow_origin_ms: None,
        }
    }

    /// Record the displayed bounding box measured by the host.
    pub fn set_layout(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.surface.set_layout(left, top, width, height);
    }

    /// Record the backing resolution once the image has loaded.
    pub fn set_backing(&mut self, width: f64, height: f64) {
        self.surface.set_backing(width, height);
    }

    // --- Pointer events ---

    /// Pointer pressed at a screen position.
    ///
    /// A press on the box grabs it and cancels any transition in flight.
    /// A press anywhere stops leftover momentum. Everything is ignored
    /// until the backing resolution is known.
    pub fn on_pointer_down(&mut self, screen: Point) -> Vec<Action> {
        if !self.surface.ready() {
            return Vec::new();
        }
        let norm = self.surface.screen_to_norm(screen);
        if !self.detection.rect.contains(norm) {
            if matches!(self.drag, DragState::Momentum { .. }) {
                self.drag = DragState::Idle;
            }
            return Vec::new();
        }
        log::debug!("grab at ({:.3}, {:.3})", norm.x, norm.y);
        self.transition = None;
        self.drag = DragState::Dragging {
            grab_offset: Point::new(norm.x - self.detection.rect.x, norm.y - self.detection.rect.y),
            last_screen: screen,
            velocity: Velocity::default(),
        };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Pointer moved. Only matters mid-drag: the box follows under the
    /// grab point, and the move refreshes the sampled velocity.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let DragState::Dragging { grab_offset, last_screen, .. } = self.drag else {
            return Vec::new();
        };
        let velocity = Velocity {
            dx: (screen.x - last_screen.x) * VELOCITY_SCALE,
            dy: (screen.y - last_screen.y) * VELOCITY_SCALE,
        };
        self.drag = DragState::Dragging { grab_offset, last_screen: screen, velocity };
        let norm = self.surface.screen_to_norm(screen);
        let rect = self.detection.rect.placed_at(norm.x - grab_offset.x, norm.y - grab_offset.y);
        self.commit(rect)
    }

    /// Pointer released. Speed left in the gesture turns into momentum
    /// plus an eased settle; a still release just drops the box in place.
    pub fn on_pointer_up(&mut self, now_ms: f64) -> Vec<Action> {
        let DragState::Dragging { velocity, .. } = self.drag else {
            return Vec::new();
        };
        if velocity.is_moving() {
            self.drag = DragState::Momentum { velocity };
            self.transition =
                Some(Transition::new(now_ms, self.last_rendered, self.detection.rect));
            log::debug!("release with speed ({:.3}, {:.3})", velocity.dx, velocity.dy);
        } else {
            self.drag = DragState::Idle;
            log::debug!("release at rest");
        }
        vec![Action::SetCursor("grab".to_owned())]
    }

    /// Pointer left the canvas; treated as a release.
    pub fn on_pointer_leave(&mut self, now_ms: f64) -> Vec<Action> {
        self.on_pointer_up(now_ms)
    }

    // --- Frame clock ---

    /// Advance animation state to `now_ms` and return what changed.
    ///
    /// The displayed placement advances along the in-flight transition
    /// first; a coasting frame then integrates momentum at its current
    /// speed and decays it, superseding the transition so the eased
    /// follow restarts from where the box was last drawn.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        if self.glow_origin_ms.is_none() {
            self.glow_origin_ms = Some(now_ms);
        }
        self.last_rendered = self.displayed_rect_at(now_ms);
        let mut actions = Vec::new();
        if let DragState::Momentum { velocity } = self.drag {
            let rect = self.detection.rect.placed_at(
                self.detection.rect.x + velocity.dx / self.surface.backing_w,
                self.detection.rect.y + velocity.dy / self.surface.backing_h,
            );
            actions = self.commit(rect);
            self.transition = Some(Transition::new(now_ms, self.last_rendered, rect));
            let slowed = velocity.decayed();
            if slowed.is_moving() {
                self.drag = DragState::Momentum { velocity: slowed };
            } else {
                self.drag = DragState::Idle;
                log::debug!("momentum spent");
            }
        }
        if let Some(transition) = self.transition
            && transition.finished(now_ms)
        {
            self.transition = None;
        }
        actions
    }

    // --- Queries ---

    /// The placement to draw at `now_ms`: the transition sample while one
    /// is in flight, the committed placement otherwise.
    #[must_use]
    pub fn displayed_rect_at(&self, now_ms: f64) -> NormalizedRect {
        self.transition.map_or(self.detection.rect, |t| t.sample(now_ms))
    }

    /// The placement drawn on the most recent frame.
    #[must_use]
    pub fn displayed_rect(&self) -> NormalizedRect {
        self.last_rendered
    }

    /// Glow pulse level in [0, 1] at `now_ms`. Phase starts at the first
    /// tick, so the pulse always opens at its midpoint.
    #[must_use]
    pub fn glow(&self, now_ms: f64) -> f64 {
        let origin = self.glow_origin_ms.unwrap_or(now_ms);
        ((now_ms - origin) * GLOW_RATE).sin() * 0.5 + 0.5
    }

    /// Confidence for the committed placement.
    #[must_use]
    pub fn confidence(&self) -> u8 {
        score::confidence(self.detection.rect, self.surface.backing_w, self.surface.backing_h)
    }

    /// Confidence for the placement currently on screen. Mid-transition
    /// this can differ from the committed score; the label tracks it.
    #[must_use]
    pub fn displayed_confidence(&self) -> u8 {
        score::confidence(self.last_rendered, self.surface.backing_w, self.surface.backing_h)
    }

    /// Store a new committed placement and rescore it.
    fn commit(&mut self, rect: NormalizedRect) -> Vec<Action> {
        self.detection.rect = rect;
        vec![Action::Updated { id: self.detection.id, rect, confidence: self.confidence() }]
    }
}

/// An [`EngineCore`] wired to the host's canvas and image.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    // --- Construction ---

    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, detection: Detection) -> Self {
        let engine = Self { canvas, image: None, core: EngineCore::new(detection) };
        engine.apply_cursor("grab");
        engine
    }

    /// Adopt the loaded image. The canvas backing store is resized to the
    /// image's natural dimensions so drawing happens at full resolution.
    pub fn set_image(&mut self, image: HtmlImageElement) {
        let width = f64::from(image.natural_width());
        let height = f64::from(image.natural_height());
        self.canvas.set_width(image.natural_width());
        self.canvas.set_height(image.natural_height());
        self.core.set_backing(width, height);
        log::debug!("image ready at {width}x{height}");
        self.image = Some(image);
    }

    // --- Pointer events ---

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        self.sync_layout();
        let actions = self.core.on_pointer_down(Point::new(client_x, client_y));
        self.apply_cursor_actions(&actions);
        actions
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        self.sync_layout();
        self.core.on_pointer_move(Point::new(client_x, client_y))
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_up(js_sys::Date::now());
        self.apply_cursor_actions(&actions);
        actions
    }

    pub fn pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_leave(js_sys::Date::now());
        self.apply_cursor_actions(&actions);
        actions
    }

    // --- Frame clock ---

    /// Advance the core one frame and redraw.
    ///
    /// Nothing is drawn until the image has both arrived and finished
    /// decoding; the actions still flow so host state stays current.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
    pub fn frame(&mut self, now_ms: f64) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.tick(now_ms);
        let Some(image) = self.image.as_ref().filter(|image| image.complete()) else {
            return Ok(actions);
        };
        let ctx = self.context_2d()?;
        render::draw(
            &ctx,
            image,
            &self.core.detection,
            self.core.displayed_rect(),
            self.core.displayed_confidence(),
            self.core.glow(now_ms),
        )?;
        Ok(actions)
    }

    // --- Host plumbing ---

    /// Re-measure the displayed bounding box. Layout can shift between
    /// events, so this runs before every pointer mapping.
    fn sync_layout(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_layout(rect.left(), rect.top(), rect.width(), rect.height());
    }

    fn apply_cursor_actions(&self, actions: &[Action]) {
        for action in actions {
            if let Action::SetCursor(cursor) = action {
                self.apply_cursor(cursor);
            }
        }
    }

    fn apply_cursor(&self, cursor: &str) {
        if self.canvas.style().set_property("cursor", cursor).is_err() {
            log::warn!("could not set cursor to {cursor}");
        }
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}
