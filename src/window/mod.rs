//! Floating window controller
//!
//! Geometry of the terminal window and the pointer interactions that move
//! and resize it. Exactly one of idle, dragging or resizing is active at a
//! time, and dragging or resizing can only start from idle. Pointer-down
//! hands out a [`PointerCapture`]; the interaction ends on pointer-up or as
//! soon as that capture is dropped, whichever comes first.

use std::cell::Cell;
use std::ops::Sub;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;

/// Pointer position in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Window position and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Size of the area the window floats in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Parts of the window that react to pointer-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    /// Title bar; starts a drag
    TitleBar,
    /// Bottom-right corner; starts a resize
    ResizeCorner,
}

/// Current pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Pointer position minus window origin, captured at drag start
    Dragging { offset: Point },
    Resizing,
}

#[derive(Debug, Clone, Copy, Default)]
struct CaptureState {
    generation: u64,
    interaction: Interaction,
}

/// Scoped pointer capture
///
/// Returned by pointer-down. Dropping it ends the interaction it started;
/// dropping a capture that was already superseded by a newer one does
/// nothing.
#[derive(Debug)]
#[must_use = "dropping the capture ends the interaction immediately"]
pub struct PointerCapture {
    generation: u64,
    state: Weak<Cell<CaptureState>>,
}

impl PointerCapture {
    /// Whether this capture still drives the window
    pub fn is_active(&self) -> bool {
        self.state.upgrade().is_some_and(|state| {
            let current = state.get();
            current.generation == self.generation && current.interaction != Interaction::Idle
        })
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let current = state.get();
        if current.generation == self.generation && current.interaction != Interaction::Idle {
            trace!("Pointer capture dropped, ending {:?}", current.interaction);
            state.set(CaptureState {
                interaction: Interaction::Idle,
                ..current
            });
        }
    }
}

/// Geometry and interaction state of the floating terminal window
#[derive(Debug)]
pub struct WindowController {
    config: WindowConfig,
    viewport: Viewport,
    geometry: Geometry,
    maximized: bool,
    capture: Rc<Cell<CaptureState>>,
}

impl Default for WindowController {
    fn default() -> Self {
        Self::new(WindowConfig::default(), Viewport::default())
    }
}

impl WindowController {
    /// Create a window at its default geometry
    pub fn new(config: WindowConfig, viewport: Viewport) -> Self {
        let geometry = default_geometry(&config, viewport);
        Self {
            config,
            viewport,
            geometry,
            maximized: false,
            capture: Rc::new(Cell::new(CaptureState::default())),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn interaction(&self) -> Interaction {
        self.capture.get().interaction
    }

    /// Start dragging or resizing depending on which handle was pressed
    ///
    /// Returns `None`, leaving the running interaction untouched, unless the
    /// window is idle.
    #[must_use = "dropping the capture ends the interaction immediately"]
    pub fn pointer_down(&mut self, handle: Handle, pointer: Point) -> Option<PointerCapture> {
        let current = self.interaction();
        if current != Interaction::Idle {
            debug!("Pointer down on {:?} ignored while {:?}", handle, current);
            return None;
        }
        let interaction = match handle {
            Handle::TitleBar => Interaction::Dragging {
                offset: pointer - self.geometry.origin(),
            },
            Handle::ResizeCorner => Interaction::Resizing,
        };
        debug!("Pointer down on {:?} at ({}, {})", handle, pointer.x, pointer.y);
        Some(self.capture(interaction))
    }

    #[must_use = "dropping the capture ends the interaction immediately"]
    pub fn begin_drag(&mut self, pointer: Point) -> Option<PointerCapture> {
        self.pointer_down(Handle::TitleBar, pointer)
    }

    #[must_use = "dropping the capture ends the interaction immediately"]
    pub fn begin_resize(&mut self, pointer: Point) -> Option<PointerCapture> {
        self.pointer_down(Handle::ResizeCorner, pointer)
    }

    fn capture(&mut self, interaction: Interaction) -> PointerCapture {
        let generation = self.capture.get().generation.wrapping_add(1);
        self.capture.set(CaptureState {
            generation,
            interaction,
        });
        PointerCapture {
            generation,
            state: Rc::downgrade(&self.capture),
        }
    }

    /// Follow the pointer; returns whether the geometry changed
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let before = self.geometry;
        match self.interaction() {
            Interaction::Idle => return false,
            Interaction::Dragging { offset } => {
                self.geometry.x = pointer.x - offset.x;
                self.geometry.y = pointer.y - offset.y;
            }
            Interaction::Resizing => {
                self.geometry.width = (pointer.x - self.geometry.x).max(self.config.min_width);
                self.geometry.height = (pointer.y - self.geometry.y).max(self.config.min_height);
            }
        }
        self.geometry != before
    }

    /// End any interaction, wherever the pointer is
    pub fn pointer_up(&mut self) {
        let current = self.capture.get();
        if current.interaction != Interaction::Idle {
            debug!("Pointer released, ending {:?}", current.interaction);
        }
        self.capture.set(CaptureState {
            interaction: Interaction::Idle,
            ..current
        });
    }

    /// Snap to the inset geometry, or back to the default geometry
    ///
    /// Restoring never returns to where the window was before maximizing.
    /// On a viewport too small for the inset the maximized window keeps its
    /// inset origin but is never smaller than the minimum size.
    pub fn toggle_maximize(&mut self) {
        self.geometry = if self.maximized {
            default_geometry(&self.config, self.viewport)
        } else {
            self.maximized_geometry()
        };
        self.maximized = !self.maximized;
        debug!("Window maximized: {}", self.maximized);
    }

    fn maximized_geometry(&self) -> Geometry {
        let inset = self.config.maximize_inset;
        Geometry {
            x: inset,
            y: inset,
            width: (self.viewport.width - 2.0 * inset).max(self.config.min_width),
            height: (self.viewport.height - 2.0 * inset).max(self.config.min_height),
        }
    }

    /// Record a new viewport size; the current geometry is kept
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

fn default_geometry(config: &WindowConfig, viewport: Viewport) -> Geometry {
    Geometry {
        x: viewport.width / 4.0,
        y: viewport.height / 4.0,
        width: config.default_width,
        height: config.default_height,
    }
}
