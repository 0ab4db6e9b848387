//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
#![deny(missing_docs)]
//! `gui-overlay` is the widget-container layer of a real-time renderer's GUI
//! overlay. It owns a registry of widgets addressed by generation-checked
//! handles, routes per-frame update and draw calls to them, tracks the single
//! modally-active widget, and maintains the screen-space transform and scissor
//! rectangle. Rendering and input stay behind trait seams so the crate remains
//! renderer- and platform-agnostic.

use std::sync::{Arc, RwLock};

mod name;
mod overlay;
mod registry;
mod transform;

pub use name::WidgetName;
pub use overlay::{GuiOverlay, OverlayCtx};
pub use registry::{Parent, WidgetHandle, WidgetRegistry};
pub use rs_math3d::*;
pub use transform::ScreenTransform;

use bitflags::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
/// Interaction state reported by a widget, ordered by escalation.
/// Anything beyond [`WidgetState::Idle`] counts towards the overlay focus.
pub enum WidgetState {
    /// No interaction in progress.
    #[default]
    Idle = 0,
    /// The pointer hovers the widget or it holds keyboard focus.
    Focus = 1,
    /// The widget is being actively manipulated (pressed/dragged/modal).
    Active = 2,
    /// The widget is winding down an interaction this frame.
    Deactivating = 3,
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Capability bits a widget reports to the overlay each frame.
    pub struct WidgetFlags : u32 {
        /// Widget is drawn and participates in the render passes.
        const VISIBLE = 2;
        /// Widget accepts interaction.
        const ENABLED = 1;
        /// Widget is inert and hidden.
        const NONE = 0;
    }
}

impl WidgetFlags {
    /// Returns `true` if the widget accepts interaction.
    pub fn is_enabled(&self) -> bool { self.intersects(Self::ENABLED) }
    /// Returns `true` if the widget is drawn.
    pub fn is_visible(&self) -> bool { self.intersects(Self::VISIBLE) }
    /// Returns `true` if no capability bit is set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Opaque handle identifying the device command list a render pass records
/// into. The overlay never inspects it; it is threaded through to the device.
pub struct CommandList(u32);

impl CommandList {
    /// Wraps a raw device command list identifier.
    pub fn new(value: u32) -> Self { Self(value) }

    /// Returns the raw identifier wrapped by this handle.
    pub fn raw(self) -> u32 { self.0 }
}

/// Trait implemented by the graphics device abstraction the overlay draws
/// through. Object-safe so widgets can receive it as `&mut dyn Device`.
pub trait Device {
    /// Returns the current screen dimensions in pixels.
    fn screen_size(&self) -> Dimensioni;
    /// Returns `true` once after the display resolution changed.
    fn resolution_changed(&mut self) -> bool;
    /// Binds an axis-aligned scissor rectangle for subsequent draws.
    fn bind_scissor(&mut self, rect: Recti, cmd: CommandList);
    /// Opens a named profiling/debug marker on the command list.
    fn event_begin(&mut self, name: &str, cmd: CommandList);
    /// Closes the innermost profiling/debug marker.
    fn event_end(&mut self, cmd: CommandList);
}

/// Thread-safe handle that shares ownership of a [`Device`].
pub struct DeviceHandle<D: Device> {
    handle: Arc<RwLock<D>>,
}

// seems there's a bug in #[derive(Clone)] as it's unable to induce that Arc is sufficient
impl<D: Device> Clone for DeviceHandle<D> {
    fn clone(&self) -> Self { Self { handle: self.handle.clone() } }
}

impl<D: Device> DeviceHandle<D> {
    /// Wraps a device inside an [`Arc<RwLock<...>>`] so it can be shared.
    pub fn new(device: D) -> Self { Self { handle: Arc::new(RwLock::new(device)) } }

    /// Executes the provided closure with a shared reference to the device.
    pub fn scope<Res, F: Fn(&D) -> Res>(&self, f: F) -> Res {
        match self.handle.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => {
                // Handle poisoned lock by using the data anyway
                // This is safe because we're just reading
                f(&*poisoned.into_inner())
            }
        }
    }

    /// Executes the provided closure with a mutable reference to the device.
    pub fn scope_mut<Res, F: FnMut(&mut D) -> Res>(&mut self, mut f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => {
                // Handle poisoned lock by using the data anyway
                // Clear the poison and continue
                f(&mut *poisoned.into_inner())
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Latest raw pointer sample published by the embedder's input pump.
/// Only x/y are meaningful to the overlay; z/w are carried for widgets that
/// want the full sample (pressure, wheel, ...).
pub struct PointerInput {
    sample: Vec4f,
}

impl PointerInput {
    /// Replaces the full four-component pointer sample.
    pub fn set_sample(&mut self, sample: Vec4f) { self.sample = sample; }

    /// Updates the pointer position, preserving the extra components.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sample.x = x;
        self.sample.y = y;
    }

    /// Returns the raw four-component sample.
    pub fn sample(&self) -> Vec4f { self.sample }

    /// Returns the 2D pointer position; extra sample components are ignored.
    pub fn position(&self) -> Vec2f { Vec2f::new(self.sample.x, self.sample.y) }
}

/// Trait implemented by widgets hosted in a [`GuiOverlay`].
///
/// The overlay treats widgets as opaque: layout, hit-testing, and per-widget
/// rendering all live behind this seam. Composite widgets update and draw
/// their own children; the overlay only drives top-level entries.
pub trait Widget {
    /// Returns the widget's name used for overlay lookups.
    fn name(&self) -> &str;
    /// Returns the widget's current capability bits.
    fn flags(&self) -> WidgetFlags;
    /// Returns the widget's current interaction state.
    fn state(&self) -> WidgetState;
    /// Advances the widget by `dt` seconds of frame time.
    fn update(&mut self, ctx: &OverlayCtx, dt: f32);
    /// Draws the widget into the provided command list.
    fn draw(&mut self, ctx: &OverlayCtx, device: &mut dyn Device, cmd: CommandList);

    /// Draws the widget's tooltip, if any. Runs after every draw pass so
    /// tooltips paint above modal widgets.
    fn draw_tooltip(&mut self, ctx: &OverlayCtx, device: &mut dyn Device, cmd: CommandList) {
        let _ = (ctx, device, cmd);
    }

    /// Lifecycle hook invoked when the widget gains modal focus.
    fn activate(&mut self) {}
    /// Lifecycle hook invoked when the widget loses modal focus.
    fn deactivate(&mut self) {}

    /// Returns `true` if the widget accepts interaction.
    fn is_enabled(&self) -> bool { self.flags().is_enabled() }
    /// Returns `true` if the widget is drawn.
    fn is_visible(&self) -> bool { self.flags().is_visible() }
}

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: f32, y: f32) -> Vec2f { Vec2f { x, y } }
