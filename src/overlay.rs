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
use std::{cell::RefCell, rc::Rc};

use crate::{
    CommandList, Device, DeviceHandle, Parent, PointerInput, Recti, ScreenTransform, Vec2f, Widget, WidgetHandle, WidgetName, WidgetRegistry, WidgetState,
    rect,
};

#[derive(Copy, Clone)]
/// Read-only snapshot handed to widgets during update and draw calls.
/// Widgets query the pointer, the scissor, and the modal-focus state through
/// this instead of seeing the concrete overlay type.
pub struct OverlayCtx {
    pointer_pos: Vec2f,
    scissor: Recti,
    active: Option<WidgetHandle>,
}

impl OverlayCtx {
    /// Returns the pointer position sampled at the start of the frame.
    pub fn pointer_pos(&self) -> Vec2f { self.pointer_pos }

    /// Returns the scissor rectangle bound around widget draws.
    pub fn scissor_rect(&self) -> Recti { self.scissor }

    /// Returns the widget currently holding modal focus, if any.
    pub fn active_widget(&self) -> Option<WidgetHandle> { self.active }

    /// Returns `true` iff modal focus is held by some *other* widget.
    /// Widgets use this to self-disable input handling while a sibling is
    /// modal.
    pub fn is_widget_disabled(&self, widget: WidgetHandle) -> bool {
        match self.active {
            Some(active) => active != widget,
            None => false,
        }
    }
}

/// Overlay container driving a set of widgets over a [`Device`].
///
/// The embedder calls [`GuiOverlay::update`] then [`GuiOverlay::render`] once
/// per frame from its main loop, never overlapped; the overlay performs no
/// I/O and never blocks. Widgets live inside the overlay's registry and are
/// addressed by generation-checked handles, so a handle held across a removal
/// goes stale instead of dangling.
pub struct GuiOverlay<D: Device> {
    device: DeviceHandle<D>,
    pointer: Rc<RefCell<PointerInput>>,
    registry: WidgetRegistry,
    order: Vec<WidgetHandle>,
    active: Option<WidgetHandle>,
    visible: bool,
    focus: bool,
    pointer_pos: Vec2f,
    transform: ScreenTransform,
    scissor: Recti,
}

impl<D: Device> GuiOverlay<D> {
    /// Creates an overlay over the device, sized to the current screen.
    pub fn new(device: DeviceHandle<D>, pointer: Rc<RefCell<PointerInput>>) -> Self {
        let dim = device.scope(|dev| dev.screen_size());
        Self {
            device,
            pointer,
            registry: WidgetRegistry::new(),
            order: Vec::default(),
            active: None,
            visible: true,
            focus: false,
            pointer_pos: Vec2f::default(),
            transform: ScreenTransform::new(dim),
            scissor: rect(0, 0, dim.width, dim.height),
        }
    }

    /// Advances the overlay by one frame. No-op while invisible.
    pub fn update(&mut self, dt: f32) {
        if !self.visible {
            return;
        }

        let mut device = self.device.clone();
        if device.scope_mut(|dev| dev.resolution_changed()) {
            let dim = device.scope(|dev| dev.screen_size());
            self.transform.set_dimensions(dim);
        }

        self.pointer_pos = self.pointer.borrow().position();

        // a widget must never stay active while it is not interactable
        if let Some(active) = self.active {
            match self.registry.get(active) {
                None => self.active = None,
                Some(widget) if !widget.is_enabled() || !widget.is_visible() => self.deactivate_widget(active),
                Some(_) => (),
            }
        }

        let ctx = self.ctx();
        for i in 0..self.order.len() {
            let handle = self.order[i];
            if self.registry.parent(handle) != Parent::Overlay {
                // contained child widgets are updated by their owning widget
                continue;
            }
            if let Some(widget) = self.registry.get_mut(handle) {
                widget.update(&ctx, dt);
            }
        }

        self.focus = self.order.iter().any(|&handle| {
            self.registry.parent(handle) == Parent::Overlay
                && self
                    .registry
                    .get(handle)
                    .is_some_and(|widget| widget.is_enabled() && widget.is_visible() && widget.state() > WidgetState::Idle)
        });

        let dim = device.scope(|dev| dev.screen_size());
        self.scissor = rect(0, 0, dim.width, dim.height);
    }

    /// Draws the overlay into the command list. No-op while invisible.
    ///
    /// Draw order is three fixed passes: top-level widgets in insertion
    /// order, then the modally-active widget, then every widget's tooltip.
    /// Later passes overwrite earlier ones on screen, which guarantees the
    /// modal widget occludes its siblings and tooltips occlude everything
    /// without a z-sort.
    pub fn render(&mut self, cmd: CommandList) {
        if !self.visible {
            return;
        }

        let ctx = self.ctx();
        let scissor = self.scissor;
        let active = self.active;
        let mut device = self.device.clone();
        device.scope_mut(|dev| {
            dev.event_begin("GUI", cmd);

            for i in 0..self.order.len() {
                let handle = self.order[i];
                if self.registry.parent(handle) != Parent::Overlay || Some(handle) == active {
                    // contained child widgets are drawn by their owning widget
                    continue;
                }
                if let Some(widget) = self.registry.get_mut(handle) {
                    dev.bind_scissor(scissor, cmd);
                    widget.draw(&ctx, &mut *dev, cmd);
                }
            }

            // the active widget paints strictly after its siblings
            if let Some(handle) = active {
                if let Some(widget) = self.registry.get_mut(handle) {
                    dev.bind_scissor(scissor, cmd);
                    widget.draw(&ctx, &mut *dev, cmd);
                }
            }

            dev.bind_scissor(scissor, cmd);

            // tooltips paint last, nested widgets included
            for i in 0..self.order.len() {
                let handle = self.order[i];
                if let Some(widget) = self.registry.get_mut(handle) {
                    widget.draw_tooltip(&ctx, &mut *dev, cmd);
                }
            }

            dev.event_end(cmd);
        });
    }

    /// Attaches a widget as a top-level child and returns its handle.
    /// Insertion order is the default update/draw order.
    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> WidgetHandle {
        let handle = self.registry.insert(widget);
        self.registry.set_parent(handle, Parent::Overlay);
        self.order.push(handle);
        handle
    }

    /// Detaches a widget and returns it to the caller. If the widget holds
    /// modal focus it is deactivated first, so removal can never leave a
    /// stale active reference behind. Stale handles yield `None`.
    pub fn remove_widget(&mut self, handle: WidgetHandle) -> Option<Box<dyn Widget>> {
        if !self.registry.contains(handle) {
            return None;
        }
        if self.active == Some(handle) {
            self.deactivate_widget(handle);
        }
        self.order.retain(|&h| h != handle);
        self.registry.remove(handle)
    }

    /// Finds a widget by name; first match in insertion order wins.
    pub fn get_widget(&self, name: &str) -> Option<WidgetHandle> {
        let name = WidgetName::new(name);
        self.order.iter().copied().find(|&handle| self.registry.name(handle) == Some(&name))
    }

    /// Gives the widget modal focus and fires its activate hook.
    /// No-op on a stale handle.
    pub fn activate_widget(&mut self, handle: WidgetHandle) {
        let Some(widget) = self.registry.get_mut(handle) else { return };
        self.active = Some(handle);
        widget.activate();
    }

    /// Fires the widget's deactivate hook and clears modal focus if this
    /// widget held it. Safe to call with a non-active or stale handle.
    pub fn deactivate_widget(&mut self, handle: WidgetHandle) {
        if let Some(widget) = self.registry.get_mut(handle) {
            widget.deactivate();
        }
        if self.active == Some(handle) {
            self.active = None;
        }
    }

    /// Returns the widget currently holding modal focus, if any.
    pub fn active_widget(&self) -> Option<WidgetHandle> { self.active }

    /// Returns `true` iff modal focus is held by some other widget.
    pub fn is_widget_disabled(&self, handle: WidgetHandle) -> bool {
        match self.active {
            Some(active) => active != handle,
            None => false,
        }
    }

    /// Returns `false` while invisible, else whether any enabled, visible
    /// top-level widget was beyond [`WidgetState::Idle`] at the last update.
    pub fn has_focus(&self) -> bool { self.visible && self.focus }

    /// Moves a widget under a composite widget or back to the top level.
    /// Refuses stale handles and self-parenting.
    pub fn reparent(&mut self, widget: WidgetHandle, parent: Parent) -> bool {
        if let Parent::Widget(owner) = parent {
            if owner == widget || !self.registry.contains(owner) {
                return false;
            }
        }
        self.registry.set_parent(widget, parent)
    }

    /// Returns a shared reference to a widget, if the handle is live.
    pub fn widget(&self, handle: WidgetHandle) -> Option<&dyn Widget> { self.registry.get(handle) }

    /// Returns a mutable reference to a widget, if the handle is live.
    pub fn widget_mut(&mut self, handle: WidgetHandle) -> Option<&mut dyn Widget> { self.registry.get_mut(handle) }

    /// Shows or hides the whole overlay.
    pub fn set_visible(&mut self, visible: bool) { self.visible = visible; }

    /// Returns `true` if the overlay updates and renders.
    pub fn is_visible(&self) -> bool { self.visible }

    /// Returns the pointer position sampled at the last update.
    pub fn pointer_pos(&self) -> Vec2f { self.pointer_pos }

    /// Returns the scissor rectangle recomputed at the last update.
    pub fn scissor_rect(&self) -> Recti { self.scissor }

    /// Returns the screen scale, recomputing the transform if dirty.
    pub fn screen_scale(&mut self) -> Vec2f { self.transform.scale() }

    /// Returns the screen transform.
    pub fn transform(&self) -> &ScreenTransform { &self.transform }

    /// Returns the number of widgets registered with the overlay.
    pub fn len(&self) -> usize { self.order.len() }

    /// Returns `true` if no widgets are registered.
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    fn ctx(&self) -> OverlayCtx {
        OverlayCtx {
            pointer_pos: self.pointer_pos,
            scissor: self.scissor,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimensioni, Vec4f, WidgetFlags};
    use std::cell::Cell;

    struct ScriptedDevice {
        dim: Dimensioni,
        changed: bool,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedDevice {
        fn new(width: i32, height: i32, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                dim: Dimensioni::new(width, height),
                changed: false,
                log,
            }
        }
    }

    impl Device for ScriptedDevice {
        fn screen_size(&self) -> Dimensioni { self.dim }

        fn resolution_changed(&mut self) -> bool { std::mem::take(&mut self.changed) }

        fn bind_scissor(&mut self, rect: Recti, _cmd: CommandList) {
            self.log
                .borrow_mut()
                .push(format!("scissor {},{},{},{}", rect.x, rect.y, rect.width, rect.height));
        }

        fn event_begin(&mut self, name: &str, _cmd: CommandList) { self.log.borrow_mut().push(format!("begin {}", name)); }

        fn event_end(&mut self, _cmd: CommandList) { self.log.borrow_mut().push("end".to_string()); }
    }

    struct Probe {
        name: &'static str,
        flags: Rc<Cell<WidgetFlags>>,
        state: Rc<Cell<WidgetState>>,
        tooltip: bool,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Probe {
        fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name,
                flags: Rc::new(Cell::new(WidgetFlags::ENABLED | WidgetFlags::VISIBLE)),
                state: Rc::new(Cell::new(WidgetState::Idle)),
                tooltip: false,
                log,
            }
        }

        fn with_tooltip(mut self) -> Self {
            self.tooltip = true;
            self
        }
    }

    impl Widget for Probe {
        fn name(&self) -> &str { self.name }

        fn flags(&self) -> WidgetFlags { self.flags.get() }

        fn state(&self) -> WidgetState { self.state.get() }

        fn update(&mut self, _ctx: &OverlayCtx, _dt: f32) { self.log.borrow_mut().push(format!("update {}", self.name)); }

        fn draw(&mut self, _ctx: &OverlayCtx, _device: &mut dyn Device, _cmd: CommandList) { self.log.borrow_mut().push(format!("draw {}", self.name)); }

        fn draw_tooltip(&mut self, _ctx: &OverlayCtx, _device: &mut dyn Device, _cmd: CommandList) {
            if self.tooltip {
                self.log.borrow_mut().push(format!("tooltip {}", self.name));
            }
        }

        fn activate(&mut self) {
            self.state.set(WidgetState::Active);
            self.log.borrow_mut().push(format!("activate {}", self.name));
        }

        fn deactivate(&mut self) {
            self.state.set(WidgetState::Idle);
            self.log.borrow_mut().push(format!("deactivate {}", self.name));
        }
    }

    fn make_overlay(width: i32, height: i32) -> (GuiOverlay<ScriptedDevice>, DeviceHandle<ScriptedDevice>, Rc<RefCell<PointerInput>>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let device = DeviceHandle::new(ScriptedDevice::new(width, height, log.clone()));
        let pointer = Rc::new(RefCell::new(PointerInput::default()));
        let overlay = GuiOverlay::new(device.clone(), pointer.clone());
        (overlay, device, pointer, log)
    }

    fn assert_scissor(r: Recti, x: i32, y: i32, width: i32, height: i32) {
        assert_eq!(r.x, x);
        assert_eq!(r.y, y);
        assert_eq!(r.width, width);
        assert_eq!(r.height, height);
    }

    #[test]
    fn invisible_overlay_is_inert() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let probe = Probe::new("panel", log.clone());
        let state = probe.state.clone();
        overlay.add_widget(Box::new(probe));
        state.set(WidgetState::Focus);

        overlay.set_visible(false);
        overlay.update(0.016);
        overlay.render(CommandList::new(0));

        assert!(log.borrow().is_empty());
        assert!(!overlay.has_focus());
    }

    #[test]
    fn name_lookup_follows_add_and_remove() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let handle = overlay.add_widget(Box::new(Probe::new("inventory", log)));

        assert_eq!(overlay.get_widget("inventory"), Some(handle));
        assert_eq!(overlay.get_widget("missing"), None);

        let widget = overlay.remove_widget(handle);
        assert_eq!(widget.map(|w| w.name().to_string()), Some("inventory".to_string()));
        assert_eq!(overlay.get_widget("inventory"), None);
        assert!(overlay.is_empty());
    }

    #[test]
    fn duplicate_names_resolve_to_first_insertion() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let first = overlay.add_widget(Box::new(Probe::new("dup", log.clone())));
        let second = overlay.add_widget(Box::new(Probe::new("dup", log)));

        assert_ne!(first, second);
        assert_eq!(overlay.get_widget("dup"), Some(first));
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn activation_holds_modal_focus() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let a = overlay.add_widget(Box::new(Probe::new("a", log.clone())));
        let b = overlay.add_widget(Box::new(Probe::new("b", log.clone())));

        overlay.activate_widget(b);
        assert_eq!(overlay.active_widget(), Some(b));
        assert!(overlay.is_widget_disabled(a));
        assert!(!overlay.is_widget_disabled(b));
        assert!(log.borrow().contains(&"activate b".to_string()));
    }

    #[test]
    fn no_modal_disables_nobody() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let a = overlay.add_widget(Box::new(Probe::new("a", log)));
        assert!(!overlay.is_widget_disabled(a));
    }

    #[test]
    fn update_deactivates_a_non_interactable_active_widget() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let probe = Probe::new("dialog", log.clone());
        let flags = probe.flags.clone();
        let handle = overlay.add_widget(Box::new(probe));

        overlay.activate_widget(handle);
        flags.set(WidgetFlags::VISIBLE); // still visible, no longer enabled
        overlay.update(0.016);

        assert_eq!(overlay.active_widget(), None);
        assert!(log.borrow().contains(&"deactivate dialog".to_string()));
    }

    #[test]
    fn removing_the_active_widget_clears_modal_focus() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let handle = overlay.add_widget(Box::new(Probe::new("dialog", log.clone())));

        overlay.activate_widget(handle);
        overlay.remove_widget(handle);

        assert_eq!(overlay.active_widget(), None);
        assert!(log.borrow().contains(&"deactivate dialog".to_string()));
        assert!(overlay.widget(handle).is_none());
        assert!(overlay.remove_widget(handle).is_none());
    }

    #[test]
    fn deactivation_is_idempotent() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let a = overlay.add_widget(Box::new(Probe::new("a", log.clone())));
        let b = overlay.add_widget(Box::new(Probe::new("b", log)));

        overlay.activate_widget(a);
        overlay.deactivate_widget(b); // not active, focus must stay on a
        assert_eq!(overlay.active_widget(), Some(a));

        overlay.deactivate_widget(a);
        assert_eq!(overlay.active_widget(), None);
        overlay.deactivate_widget(a);
        assert_eq!(overlay.active_widget(), None);
    }

    #[test]
    fn active_widget_paints_after_siblings_and_tooltips_last() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        overlay.add_widget(Box::new(Probe::new("a", log.clone()).with_tooltip()));
        let b = overlay.add_widget(Box::new(Probe::new("b", log.clone())));
        overlay.activate_widget(b);

        log.borrow_mut().clear();
        overlay.render(CommandList::new(7));

        let expected = vec![
            "begin GUI".to_string(),
            "scissor 0,0,800,600".to_string(),
            "draw a".to_string(),
            "scissor 0,0,800,600".to_string(),
            "draw b".to_string(),
            "scissor 0,0,800,600".to_string(),
            "tooltip a".to_string(),
            "end".to_string(),
        ];
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn fullscreen_frame_scenario() {
        let (mut overlay, _device, pointer, log) = make_overlay(1920, 1080);
        let w1 = Probe::new("w1", log.clone());
        let w1_state = w1.state.clone();
        overlay.add_widget(Box::new(w1));
        let w2 = overlay.add_widget(Box::new(Probe::new("w2", log.clone())));
        overlay.activate_widget(w2);

        pointer.borrow_mut().set_sample(Vec4f::new(12.0, 34.0, 99.0, 99.0));
        overlay.update(0.016);

        assert_scissor(overlay.scissor_rect(), 0, 0, 1920, 1080);
        assert_eq!(overlay.pointer_pos().x, 12.0);
        assert_eq!(overlay.pointer_pos().y, 34.0);
        assert!(overlay.has_focus()); // w2 is active

        log.borrow_mut().clear();
        overlay.render(CommandList::new(0));
        let draw_order: Vec<String> = log.borrow().iter().filter(|line| line.starts_with("draw")).cloned().collect();
        assert_eq!(draw_order, vec!["draw w1".to_string(), "draw w2".to_string()]);

        // idle widgets alone do not hold focus
        overlay.deactivate_widget(w2);
        w1_state.set(WidgetState::Idle);
        overlay.update(0.016);
        assert!(!overlay.has_focus());
    }

    #[test]
    fn resolution_change_refreshes_transform_and_scissor() {
        let (mut overlay, device, _pointer, _log) = make_overlay(1920, 1080);
        overlay.update(0.016);
        let version = overlay.transform().version();

        let mut device = device;
        device.scope_mut(|dev| {
            dev.dim = Dimensioni::new(1280, 720);
            dev.changed = true;
        });
        overlay.update(0.016);

        assert_eq!(overlay.transform().version(), version + 1);
        assert_scissor(overlay.scissor_rect(), 0, 0, 1280, 720);
        let scale = overlay.screen_scale();
        assert_eq!(scale.x, 1280.0);
        assert_eq!(scale.y, 720.0);
    }

    #[test]
    fn nested_widgets_skip_top_level_passes_but_keep_tooltips() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let window = overlay.add_widget(Box::new(Probe::new("window", log.clone())));
        let child = overlay.add_widget(Box::new(Probe::new("child", log.clone()).with_tooltip()));
        assert!(overlay.reparent(child, Parent::Widget(window)));

        log.borrow_mut().clear();
        overlay.update(0.016);
        overlay.render(CommandList::new(0));

        let lines = log.borrow();
        assert!(lines.contains(&"update window".to_string()));
        assert!(!lines.contains(&"update child".to_string()));
        assert!(!lines.contains(&"draw child".to_string()));
        assert!(lines.contains(&"tooltip child".to_string()));
    }

    #[test]
    fn reparent_rejects_self_and_stale_owners() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let window = overlay.add_widget(Box::new(Probe::new("window", log.clone())));
        let child = overlay.add_widget(Box::new(Probe::new("child", log)));

        assert!(!overlay.reparent(child, Parent::Widget(child)));
        overlay.remove_widget(window);
        assert!(!overlay.reparent(child, Parent::Widget(window)));
        assert!(overlay.reparent(child, Parent::Detached));
    }

    #[test]
    fn ctx_reports_modal_state_to_widgets() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let a = overlay.add_widget(Box::new(Probe::new("a", log.clone())));
        let b = overlay.add_widget(Box::new(Probe::new("b", log)));
        overlay.activate_widget(b);

        let ctx = overlay.ctx();
        assert_eq!(ctx.active_widget(), Some(b));
        assert!(ctx.is_widget_disabled(a));
        assert!(!ctx.is_widget_disabled(b));
        assert_scissor(ctx.scissor_rect(), 0, 0, 800, 600);
    }

    #[test]
    fn stale_active_handle_is_cleared_on_update() {
        let (mut overlay, _device, _pointer, log) = make_overlay(800, 600);
        let handle = overlay.add_widget(Box::new(Probe::new("ghost", log)));
        overlay.activate_widget(handle);

        // bypass remove_widget's own deactivation path
        overlay.order.retain(|&h| h != handle);
        overlay.registry.remove(handle);

        overlay.update(0.016);
        assert_eq!(overlay.active_widget(), None);
    }
}
