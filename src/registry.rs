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
use slotmap::{SlotMap, new_key_type};

use crate::{Widget, WidgetName};

new_key_type! {
    /// Generation-checked handle addressing a widget inside a
    /// [`WidgetRegistry`]. Handles held after removal resolve to `None`
    /// instead of aliasing whatever reuses the slot.
    pub struct WidgetHandle;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Ownership link recorded for every registered widget.
pub enum Parent {
    /// Widget is not attached anywhere.
    #[default]
    Detached,
    /// Widget is a direct child of the overlay (top-level).
    Overlay,
    /// Widget is owned by a composite widget; that widget updates and draws
    /// it in place of the overlay's top-level passes.
    Widget(WidgetHandle),
}

pub(crate) struct WidgetEntry {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) name: WidgetName,
    pub(crate) parent: Parent,
}

#[derive(Default)]
/// Arena owning every widget registered with an overlay. Insertion mints a
/// fresh handle; removal invalidates it for good, which is what makes a
/// dangling modal-focus reference structurally impossible.
pub struct WidgetRegistry {
    slots: SlotMap<WidgetHandle, WidgetEntry>,
}

impl WidgetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self { Self { slots: SlotMap::with_key() } }

    /// Stores a widget, recording its name, and returns its handle.
    /// The widget starts out [`Parent::Detached`].
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> WidgetHandle {
        let name = WidgetName::new(widget.name());
        self.slots.insert(WidgetEntry {
            widget,
            name,
            parent: Parent::Detached,
        })
    }

    /// Removes a widget, returning it to the caller. Stale handles yield
    /// `None` and leave the registry untouched.
    pub fn remove(&mut self, handle: WidgetHandle) -> Option<Box<dyn Widget>> { self.slots.remove(handle).map(|entry| entry.widget) }

    /// Returns `true` if the handle still addresses a live widget.
    pub fn contains(&self, handle: WidgetHandle) -> bool { self.slots.contains_key(handle) }

    /// Returns a shared reference to the widget, if the handle is live.
    pub fn get(&self, handle: WidgetHandle) -> Option<&dyn Widget> { self.slots.get(handle).map(|entry| entry.widget.as_ref()) }

    /// Returns a mutable reference to the widget, if the handle is live.
    pub fn get_mut(&mut self, handle: WidgetHandle) -> Option<&mut dyn Widget> {
        // a match (rather than Option::map) so the trait-object coercion
        // happens against the return type's object lifetime
        match self.slots.get_mut(handle) {
            Some(entry) => Some(entry.widget.as_mut()),
            None => None,
        }
    }

    /// Returns the name recorded when the widget was inserted.
    pub fn name(&self, handle: WidgetHandle) -> Option<&WidgetName> { self.slots.get(handle).map(|entry| &entry.name) }

    /// Returns the widget's ownership link; stale handles read as detached.
    pub fn parent(&self, handle: WidgetHandle) -> Parent { self.slots.get(handle).map(|entry| entry.parent).unwrap_or_default() }

    /// Rewrites the widget's ownership link. Returns `false` on a stale
    /// handle.
    pub fn set_parent(&mut self, handle: WidgetHandle, parent: Parent) -> bool {
        match self.slots.get_mut(handle) {
            Some(entry) => {
                entry.parent = parent;
                true
            }
            None => false,
        }
    }

    /// Returns the number of live widgets.
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` if no widgets are registered.
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}
