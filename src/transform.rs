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
use rs_math3d::{Dimensioni, Vec2f};

/// Screen-space transform of the overlay, derived from the display
/// dimensions. Recomputation is a pure function of the last known dimensions,
/// cached behind an explicit version counter: construction and every
/// resolution change bump the version, [`ScreenTransform::scale`] recomputes
/// lazily when the cached version lags behind.
pub struct ScreenTransform {
    dim: Dimensioni,
    version: u64,
    cached_version: u64,
    scale: Vec2f,
}

impl ScreenTransform {
    /// Creates a transform for the given dimensions; starts out dirty.
    pub fn new(dim: Dimensioni) -> Self {
        Self {
            dim,
            version: 1,
            cached_version: 0,
            scale: Vec2f::default(),
        }
    }

    /// Pure recomputation of the screen scale from the dimensions.
    pub fn compute(dim: Dimensioni) -> Vec2f { Vec2f::new(dim.width as f32, dim.height as f32) }

    /// Records new display dimensions and bumps the version.
    pub fn set_dimensions(&mut self, dim: Dimensioni) {
        self.dim = dim;
        self.version += 1;
    }

    /// Returns the screen scale, recomputing it if the cache is stale.
    pub fn scale(&mut self) -> Vec2f {
        if self.cached_version != self.version {
            self.scale = Self::compute(self.dim);
            self.cached_version = self.version;
        }
        self.scale
    }

    /// Returns the last dimensions fed into the transform.
    pub fn dimensions(&self) -> Dimensioni { self.dim }

    /// Returns the current version; bumped by every dimension change.
    pub fn version(&self) -> u64 { self.version }

    /// Returns `true` if the cached scale lags behind the dimensions.
    pub fn is_dirty(&self) -> bool { self.cached_version != self.version }
}
