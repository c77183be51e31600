/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::rg_error::check_plane;
use crate::rg_support::SampleFormat;
use crate::RgError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Non-mutable single plane of samples in native endianness
pub struct RgPlane<'a> {
    pub data: &'a [u8],
    /// Stride here always means bytes per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl RgPlane<'_> {
    pub fn check_constraints(&self, format: SampleFormat) -> Result<(), RgError> {
        check_plane(self.data, self.stride, self.width, self.height, format)
    }
}

#[derive(Debug)]
/// Mutable single plane of samples in native endianness
pub struct RgPlaneMut<'a> {
    pub data: BufferStoreMut<'a, u8>,
    /// Stride here always means bytes per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a> RgPlaneMut<'a> {
    pub fn check_constraints(&self, format: SampleFormat) -> Result<(), RgError> {
        check_plane(
            self.data.borrow(),
            self.stride,
            self.width,
            self.height,
            format,
        )
    }

    pub fn to_fixed(&'a self) -> RgPlane<'a> {
        RgPlane {
            data: self.data.borrow(),
            stride: self.stride,
            width: self.width,
            height: self.height,
        }
    }
}

impl RgPlaneMut<'_> {
    /// Allocates tightly packed zeroed plane
    pub fn alloc(width: u32, height: u32, format: SampleFormat) -> Self {
        let stride = width as usize * format.bytes_per_sample();
        let target = vec![0u8; stride * height as usize];
        Self {
            data: BufferStoreMut::Owned(target),
            stride: stride as u32,
            width,
            height,
        }
    }
}
