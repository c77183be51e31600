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
use crate::rg_support::RgSample;
use num_traits::AsPrimitive;

/// 3x3 square around a center sample.
///
/// ```text
/// a1 a2 a3
/// a4 c  a5
/// a6 a7 a8
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Neighbourhood<V> {
    pub(crate) a1: V,
    pub(crate) a2: V,
    pub(crate) a3: V,
    pub(crate) a4: V,
    pub(crate) c: V,
    pub(crate) a5: V,
    pub(crate) a6: V,
    pub(crate) a7: V,
    pub(crate) a8: V,
}

impl<T: RgSample> Neighbourhood<T> {
    /// Loads the square around the sample at byte offset `center`.
    ///
    /// `stride` is the byte distance between rows, the caller guarantees one
    /// row above, one row below and one sample at each side.
    #[inline(always)]
    pub(crate) fn load(src: &[u8], center: usize, stride: usize) -> Self {
        let bpp = T::BYTES;
        let top = center - stride;
        let bottom = center + stride;
        Neighbourhood {
            a1: T::read(src, top - bpp),
            a2: T::read(src, top),
            a3: T::read(src, top + bpp),
            a4: T::read(src, center - bpp),
            c: T::read(src, center),
            a5: T::read(src, center + bpp),
            a6: T::read(src, bottom - bpp),
            a7: T::read(src, bottom),
            a8: T::read(src, bottom + bpp),
        }
    }

    #[inline(always)]
    pub(crate) fn widen<V>(self) -> Neighbourhood<V>
    where
        T: AsPrimitive<V>,
        V: Copy + 'static,
    {
        Neighbourhood {
            a1: self.a1.as_(),
            a2: self.a2.as_(),
            a3: self.a3.as_(),
            a4: self.a4.as_(),
            c: self.c.as_(),
            a5: self.a5.as_(),
            a6: self.a6.as_(),
            a7: self.a7.as_(),
            a8: self.a8.as_(),
        }
    }
}

impl<V: Copy> Neighbourhood<V> {
    /// Neighbours without the center in reading order
    #[inline(always)]
    pub(crate) fn neighbours(&self) -> [V; 8] {
        [
            self.a1, self.a2, self.a3, self.a4, self.a5, self.a6, self.a7, self.a8,
        ]
    }
}
