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
//! Spatial RemoveGrain denoising for single planes of 8, 10, 12, 14, 16 bit
//! and float images.
//!
//! Every mode looks only at the 3x3 square around a sample. The one sample
//! border of a plane is always copied from the source.
//!
//! # Example
//!
//! ```
//! use rgtools::{ColorFamily, RemoveGrain, RgMode, RgPlane, RgPlaneMut, SampleFormat};
//!
//! let source = vec![128u8; 16 * 16];
//! let src = RgPlane {
//!     data: &source,
//!     stride: 16,
//!     width: 16,
//!     height: 16,
//! };
//! let mut dst = RgPlaneMut::alloc(16, 16, SampleFormat::U8);
//! let filter = RemoveGrain::new(RgMode::Median, SampleFormat::U8, ColorFamily::Gray);
//! filter.process_plane(0, &src, &mut dst).unwrap();
//! assert_eq!(dst.data.borrow(), &source[..]);
//! ```
#![forbid(unsafe_code)]
mod dispatch;
mod images;
mod neighbourhood;
mod numerics;
mod plane_processor;
mod remove_grain;
mod rg_error;
mod rg_kernels;
mod rg_support;

pub use dispatch::{select_functions, select_processor};
pub use images::{BufferStoreMut, RgPlane, RgPlaneMut};
pub use plane_processor::PlaneProcessor;
pub use remove_grain::{remove_grain_plane, RemoveGrain};
pub use rg_error::{MismatchedSize, RgError};
pub use rg_support::{ColorFamily, PlaneRole, RgMode, SampleFormat, RG_MODES_COUNT};
