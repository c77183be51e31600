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
use crate::rg_support::{RgMode, SampleFormat};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum RgError {
    InvalidMode(i32),
    UnsupportedFormat {
        bytes_per_sample: u32,
        bits_per_sample: u32,
    },
    ZeroBaseSize,
    PointerOverflow,
    PlaneTooSmall {
        width: u32,
        height: u32,
    },
    StrideTooSmall(MismatchedSize),
    PlaneSizeMismatch(MismatchedSize),
    DimensionsMismatch,
    PlaneCountMismatch(MismatchedSize),
}

impl Display for RgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RgError::InvalidMode(mode) => f.write_fmt(format_args!(
                "Mode must be in range [0, 28], but it was {}",
                mode
            )),
            RgError::UnsupportedFormat {
                bytes_per_sample,
                bits_per_sample,
            } => f.write_fmt(format_args!(
                "Unsupported sample format: {} bytes per sample with {} bits",
                bytes_per_sample, bits_per_sample
            )),
            RgError::ZeroBaseSize => f.write_str("Zero sized planes is not supported"),
            RgError::PointerOverflow => f.write_str("Plane size overflow pointer capabilities"),
            RgError::PlaneTooSmall { width, height } => f.write_fmt(format_args!(
                "Plane must be at least 3x3 for a non copy mode, but it was {}x{}",
                width, height
            )),
            RgError::StrideTooSmall(size) => f.write_fmt(format_args!(
                "Stride must be at least {} bytes, but it was {}",
                size.expected, size.received
            )),
            RgError::PlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            RgError::DimensionsMismatch => {
                f.write_str("Source and destination planes must have the same dimensions")
            }
            RgError::PlaneCountMismatch(size) => f.write_fmt(format_args!(
                "Plane count mismatch: expected={}, received={}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for RgError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), RgError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(RgError::PointerOverflow);
    }
    Ok(())
}

/// Checks a plane of `width` x `height` samples laid out with `stride` bytes per row.
///
/// The last row does not need to be padded to the full stride.
#[inline]
pub(crate) fn check_plane(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
    format: SampleFormat,
) -> Result<(), RgError> {
    if width == 0 || height == 0 {
        return Err(RgError::ZeroBaseSize);
    }
    let bytes_per_sample = format.bytes_per_sample();
    check_overflow_v2(width as usize, bytes_per_sample)?;
    check_overflow_v2(stride as usize, height as usize)?;
    let row_bytes = width as usize * bytes_per_sample;
    if (stride as usize) < row_bytes {
        return Err(RgError::StrideTooSmall(MismatchedSize {
            expected: row_bytes,
            received: stride as usize,
        }));
    }
    let required = (height as usize - 1) * stride as usize + row_bytes;
    if data.len() < required {
        return Err(RgError::PlaneSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Every mode except copy needs a full 3x3 square
#[inline]
pub(crate) fn check_mode_fits(mode: RgMode, width: u32, height: u32) -> Result<(), RgError> {
    if mode != RgMode::Copy && (width < 3 || height < 3) {
        return Err(RgError::PlaneTooSmall { width, height });
    }
    Ok(())
}
