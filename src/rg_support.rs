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
use crate::RgError;
use num_traits::AsPrimitive;
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Declares one of the 29 spatial transforms.
///
/// Discriminants are the classic RemoveGrain mode numbers.
///
/// `From<u8>` panics on values above 28, use `TryFrom<i32>` for unchecked input.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RgMode {
    /// Plane is copied untouched
    Copy = 0,
    /// Clip to the minimum and maximum of the 8 neighbours
    ClipMinMax1 = 1,
    /// Clip to the 2nd smallest and 2nd largest neighbour
    ClipMinMax2 = 2,
    /// Clip to the 3rd smallest and 3rd largest neighbour
    ClipMinMax3 = 3,
    /// Clip to the 4th smallest and 4th largest neighbour, a 3x3 median
    Median = 4,
    /// Line-sensitive clip moving the center the least
    LineClipClosest = 5,
    /// Line-sensitive clip, center change weighted twice against the line range
    LineClipWeightedChange = 6,
    /// Line-sensitive clip, center change and line range weighted equally
    LineClipWeighted = 7,
    /// Line-sensitive clip, line range weighted twice against the center change
    LineClipWeightedRange = 8,
    /// Clip to the line with the smallest range
    LineClipMinRange = 9,
    /// Replace the center by the closest neighbour
    ClosestNeighbour = 10,
    /// 3x3 binomial blur
    Blur = 11,
    /// 3x3 binomial blur, same kernel as [RgMode::Blur]
    BlurAlt = 12,
    /// Rebuilds even rows from the closest line through the odd rows
    BobEvenClosest = 13,
    /// Rebuilds odd rows from the closest line through the even rows
    BobOddClosest = 14,
    /// Rebuilds even rows from a weighted average clipped to the closest line
    BobEvenInterpolate = 15,
    /// Rebuilds odd rows from a weighted average clipped to the closest line
    BobOddInterpolate = 16,
    /// Clip between the extremes of the line minima and maxima
    LineClipExtremes = 17,
    /// Clip to the line whose farther end is closest to the center
    LineClipMaxDistance = 18,
    /// Average of the 8 neighbours
    NeighbourMean = 19,
    /// Average of the whole 3x3 square
    SquareMean = 20,
    /// Clip to the floored and ceiled line averages
    LineAverageClip = 21,
    /// Clip to the rounded line averages
    LineAverageClipRounded = 22,
    /// Small edge and halo removal
    EdgeHaloRemoval = 23,
    /// Conservative small edge and halo removal
    EdgeHaloRemovalSoft = 24,
    /// Minimal sharpening
    MinimalSharpen = 25,
    /// Clip to bounds from the 8 adjacent ring pairs, keeps corners
    RingClip = 26,
    /// Clip to bounds from 12 pairs, keeps corners and thin lines
    RingLineClip = 27,
    /// Clip to bounds from the ring pairs and the 4 lines through the center
    RingCrossClip = 28,
}

/// Number of modes, including [RgMode::Copy]
pub const RG_MODES_COUNT: usize = 29;

impl RgMode {
    /// Modes that rebuild one field of an interlaced plane from the other.
    #[inline]
    pub const fn is_field_mode(&self) -> bool {
        matches!(
            self,
            RgMode::BobEvenClosest
                | RgMode::BobOddClosest
                | RgMode::BobEvenInterpolate
                | RgMode::BobOddInterpolate
        )
    }
}

impl Default for RgMode {
    fn default() -> Self {
        RgMode::ClipMinMax3
    }
}

impl From<u8> for RgMode {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgMode::Copy,
            1 => RgMode::ClipMinMax1,
            2 => RgMode::ClipMinMax2,
            3 => RgMode::ClipMinMax3,
            4 => RgMode::Median,
            5 => RgMode::LineClipClosest,
            6 => RgMode::LineClipWeightedChange,
            7 => RgMode::LineClipWeighted,
            8 => RgMode::LineClipWeightedRange,
            9 => RgMode::LineClipMinRange,
            10 => RgMode::ClosestNeighbour,
            11 => RgMode::Blur,
            12 => RgMode::BlurAlt,
            13 => RgMode::BobEvenClosest,
            14 => RgMode::BobOddClosest,
            15 => RgMode::BobEvenInterpolate,
            16 => RgMode::BobOddInterpolate,
            17 => RgMode::LineClipExtremes,
            18 => RgMode::LineClipMaxDistance,
            19 => RgMode::NeighbourMean,
            20 => RgMode::SquareMean,
            21 => RgMode::LineAverageClip,
            22 => RgMode::LineAverageClipRounded,
            23 => RgMode::EdgeHaloRemoval,
            24 => RgMode::EdgeHaloRemovalSoft,
            25 => RgMode::MinimalSharpen,
            26 => RgMode::RingClip,
            27 => RgMode::RingLineClip,
            28 => RgMode::RingCrossClip,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl TryFrom<i32> for RgMode {
    type Error = RgError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (0..RG_MODES_COUNT as i32).contains(&value) {
            Ok(RgMode::from(value as u8))
        } else {
            Err(RgError::InvalidMode(value))
        }
    }
}

/// Declares sample storage and its bit depth
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    U8,
    /// 10 bit samples in 16 bit container
    U10,
    /// 12 bit samples in 16 bit container
    U12,
    /// 14 bit samples in 16 bit container
    U14,
    U16,
    /// Float samples, luma in [0, 1], chroma in [-0.5, 0.5]
    F32,
}

impl SampleFormat {
    /// Resolves format from bytes per sample and declared bit depth.
    ///
    /// Bit depth is only inspected for 2 bytes samples.
    pub fn new(bytes_per_sample: u32, bits_per_sample: u32) -> Result<Self, RgError> {
        match (bytes_per_sample, bits_per_sample) {
            (1, _) => Ok(SampleFormat::U8),
            (2, 10) => Ok(SampleFormat::U10),
            (2, 12) => Ok(SampleFormat::U12),
            (2, 14) => Ok(SampleFormat::U14),
            (2, 16) => Ok(SampleFormat::U16),
            (4, _) => Ok(SampleFormat::F32),
            _ => Err(RgError::UnsupportedFormat {
                bytes_per_sample,
                bits_per_sample,
            }),
        }
    }

    #[inline]
    pub const fn bytes_per_sample(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::U10 | SampleFormat::U12 | SampleFormat::U14 | SampleFormat::U16 => 2,
            SampleFormat::F32 => 4,
        }
    }

    #[inline]
    pub const fn bit_depth(&self) -> u32 {
        match self {
            SampleFormat::U8 => 8,
            SampleFormat::U10 => 10,
            SampleFormat::U12 => 12,
            SampleFormat::U14 => 14,
            SampleFormat::U16 => 16,
            SampleFormat::F32 => 32,
        }
    }

    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32)
    }
}

/// Color model of the frame the planes belong to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Gray,
    Rgb,
    Yuv,
}

/// Role of a plane inside a frame.
///
/// Only float samples distinguish them, float chroma is centered at zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaneRole {
    Luma,
    Chroma,
}

impl PlaneRole {
    pub const fn for_plane(plane_index: usize, family: ColorFamily, format: SampleFormat) -> Self {
        if plane_index > 0 && !matches!(family, ColorFamily::Rgb) && format.is_float() {
            PlaneRole::Chroma
        } else {
            PlaneRole::Luma
        }
    }
}

/// Stored sample type, read and written at byte offsets in native endianness
pub trait RgSample: Copy + Debug + Default + Send + Sync + 'static {
    const BYTES: usize;

    fn read(src: &[u8], offset: usize) -> Self;

    fn write(self, dst: &mut [u8], offset: usize);
}

impl RgSample for u8 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn read(src: &[u8], offset: usize) -> Self {
        src[offset]
    }

    #[inline(always)]
    fn write(self, dst: &mut [u8], offset: usize) {
        dst[offset] = self;
    }
}

impl RgSample for u16 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn read(src: &[u8], offset: usize) -> Self {
        u16::from_ne_bytes([src[offset], src[offset + 1]])
    }

    #[inline(always)]
    fn write(self, dst: &mut [u8], offset: usize) {
        dst[offset..offset + 2].copy_from_slice(&self.to_ne_bytes());
    }
}

impl RgSample for f32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn read(src: &[u8], offset: usize) -> Self {
        f32::from_ne_bytes([
            src[offset],
            src[offset + 1],
            src[offset + 2],
            src[offset + 3],
        ])
    }

    #[inline(always)]
    fn write(self, dst: &mut [u8], offset: usize) {
        dst[offset..offset + 4].copy_from_slice(&self.to_ne_bytes());
    }
}

/// Arithmetic type kernels compute in, `i32` for integers and `f32` for float
pub trait RgAccum:
    Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Send + Sync + 'static
{
    const ZERO: Self;

    fn min(self, other: Self) -> Self;

    fn max(self, other: Self) -> Self;

    fn distance(self, other: Self) -> Self;

    /// `>> 1` for integers, `* 0.5` for float
    fn half(self) -> Self;

    #[inline(always)]
    fn double(self) -> Self {
        self + self
    }

    /// Division rounding to nearest, float has no rounding bias
    fn rounded_div(self, divisor: u32) -> Self;

    /// Division rounding toward zero, float has no rounding bias
    fn floor_div(self, divisor: u32) -> Self;
}

impl RgAccum for i32 {
    const ZERO: Self = 0;

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    #[inline(always)]
    fn distance(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline(always)]
    fn half(self) -> Self {
        self >> 1
    }

    #[inline(always)]
    fn rounded_div(self, divisor: u32) -> Self {
        (self + (divisor / 2) as i32) / divisor as i32
    }

    #[inline(always)]
    fn floor_div(self, divisor: u32) -> Self {
        self / divisor as i32
    }
}

impl RgAccum for f32 {
    const ZERO: Self = 0.;

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }

    #[inline(always)]
    fn distance(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline(always)]
    fn half(self) -> Self {
        self * 0.5
    }

    #[inline(always)]
    fn rounded_div(self, divisor: u32) -> Self {
        self / divisor as f32
    }

    #[inline(always)]
    fn floor_div(self, divisor: u32) -> Self {
        self / divisor as f32
    }
}

/// Binds a stored sample type to its accumulator and saturation bounds.
///
/// Implemented by zero sized markers so every kernel is monomorphized per
/// bit depth and, for float, per plane role.
pub trait RgFormat: Copy + Send + Sync + 'static {
    type Pixel: RgSample + AsPrimitive<Self::Acc>;
    type Acc: RgAccum + AsPrimitive<Self::Pixel>;

    /// Lower saturation bound of `subs`
    const PIXEL_MIN: Self::Acc;
    /// Upper saturation bound of `adds`
    const PIXEL_MAX: Self::Acc;
    /// Upper bound of unsigned differences, also the no-constraint sentinel
    const DIFF_MAX: Self::Acc;
}

#[derive(Debug, Copy, Clone)]
pub struct Pixel8;

impl RgFormat for Pixel8 {
    type Pixel = u8;
    type Acc = i32;
    const PIXEL_MIN: i32 = 0;
    const PIXEL_MAX: i32 = 255;
    const DIFF_MAX: i32 = 255;
}

#[derive(Debug, Copy, Clone)]
pub struct Pixel16<const BIT_DEPTH: u32>;

impl<const BIT_DEPTH: u32> RgFormat for Pixel16<BIT_DEPTH> {
    type Pixel = u16;
    type Acc = i32;
    const PIXEL_MIN: i32 = 0;
    const PIXEL_MAX: i32 = (1 << BIT_DEPTH) - 1;
    const DIFF_MAX: i32 = (1 << BIT_DEPTH) - 1;
}

#[derive(Debug, Copy, Clone)]
pub struct PixelF32<const CHROMA: bool>;

impl<const CHROMA: bool> RgFormat for PixelF32<CHROMA> {
    type Pixel = f32;
    type Acc = f32;
    const PIXEL_MIN: f32 = if CHROMA { -0.5 } else { 0. };
    const PIXEL_MAX: f32 = if CHROMA { 0.5 } else { 1. };
    const DIFF_MAX: f32 = 1.;
}
