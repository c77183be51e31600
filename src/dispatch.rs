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
use crate::plane_processor::{process_even_rows, process_odd_rows, process_plane, PlaneProcessor};
use crate::rg_support::{
    Pixel16, Pixel8, PixelF32, PlaneRole, RgMode, SampleFormat, RG_MODES_COUNT,
};

macro_rules! rg_table {
    ($format:ty) => {
        [
            process_plane::<$format, 0>,
            process_plane::<$format, 1>,
            process_plane::<$format, 2>,
            process_plane::<$format, 3>,
            process_plane::<$format, 4>,
            process_plane::<$format, 5>,
            process_plane::<$format, 6>,
            process_plane::<$format, 7>,
            process_plane::<$format, 8>,
            process_plane::<$format, 9>,
            process_plane::<$format, 10>,
            process_plane::<$format, 11>,
            process_plane::<$format, 12>,
            process_even_rows::<$format, 13>,
            process_odd_rows::<$format, 14>,
            process_even_rows::<$format, 15>,
            process_odd_rows::<$format, 16>,
            process_plane::<$format, 17>,
            process_plane::<$format, 18>,
            process_plane::<$format, 19>,
            process_plane::<$format, 20>,
            process_plane::<$format, 21>,
            process_plane::<$format, 22>,
            process_plane::<$format, 23>,
            process_plane::<$format, 24>,
            process_plane::<$format, 25>,
            process_plane::<$format, 26>,
            process_plane::<$format, 27>,
            process_plane::<$format, 28>,
        ]
    };
}

static RG_TABLE_8: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(Pixel8);
static RG_TABLE_10: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(Pixel16<10>);
static RG_TABLE_12: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(Pixel16<12>);
static RG_TABLE_14: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(Pixel16<14>);
static RG_TABLE_16: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(Pixel16<16>);
static RG_TABLE_F32_LUMA: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(PixelF32<false>);
static RG_TABLE_F32_CHROMA: [PlaneProcessor; RG_MODES_COUNT] = rg_table!(PixelF32<true>);

/// Returns the processors of every mode for one sample format and plane role.
///
/// Plane role only matters for float samples.
pub fn select_functions(
    format: SampleFormat,
    role: PlaneRole,
) -> &'static [PlaneProcessor; RG_MODES_COUNT] {
    match format {
        SampleFormat::U8 => &RG_TABLE_8,
        SampleFormat::U10 => &RG_TABLE_10,
        SampleFormat::U12 => &RG_TABLE_12,
        SampleFormat::U14 => &RG_TABLE_14,
        SampleFormat::U16 => &RG_TABLE_16,
        SampleFormat::F32 => match role {
            PlaneRole::Luma => &RG_TABLE_F32_LUMA,
            PlaneRole::Chroma => &RG_TABLE_F32_CHROMA,
        },
    }
}

#[inline]
pub fn select_processor(format: SampleFormat, role: PlaneRole, mode: RgMode) -> PlaneProcessor {
    select_functions(format, role)[mode as usize]
}
