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
use crate::rg_kernels::rg_kernel;
use crate::rg_support::{RgAccum, RgFormat, RgMode, RgSample};
use num_traits::AsPrimitive;
use std::ops::Range;

/// Filters one plane: `(src, dst, width, height, src_stride, dst_stride)`.
///
/// Width and height are in samples, strides are in bytes.
pub type PlaneProcessor = fn(&[u8], &mut [u8], usize, usize, usize, usize);

/// Copies `rows` of `row_bytes` bytes each, rows are addressed by their own stride per buffer
#[inline]
pub(crate) fn copy_rows(
    src: &[u8],
    dst: &mut [u8],
    row_bytes: usize,
    src_stride: usize,
    dst_stride: usize,
    rows: Range<usize>,
) {
    for y in rows {
        let src_start = y * src_stride;
        let dst_start = y * dst_stride;
        dst[dst_start..dst_start + row_bytes]
            .copy_from_slice(&src[src_start..src_start + row_bytes]);
    }
}

/// Verbatim copy of a whole plane
pub(crate) fn copy_plane<F: RgFormat>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    let row_bytes = width * F::Pixel::BYTES;
    copy_rows(src, dst, row_bytes, src_stride, dst_stride, 0..height);
}

/// Runs the kernel over every interior sample, the one sample border is copied.
pub(crate) fn process_plane<F: RgFormat, const MODE: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    let mode: RgMode = MODE.into();
    if mode == RgMode::Copy || width < 3 || height < 3 {
        copy_plane::<F>(src, dst, width, height, src_stride, dst_stride);
        return;
    }

    let bpp = F::Pixel::BYTES;
    let row_bytes = width * bpp;
    let last_column = (width - 1) * bpp;

    copy_rows(src, dst, row_bytes, src_stride, dst_stride, 0..1);

    for y in 1..height - 1 {
        let src_row = y * src_stride;
        let dst_row = y * dst_stride;

        F::Pixel::read(src, src_row).write(dst, dst_row);
        for x in 1..width - 1 {
            let offset = x * bpp;
            rg_kernel::<F, MODE>(src, src_row + offset, src_stride).write(dst, dst_row + offset);
        }
        F::Pixel::read(src, src_row + last_column).write(dst, dst_row + last_column);
    }

    copy_rows(
        src,
        dst,
        row_bytes,
        src_stride,
        dst_stride,
        height - 1..height,
    );
}

/// Rebuilds row `y` from the rows directly above and below it
#[inline]
fn interpolate_row<F: RgFormat, const MODE: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    y: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    let bpp = F::Pixel::BYTES;
    let src_row = y * src_stride;
    let dst_row = y * dst_stride;

    let border_mean = |offset: usize| -> F::Pixel {
        let above: F::Acc = F::Pixel::read(src, src_row - src_stride + offset).as_();
        let below: F::Acc = F::Pixel::read(src, src_row + src_stride + offset).as_();
        (above + below).rounded_div(2).as_()
    };

    let last_column = (width - 1) * bpp;
    border_mean(0).write(dst, dst_row);
    for x in 1..width - 1 {
        let offset = x * bpp;
        rg_kernel::<F, MODE>(src, src_row + offset, src_stride).write(dst, dst_row + offset);
    }
    border_mean(last_column).write(dst, dst_row + last_column);
}

/// Rebuilds every other row starting at `first_row`, rows in between and any
/// trailing row without a neighbour below are copied.
fn process_field<F: RgFormat, const MODE: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    first_row: usize,
) {
    let row_bytes = width * F::Pixel::BYTES;
    let mut y = first_row;
    while y + 1 < height {
        interpolate_row::<F, MODE>(src, dst, width, y, src_stride, dst_stride);
        copy_rows(src, dst, row_bytes, src_stride, dst_stride, y + 1..y + 2);
        y += 2;
    }
    copy_rows(src, dst, row_bytes, src_stride, dst_stride, y..height);
}

/// Field pass rebuilding even rows, rows 0 and 1 are kept.
pub(crate) fn process_even_rows<F: RgFormat, const MODE: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    if width < 3 || height < 3 {
        copy_plane::<F>(src, dst, width, height, src_stride, dst_stride);
        return;
    }
    let row_bytes = width * F::Pixel::BYTES;
    copy_rows(src, dst, row_bytes, src_stride, dst_stride, 0..2);
    process_field::<F, MODE>(src, dst, width, height, src_stride, dst_stride, 2);
}

/// Field pass rebuilding odd rows, row 0 and the last row are kept.
pub(crate) fn process_odd_rows<F: RgFormat, const MODE: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    if width < 3 || height < 3 {
        copy_plane::<F>(src, dst, width, height, src_stride, dst_stride);
        return;
    }
    let row_bytes = width * F::Pixel::BYTES;
    copy_rows(src, dst, row_bytes, src_stride, dst_stride, 0..1);
    process_field::<F, MODE>(src, dst, width, height, src_stride, dst_stride, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::select_processor;
    use crate::rg_support::{Pixel16, Pixel8, PlaneRole, SampleFormat};
    use rand::Rng;

    fn to_bytes_f32(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    fn from_bytes_f32(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn test_copy_rows_respects_strides() {
        let src: Vec<u8> = (0..12).collect();
        let mut dst = vec![0u8; 15];
        copy_rows(&src, &mut dst, 3, 4, 5, 0..3);
        assert_eq!(dst, vec![0, 1, 2, 0, 0, 4, 5, 6, 0, 0, 8, 9, 10, 0, 0]);
    }

    #[test]
    fn test_plane_keeps_border() {
        let mut rng = rand::rng();
        let (width, height, stride) = (7usize, 6usize, 9usize);
        let src: Vec<u8> = (0..stride * height).map(|_| rng.random()).collect();
        let mut dst = vec![0u8; stride * height];
        process_plane::<Pixel8, 4>(&src, &mut dst, width, height, stride, stride);
        for y in 0..height {
            for x in 0..width {
                if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                    assert_eq!(dst[y * stride + x], src[y * stride + x], "({x}, {y})");
                }
            }
            // padding is never touched
            assert_eq!(&dst[y * stride + width..(y + 1) * stride], &[0, 0]);
        }
    }

    #[test]
    fn test_plane_removes_single_spike() {
        let mut src = vec![10u8; 25];
        src[2 * 5 + 2] = 250;
        let mut dst = vec![0u8; 25];
        process_plane::<Pixel8, 1>(&src, &mut dst, 5, 5, 5, 5);
        assert!(dst.iter().all(|&v| v == 10));
    }

    #[test]
    fn test_small_plane_is_copied() {
        let src: Vec<u8> = vec![1, 2, 3, 4];
        let mut dst = vec![0u8; 4];
        process_plane::<Pixel8, 20>(&src, &mut dst, 2, 2, 2, 2);
        assert_eq!(src, dst);
        let mut dst = vec![0u8; 4];
        process_even_rows::<Pixel8, 13>(&src, &mut dst, 2, 2, 2, 2);
        assert_eq!(src, dst);
    }

    #[test]
    fn test_plane_16bit_stride_in_bytes() {
        let (width, height) = (4usize, 4usize);
        let stride = width * 2 + 6;
        let mut src = vec![0u8; stride * height];
        for y in 0..height {
            for x in 0..width {
                ((y * width + x) as u16 * 64).write(&mut src, y * stride + x * 2);
            }
        }
        let mut dst = vec![0u8; stride * height];
        process_plane::<Pixel16<10>, 0>(&src, &mut dst, width, height, stride, stride);
        for y in 0..height {
            assert_eq!(
                &dst[y * stride..y * stride + width * 2],
                &src[y * stride..y * stride + width * 2]
            );
        }
    }

    const FIELD_PAIRS: [(u8, u8); 2] = [(13, 14), (15, 16)];

    fn field_pass(mode: u8) -> PlaneProcessor {
        select_processor(SampleFormat::F32, PlaneRole::Luma, mode.into())
    }

    #[test]
    fn test_field_passes_write_every_row() {
        for height in 3..9usize {
            let width = 5usize;
            let stride = width * 4;
            let src = to_bytes_f32(&vec![0.25f32; width * height]);
            for mode in FIELD_PAIRS.iter().flat_map(|&(even, odd)| [even, odd]) {
                let mut dst = to_bytes_f32(&vec![f32::NAN; width * height]);
                field_pass(mode)(&src, &mut dst, width, height, stride, stride);
                assert!(
                    from_bytes_f32(&dst).iter().all(|v| *v == 0.25),
                    "height {height}, mode {mode}"
                );
            }
        }
    }

    #[test]
    fn test_field_passes_rebuild_opposite_rows() {
        // 4x4 float luma, every row constant
        let rows = [0.0f32, 0.25, 1.0, 0.5];
        let width = 4usize;
        let stride = width * 4;
        let values: Vec<f32> = rows
            .iter()
            .flat_map(|&v| std::iter::repeat(v).take(width))
            .collect();
        let src = to_bytes_f32(&values);

        for (even_mode, odd_mode) in FIELD_PAIRS {
            let mut even = vec![0u8; src.len()];
            field_pass(even_mode)(&src, &mut even, width, 4, stride, stride);
            let mut odd = vec![0u8; src.len()];
            field_pass(odd_mode)(&src, &mut odd, width, 4, stride, stride);

            let even = from_bytes_f32(&even);
            let odd = from_bytes_f32(&odd);
            for y in 0..4 {
                let e = &even[y * width..(y + 1) * width];
                let o = &odd[y * width..(y + 1) * width];
                let (want_e, want_o) = match y {
                    // kept by both passes
                    0 | 3 => (rows[y], rows[y]),
                    // rebuilt only by the odd pass
                    1 => (rows[y], 0.5),
                    // rebuilt only by the even pass
                    _ => (0.375, rows[y]),
                };
                assert!(e.iter().all(|&v| v == want_e), "mode {even_mode}, row {y}");
                assert!(o.iter().all(|&v| v == want_o), "mode {odd_mode}, row {y}");
            }
        }
    }

    #[test]
    fn test_field_border_mean_rounds_up() {
        // 3 rows, the middle row is rebuilt by the odd pass
        let src: Vec<u8> = vec![
            1, 1, 1, //
            9, 9, 9, //
            2, 2, 2,
        ];
        let mut dst = vec![0u8; 9];
        process_odd_rows::<Pixel8, 14>(&src, &mut dst, 3, 3, 3, 3);
        assert_eq!(dst, vec![1, 1, 1, 2, 2, 2, 2, 2, 2]);
    }
}
