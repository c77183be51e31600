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

#![no_main]
use libfuzzer_sys::fuzz_target;
use rgtools::{ColorFamily, RemoveGrain, RgPlane, RgPlaneMut, SampleFormat};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_remove_grain(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_remove_grain(i_width: u8, i_height: u8, mode: u8, seed: u8, plane_index: u8) {
    if i_height < 3 || i_width < 3 {
        return;
    }
    let Ok(filter) = RemoveGrain::from_raw(Some(mode as i32 % 29), 4, 32, ColorFamily::Yuv) else {
        return;
    };
    let plane_index = plane_index as usize % 3;
    let offset = if plane_index > 0 { 0.5f32 } else { 0. };

    let width = i_width as usize;
    let height = i_height as usize;
    let mut plane = vec![0u8; width * height * 4];
    for (i, sample) in plane.chunks_exact_mut(4).enumerate() {
        let v = ((i * 31 + seed as usize) % 256) as f32 / 255. - offset;
        sample.copy_from_slice(&v.to_ne_bytes());
    }

    let src = RgPlane {
        data: &plane,
        stride: i_width as u32 * 4,
        width: i_width as u32,
        height: i_height as u32,
    };
    let mut dst = RgPlaneMut::alloc(i_width as u32, i_height as u32, SampleFormat::F32);
    filter.process_plane(plane_index, &src, &mut dst).unwrap();

    for sample in dst.data.borrow().chunks_exact(4) {
        let v = f32::from_ne_bytes([sample[0], sample[1], sample[2], sample[3]]);
        assert!(v >= -offset && v <= 1. - offset);
    }
}
