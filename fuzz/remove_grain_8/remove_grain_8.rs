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
use rgtools::{ColorFamily, RemoveGrain, RgMode, RgPlane, RgPlaneMut, SampleFormat};

fuzz_target!(|data: (u8, u8, u8, u8, Vec<u8>)| {
    fuzz_remove_grain(data.0, data.1, data.2, data.3, &data.4);
});

fn fuzz_remove_grain(i_width: u8, i_height: u8, mode: u8, padding: u8, noise: &[u8]) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let Ok(filter) = RemoveGrain::from_raw(Some(mode as i32 % 29), 1, 8, ColorFamily::Gray) else {
        return;
    };

    let width = i_width as usize;
    let height = i_height as usize;
    let stride = width + padding as usize % 16;
    let mut plane = vec![0u8; stride * height];
    for (i, v) in plane.iter_mut().enumerate() {
        *v = noise.get(i % noise.len().max(1)).copied().unwrap_or(i as u8);
    }

    let src = RgPlane {
        data: &plane,
        stride: stride as u32,
        width: i_width as u32,
        height: i_height as u32,
    };
    let mut dst = RgPlaneMut::alloc(i_width as u32, i_height as u32, SampleFormat::U8);

    let result = filter.process_plane(0, &src, &mut dst);
    if (width < 3 || height < 3) && filter.mode != RgMode::Copy {
        assert!(result.is_err());
        return;
    }
    result.unwrap();

    for x in 0..width {
        assert_eq!(dst.data.borrow()[x], plane[x]);
    }
}
