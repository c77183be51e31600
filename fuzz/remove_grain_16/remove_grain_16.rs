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
use rgtools::{ColorFamily, RemoveGrain, RgPlane, RgPlaneMut};

fuzz_target!(|data: (u8, u8, u8, u8, u16)| {
    fuzz_remove_grain(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_remove_grain(i_width: u8, i_height: u8, mode: u8, depth: u8, y_value: u16) {
    if i_height < 3 || i_width < 3 {
        return;
    }
    let bits = [10, 12, 14, 16][depth as usize % 4];
    let Ok(filter) = RemoveGrain::from_raw(Some(mode as i32 % 29), 2, bits, ColorFamily::Yuv)
    else {
        return;
    };
    let max_value = ((1u32 << bits) - 1) as u16;

    let width = i_width as usize;
    let height = i_height as usize;
    let mut plane = vec![0u8; width * height * 2];
    for (i, sample) in plane.chunks_exact_mut(2).enumerate() {
        let v = if i % 3 == 0 {
            max_value
        } else {
            y_value.min(max_value)
        };
        sample.copy_from_slice(&v.to_ne_bytes());
    }

    let src = RgPlane {
        data: &plane,
        stride: i_width as u32 * 2,
        width: i_width as u32,
        height: i_height as u32,
    };
    let mut dst = RgPlaneMut::alloc(i_width as u32, i_height as u32, filter.format);
    filter.process_plane(0, &src, &mut dst).unwrap();

    for sample in dst.data.borrow().chunks_exact(2) {
        assert!(u16::from_ne_bytes([sample[0], sample[1]]) <= max_value);
    }
}
