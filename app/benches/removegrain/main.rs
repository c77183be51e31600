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
use criterion::{criterion_group, criterion_main, Criterion};
use rgtools::{ColorFamily, RemoveGrain, RgMode, RgPlane, RgPlaneMut, SampleFormat};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn noisy_plane(format: SampleFormat) -> Vec<u8> {
    let bpp = format.bytes_per_sample();
    let mut data = vec![0u8; WIDTH as usize * HEIGHT as usize * bpp];
    for (i, sample) in data.chunks_exact_mut(bpp).enumerate() {
        let x = i % WIDTH as usize;
        let y = i / WIDTH as usize;
        let v = ((x * 7 + y * 13) ^ (x * y)) & 0xff;
        match format {
            SampleFormat::U8 => sample[0] = v as u8,
            SampleFormat::F32 => sample.copy_from_slice(&(v as f32 / 255.).to_ne_bytes()),
            _ => sample.copy_from_slice(&((v as u16) << (format.bit_depth() - 8)).to_ne_bytes()),
        }
    }
    data
}

fn bench_mode(c: &mut Criterion, format: SampleFormat, mode: RgMode) {
    let data = noisy_plane(format);
    let src = RgPlane {
        data: &data,
        stride: WIDTH * format.bytes_per_sample() as u32,
        width: WIDTH,
        height: HEIGHT,
    };
    let mut dst = RgPlaneMut::alloc(WIDTH, HEIGHT, format);
    let filter = RemoveGrain::new(mode, format, ColorFamily::Gray);
    c.bench_function(&format!("RemoveGrain {:?} mode {}", format, mode as u8), |b| {
        b.iter(|| {
            filter.process_plane(0, &src, &mut dst).unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for mode in [
        RgMode::ClipMinMax1,
        RgMode::Median,
        RgMode::LineClipWeightedChange,
        RgMode::Blur,
        RgMode::BobEvenInterpolate,
        RgMode::SquareMean,
        RgMode::MinimalSharpen,
        RgMode::RingLineClip,
    ] {
        bench_mode(c, SampleFormat::U8, mode);
    }
    bench_mode(c, SampleFormat::U10, RgMode::Median);
    bench_mode(c, SampleFormat::U16, RgMode::EdgeHaloRemoval);
    bench_mode(c, SampleFormat::F32, RgMode::Median);
    bench_mode(c, SampleFormat::F32, RgMode::MinimalSharpen);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
