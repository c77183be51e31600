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
use image::{GenericImageView, ImageBuffer, ImageReader, Luma};
use rgtools::{
    ColorFamily, RemoveGrain, RgError, RgMode, RgPlane, RgPlaneMut, SampleFormat,
};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "./assets/bench.jpg".to_string());
    let mode = args
        .next()
        .map(|v| v.parse::<i32>())
        .transpose()?;

    let img = ImageReader::open(&path)?.decode()?;
    let (width, height) = img.dimensions();

    // 8 bit luma
    let luma = img.to_luma8();
    let filter = RemoveGrain::from_raw(mode, 1, 8, ColorFamily::Gray)?;
    let src = RgPlane {
        data: luma.as_raw(),
        stride: width,
        width,
        height,
    };
    let mut dst = RgPlaneMut::alloc(width, height, SampleFormat::U8);
    let start_time = Instant::now();
    filter.process_plane(0, &src, &mut dst)?;
    println!(
        "RemoveGrain mode {} 8 bit time: {:?}",
        filter.mode as u8,
        start_time.elapsed()
    );
    let out: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, dst.data.borrow().to_vec())
            .ok_or(RgError::ZeroBaseSize)?;
    out.save("removegrain_8.png")?;

    // 16 bit luma, samples are passed as raw bytes
    let luma16 = img.to_luma16();
    let filter16 = RemoveGrain::new(filter.mode, SampleFormat::U16, ColorFamily::Gray);
    let src16 = RgPlane {
        data: bytemuck::cast_slice(luma16.as_raw()),
        stride: width * 2,
        width,
        height,
    };
    let mut dst16 = RgPlaneMut::alloc(width, height, SampleFormat::U16);
    let start_time = Instant::now();
    filter16.process_plane(0, &src16, &mut dst16)?;
    println!(
        "RemoveGrain mode {} 16 bit time: {:?}",
        filter16.mode as u8,
        start_time.elapsed()
    );
    let samples: Vec<u16> = dst16
        .data
        .borrow()
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect();
    let out16: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(width, height, samples).ok_or(RgError::ZeroBaseSize)?;
    out16.save("removegrain_16.png")?;

    // every mode once on the 8 bit plane
    for mode in 0..rgtools::RG_MODES_COUNT as i32 {
        let mode = RgMode::try_from(mode)?;
        let filter = RemoveGrain::new(mode, SampleFormat::U8, ColorFamily::Gray);
        let start_time = Instant::now();
        filter.process_plane(0, &src, &mut dst)?;
        println!("Mode {:?} time: {:?}", mode, start_time.elapsed());
    }

    Ok(())
}
