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
use crate::dispatch::select_processor;
use crate::images::{RgPlane, RgPlaneMut};
use crate::rg_error::{check_mode_fits, MismatchedSize};
use crate::rg_support::{ColorFamily, PlaneRole, RgMode, SampleFormat};
use crate::RgError;
#[cfg(feature = "rayon")]
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator,
    ParallelIterator,
};
use tracing::{debug, trace};

/// Spatial denoiser applying one mode to every plane of a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RemoveGrain {
    pub mode: RgMode,
    pub format: SampleFormat,
    pub color_family: ColorFamily,
}

fn check_plane_pair(
    mode: RgMode,
    format: SampleFormat,
    src: &RgPlane,
    dst: &RgPlaneMut,
) -> Result<(), RgError> {
    src.check_constraints(format)?;
    dst.check_constraints(format)?;
    if src.width != dst.width || src.height != dst.height {
        return Err(RgError::DimensionsMismatch);
    }
    check_mode_fits(mode, src.width, src.height)
}

fn run_plane(
    mode: RgMode,
    format: SampleFormat,
    role: PlaneRole,
    src: &RgPlane,
    dst: &mut RgPlaneMut,
) {
    let processor = select_processor(format, role, mode);
    processor(
        src.data,
        dst.data.as_mut(),
        src.width as usize,
        src.height as usize,
        src.stride as usize,
        dst.stride as usize,
    );
}

impl RemoveGrain {
    pub fn new(mode: RgMode, format: SampleFormat, color_family: ColorFamily) -> Self {
        RemoveGrain {
            mode,
            format,
            color_family,
        }
    }

    /// Builds the filter from loosely typed host arguments.
    ///
    /// Absent mode falls back to [RgMode::default]. Mode is validated before the format.
    pub fn from_raw(
        mode: Option<i32>,
        bytes_per_sample: u32,
        bits_per_sample: u32,
        color_family: ColorFamily,
    ) -> Result<Self, RgError> {
        let mode = match mode {
            Some(mode) => RgMode::try_from(mode)?,
            None => RgMode::default(),
        };
        let format = SampleFormat::new(bytes_per_sample, bits_per_sample)?;
        Ok(RemoveGrain::new(mode, format, color_family))
    }

    #[inline]
    pub fn plane_role(&self, plane_index: usize) -> PlaneRole {
        PlaneRole::for_plane(plane_index, self.color_family, self.format)
    }

    fn filter_plane(&self, plane_index: usize, src: &RgPlane, dst: &mut RgPlaneMut) {
        let role = self.plane_role(plane_index);
        trace!(
            plane = plane_index,
            ?role,
            width = src.width,
            height = src.height,
            "Filtering plane"
        );
        run_plane(self.mode, self.format, role, src, dst);
    }

    /// Filters plane number `plane_index` of a frame, the index selects the plane role.
    pub fn process_plane(
        &self,
        plane_index: usize,
        src: &RgPlane,
        dst: &mut RgPlaneMut,
    ) -> Result<(), RgError> {
        check_plane_pair(self.mode, self.format, src, dst)?;
        self.filter_plane(plane_index, src, dst);
        Ok(())
    }

    /// Filters every plane of a frame.
    ///
    /// All planes are validated before anything is written.
    pub fn process_frame(&self, src: &[RgPlane], dst: &mut [RgPlaneMut]) -> Result<(), RgError> {
        if src.len() != dst.len() {
            return Err(RgError::PlaneCountMismatch(MismatchedSize {
                expected: src.len(),
                received: dst.len(),
            }));
        }
        for (src_plane, dst_plane) in src.iter().zip(dst.iter()) {
            check_plane_pair(self.mode, self.format, src_plane, dst_plane)?;
        }

        debug!(
            mode = self.mode as u8,
            format = ?self.format,
            planes = src.len(),
            "RemoveGrain frame"
        );

        let iter;
        #[cfg(feature = "rayon")]
        {
            iter = src.par_iter().zip(dst.par_iter_mut()).enumerate();
        }
        #[cfg(not(feature = "rayon"))]
        {
            iter = src.iter().zip(dst.iter_mut()).enumerate();
        }
        iter.for_each(|(plane_index, (src_plane, dst_plane))| {
            self.filter_plane(plane_index, src_plane, dst_plane);
        });
        Ok(())
    }
}

/// Filters a single plane with explicit role, without a [RemoveGrain] value.
pub fn remove_grain_plane(
    src: &RgPlane,
    dst: &mut RgPlaneMut,
    mode: RgMode,
    format: SampleFormat,
    role: PlaneRole,
) -> Result<(), RgError> {
    check_plane_pair(mode, format, src, dst)?;
    run_plane(mode, format, role, src, dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use crate::rg_support::RgSample;
    use rand::Rng;

    #[test]
    fn test_from_raw() {
        let rg = RemoveGrain::from_raw(None, 1, 8, ColorFamily::Gray).unwrap();
        assert_eq!(rg.mode, RgMode::ClipMinMax3);
        assert_eq!(rg.format, SampleFormat::U8);
        let rg = RemoveGrain::from_raw(Some(17), 2, 14, ColorFamily::Yuv).unwrap();
        assert_eq!(rg.mode, RgMode::LineClipExtremes);
        assert_eq!(rg.format, SampleFormat::U14);
        assert!(matches!(
            RemoveGrain::from_raw(Some(29), 3, 24, ColorFamily::Yuv),
            Err(RgError::InvalidMode(29))
        ));
        assert!(matches!(
            RemoveGrain::from_raw(Some(1), 2, 11, ColorFamily::Yuv),
            Err(RgError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_copy_constant_plane() {
        let data = vec![100u8; 25];
        let src = RgPlane {
            data: &data,
            stride: 5,
            width: 5,
            height: 5,
        };
        let mut dst = RgPlaneMut::alloc(5, 5, SampleFormat::U8);
        let rg = RemoveGrain::new(RgMode::Copy, SampleFormat::U8, ColorFamily::Gray);
        rg.process_plane(0, &src, &mut dst).unwrap();
        assert!(dst.data.borrow().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_small_plane_needs_copy_mode() {
        let data = vec![7u8; 4];
        let src = RgPlane {
            data: &data,
            stride: 2,
            width: 2,
            height: 2,
        };
        let mut dst = RgPlaneMut::alloc(2, 2, SampleFormat::U8);
        let rg = RemoveGrain::new(RgMode::Median, SampleFormat::U8, ColorFamily::Gray);
        assert!(matches!(
            rg.process_plane(0, &src, &mut dst),
            Err(RgError::PlaneTooSmall { .. })
        ));
        let rg = RemoveGrain::new(RgMode::Copy, SampleFormat::U8, ColorFamily::Gray);
        assert!(rg.process_plane(0, &src, &mut dst).is_ok());
        assert_eq!(dst.data.borrow(), &data[..]);
    }

    #[test]
    fn test_frame_validates_before_writing() {
        let luma = vec![50u8; 16];
        let chroma = vec![50u8; 3];
        let src = [
            RgPlane {
                data: &luma,
                stride: 4,
                width: 4,
                height: 4,
            },
            RgPlane {
                data: &chroma,
                stride: 2,
                width: 2,
                height: 2,
            },
        ];
        let mut dst = [
            RgPlaneMut::alloc(4, 4, SampleFormat::U8),
            RgPlaneMut::alloc(2, 2, SampleFormat::U8),
        ];
        let rg = RemoveGrain::new(RgMode::Copy, SampleFormat::U8, ColorFamily::Yuv);
        assert!(matches!(
            rg.process_frame(&src, &mut dst),
            Err(RgError::PlaneSizeMismatch(_))
        ));
        assert!(dst[0].data.borrow().iter().all(|&v| v == 0));

        assert!(matches!(
            rg.process_frame(&src[..1], &mut dst),
            Err(RgError::PlaneCountMismatch(MismatchedSize {
                expected: 1,
                received: 2
            }))
        ));
    }

    #[test]
    fn test_float_frame_uses_chroma_bounds() {
        let (width, height) = (6u32, 6u32);
        let mut rng = rand::rng();
        let mut planes = vec![vec![0u8; (width * height * 4) as usize]; 3];
        for (index, plane) in planes.iter_mut().enumerate() {
            for i in 0..(width * height) as usize {
                let v: f32 = rng.random_range(0.0..=1.0);
                let v = if index > 0 { v - 0.5 } else { v };
                v.write(plane, i * 4);
            }
        }
        let src: Vec<RgPlane> = planes
            .iter()
            .map(|p| RgPlane {
                data: p,
                stride: width * 4,
                width,
                height,
            })
            .collect();
        let mut dst: Vec<RgPlaneMut> = (0..3)
            .map(|_| RgPlaneMut::alloc(width, height, SampleFormat::F32))
            .collect();
        let rg = RemoveGrain::new(RgMode::EdgeHaloRemoval, SampleFormat::F32, ColorFamily::Yuv);
        rg.process_frame(&src, &mut dst).unwrap();
        for (index, plane) in dst.iter().enumerate() {
            let (lo, hi) = if index > 0 { (-0.5, 0.5) } else { (0., 1.) };
            for i in 0..(width * height) as usize {
                let v = f32::read(plane.data.borrow(), i * 4);
                assert!(v >= lo && v <= hi, "plane {index} produced {v}");
            }
        }
    }

    #[test]
    fn test_free_function_with_padded_planes() {
        let (width, height) = (5u32, 4u32);
        let src_stride = 16u32;
        let dst_stride = 12u32;
        let mut data = vec![0u8; (src_stride * height) as usize];
        for y in 0..height {
            for x in 0..width {
                (1000u16 + (x * y) as u16).write(&mut data, (y * src_stride + x * 2) as usize);
            }
        }
        let src = RgPlane {
            data: &data,
            stride: src_stride,
            width,
            height,
        };
        let mut storage = vec![0u8; (dst_stride * height) as usize];
        {
            let mut dst = RgPlaneMut {
                data: BufferStoreMut::Borrowed(&mut storage),
                stride: dst_stride,
                width,
                height,
            };
            remove_grain_plane(
                &src,
                &mut dst,
                RgMode::Copy,
                SampleFormat::U10,
                PlaneRole::Luma,
            )
            .unwrap();
        }
        for y in 0..height {
            for x in 0..width {
                assert_eq!(
                    u16::read(&storage, (y * dst_stride + x * 2) as usize),
                    1000 + (x * y) as u16
                );
            }
        }
    }
}
