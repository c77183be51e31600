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
#![forbid(unsafe_code)]
use crate::rg_support::{RgAccum, RgFormat};

#[inline(always)]
/// Clamps value into `[minimum, maximum]`
pub(crate) fn clip<V: RgAccum>(val: V, minimum: V, maximum: V) -> V {
    val.min(maximum).max(minimum)
}

#[inline(always)]
/// Saturating subtraction against the format lower bound
pub(crate) fn subs<F: RgFormat>(x: F::Acc, y: F::Acc) -> F::Acc {
    (x - y).max(F::PIXEL_MIN)
}

#[inline(always)]
/// Saturating subtraction flooring at zero, for unsigned difference magnitudes
pub(crate) fn subs_diff<V: RgAccum>(x: V, y: V) -> V {
    (x - y).max(V::ZERO)
}

#[inline(always)]
/// Saturating addition against the format upper bound
pub(crate) fn adds<F: RgFormat>(x: F::Acc, y: F::Acc) -> F::Acc {
    (x + y).min(F::PIXEL_MAX)
}

#[inline(always)]
/// Saturating addition of difference magnitudes, float caps at 1 for both roles
pub(crate) fn adds_diff<F: RgFormat>(x: F::Acc, y: F::Acc) -> F::Acc {
    (x + y).min(F::DIFF_MAX)
}

/// Moves `center` by at most half of the smallest neighbour distance.
///
/// `minus` and `plus` are the smallest distances to neighbours below and above
/// the center as produced by [neighbourdiff].
#[inline(always)]
pub(crate) fn sharpen<F: RgFormat>(center: F::Acc, minus: F::Acc, plus: F::Acc) -> F::Acc {
    let mp_diff = subs_diff(minus, plus);
    let pm_diff = subs_diff(plus, minus);
    let m_per2 = minus.half();
    let p_per2 = plus.half();
    let min_1 = p_per2.min(mp_diff);
    let min_2 = m_per2.min(pm_diff);
    subs::<F>(adds::<F>(center, min_1), min_2)
}

/// Signed relation of `center` and one `neighbour` as `(minus, plus)`.
///
/// Equal samples yield `(0, 0)`. Otherwise the distance goes to the side the
/// neighbour lies on and the other side gets `DIFF_MAX`, so a minimum taken
/// over several neighbours ignores it.
#[inline(always)]
pub(crate) fn neighbourdiff<F: RgFormat>(center: F::Acc, neighbour: F::Acc) -> (F::Acc, F::Acc) {
    if center == neighbour {
        return (F::Acc::ZERO, F::Acc::ZERO);
    }
    let minus = if neighbour < center {
        center - neighbour
    } else {
        F::DIFF_MAX
    };
    let plus = if center < neighbour {
        neighbour - center
    } else {
        F::DIFF_MAX
    };
    (minus, plus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rg_support::{Pixel16, Pixel8, PixelF32};
    use rand::Rng;

    fn check_int_saturation<F: RgFormat<Acc = i32>>() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x = rng.random_range(0..=F::PIXEL_MAX);
            let y = rng.random_range(0..=F::PIXEL_MAX);
            let a = adds::<F>(x, y);
            let s = subs::<F>(x, y);
            assert!(a <= F::PIXEL_MAX && a >= x, "adds({x}, {y}) = {a}");
            assert!(s >= 0 && s <= x, "subs({x}, {y}) = {s}");
        }
        assert_eq!(adds::<F>(F::PIXEL_MAX, F::PIXEL_MAX), F::PIXEL_MAX);
        assert_eq!(subs::<F>(0, F::PIXEL_MAX), 0);
    }

    #[test]
    fn test_adds_subs_8bit_exhaustive() {
        for x in 0..256 {
            for y in 0..256 {
                let a = adds::<Pixel8>(x, y);
                let s = subs::<Pixel8>(x, y);
                assert_eq!(a, if x + y > 255 { 255 } else { x + y });
                assert_eq!(s, if x > y { x - y } else { 0 });
            }
        }
    }

    #[test]
    fn test_adds_subs_high_bit_depth() {
        check_int_saturation::<Pixel16<10>>();
        check_int_saturation::<Pixel16<12>>();
        check_int_saturation::<Pixel16<14>>();
        check_int_saturation::<Pixel16<16>>();
    }

    #[test]
    fn test_adds_subs_float() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x: f32 = rng.random_range(0.0..=1.0);
            let y: f32 = rng.random_range(0.0..=1.0);
            let a = adds::<PixelF32<false>>(x, y);
            let s = subs::<PixelF32<false>>(x, y);
            assert!((0.0..=1.0).contains(&a));
            assert!((0.0..=1.0).contains(&s));

            // chroma samples are signed, operands stay difference magnitudes
            let xc = x - 0.5;
            let a = adds::<PixelF32<true>>(xc, y);
            let s = subs::<PixelF32<true>>(xc, y);
            assert!((-0.5..=0.5).contains(&a), "adds({xc}, {y}) = {a}");
            assert!((-0.5..=0.5).contains(&s), "subs({xc}, {y}) = {s}");
        }
    }

    #[test]
    fn test_diff_variants_ignore_chroma_offset() {
        assert_eq!(subs_diff(-0.4f32, 0.3), 0.);
        assert_eq!(adds_diff::<PixelF32<true>>(0.25, 0.5), 0.75);
        assert_eq!(adds_diff::<PixelF32<true>>(0.8, 0.3), 1.);
        assert_eq!(adds_diff::<Pixel16<10>>(1000, 300), 1023);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(300, 0, 255), 255);
        assert_eq!(clip(-3, 0, 255), 0);
        assert_eq!(clip(17, 10, 20), 17);
        assert_eq!(clip(0.7f32, -0.5, 0.5), 0.5);
    }

    #[test]
    fn test_sharpen_known_values() {
        assert_eq!(sharpen::<Pixel8>(100, 10, 255), 95);
        assert_eq!(sharpen::<Pixel8>(100, 255, 10), 105);
        assert_eq!(sharpen::<Pixel8>(100, 0, 0), 100);
        assert_eq!(sharpen::<Pixel8>(250, 255, 20), 255);
        assert_eq!(sharpen::<PixelF32<true>>(0.45, 1., 0.2), 0.5);
    }

    fn check_sharpen_bounds<F: RgFormat<Acc = i32>>() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let c = rng.random_range(0..=F::PIXEL_MAX);
            let m = rng.random_range(0..=F::DIFF_MAX);
            let p = rng.random_range(0..=F::DIFF_MAX);
            let v = sharpen::<F>(c, m, p);
            assert!(v >= 0 && v <= F::PIXEL_MAX, "sharpen({c}, {m}, {p}) = {v}");
        }
    }

    #[test]
    fn test_sharpen_bounded() {
        check_sharpen_bounds::<Pixel8>();
        check_sharpen_bounds::<Pixel16<10>>();
        check_sharpen_bounds::<Pixel16<12>>();
        check_sharpen_bounds::<Pixel16<14>>();
        check_sharpen_bounds::<Pixel16<16>>();

        let mut rng = rand::rng();
        for _ in 0..20000 {
            let c: f32 = rng.random_range(-0.5..=0.5);
            let m: f32 = rng.random_range(0.0..=1.0);
            let p: f32 = rng.random_range(0.0..=1.0);
            let v = sharpen::<PixelF32<true>>(c, m, p);
            assert!((-0.5..=0.5).contains(&v));
            let v = sharpen::<PixelF32<false>>(c + 0.5, m, p);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_neighbourdiff() {
        for c in 0..256 {
            assert_eq!(neighbourdiff::<Pixel8>(c, c), (0, 0));
        }
        assert_eq!(neighbourdiff::<Pixel8>(9, 4), (5, 255));
        assert_eq!(neighbourdiff::<Pixel8>(2, 3), (255, 1));
        assert_eq!(neighbourdiff::<Pixel16<12>>(1, 4000), (4095, 3999));
        assert_eq!(neighbourdiff::<PixelF32<true>>(-0.25, -0.25), (0., 0.));
        assert_eq!(neighbourdiff::<PixelF32<true>>(0.25, -0.25), (0.5, 1.));
    }
}
