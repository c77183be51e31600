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
use crate::neighbourhood::Neighbourhood;
use crate::numerics::{adds, adds_diff, clip, neighbourdiff, sharpen, subs, subs_diff};
use crate::rg_support::{RgAccum, RgFormat, RgMode};
use num_traits::AsPrimitive;
use std::cmp::Ordering;

#[inline(always)]
fn min_max<V: RgAccum>(a: V, b: V) -> (V, V) {
    (a.min(b), a.max(b))
}

/// Pairs of opposite neighbours: diagonal, vertical, anti-diagonal, horizontal
#[inline(always)]
fn lines<V: Copy>(n: &Neighbourhood<V>) -> [(V, V); 4] {
    [(n.a1, n.a8), (n.a2, n.a7), (n.a3, n.a6), (n.a4, n.a5)]
}

#[inline(always)]
fn line_bounds<V: RgAccum>(n: &Neighbourhood<V>) -> [(V, V); 4] {
    lines(n).map(|(x, y)| min_max(x, y))
}

/// Index of the smallest score, ties go horizontal, vertical, anti-diagonal, diagonal
#[inline(always)]
fn pick_line<V: RgAccum>(scores: [V; 4]) -> usize {
    let mindiff = scores[0].min(scores[1]).min(scores[2]).min(scores[3]);
    if mindiff == scores[3] {
        3
    } else if mindiff == scores[1] {
        1
    } else if mindiff == scores[2] {
        2
    } else {
        0
    }
}

#[inline(always)]
fn sorted_neighbours<V: RgAccum>(n: &Neighbourhood<V>) -> [V; 8] {
    let mut a = n.neighbours();
    a.sort_unstable_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    a
}

/// Clips center between the largest pair minimum and the smallest pair maximum
#[inline(always)]
fn clip_to_pairs<V: RgAccum, const N: usize>(c: V, pairs: [(V, V); N]) -> V {
    let (mut lower, mut upper) = min_max(pairs[0].0, pairs[0].1);
    for &(x, y) in &pairs[1..] {
        let (lo, hi) = min_max(x, y);
        lower = lower.max(lo);
        upper = upper.min(hi);
    }
    clip(c, lower.min(upper), lower.max(upper))
}

#[inline(always)]
fn neighbour_sum<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    n.a1 + n.a2 + n.a3 + n.a4 + n.a5 + n.a6 + n.a7 + n.a8
}

#[inline(always)]
fn rg_mode1<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let a = n.neighbours();
    let mut lo = a[0];
    let mut hi = a[0];
    for &v in &a[1..] {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    clip(n.c, lo, hi)
}

#[inline(always)]
fn rg_mode_rank<V: RgAccum, const RANK: usize>(n: &Neighbourhood<V>) -> V {
    let sorted = sorted_neighbours(n);
    clip(n.c, sorted[RANK], sorted[7 - RANK])
}

#[inline(always)]
fn rg_mode5<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let clipped = line_bounds(n).map(|(lo, hi)| clip(n.c, lo, hi));
    clipped[pick_line(clipped.map(|v| n.c.distance(v)))]
}

#[inline(always)]
fn rg_mode6<F: RgFormat>(n: &Neighbourhood<F::Acc>) -> F::Acc {
    let bounds = line_bounds(n);
    let clipped = bounds.map(|(lo, hi)| clip(n.c, lo, hi));
    let mut scores = [F::Acc::ZERO; 4];
    for i in 0..4 {
        let range = bounds[i].1 - bounds[i].0;
        scores[i] = adds_diff::<F>(n.c.distance(clipped[i]).double(), range);
    }
    clipped[pick_line(scores)]
}

#[inline(always)]
fn rg_mode7<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let bounds = line_bounds(n);
    let clipped = bounds.map(|(lo, hi)| clip(n.c, lo, hi));
    let mut scores = [V::ZERO; 4];
    for i in 0..4 {
        scores[i] = n.c.distance(clipped[i]) + (bounds[i].1 - bounds[i].0);
    }
    clipped[pick_line(scores)]
}

#[inline(always)]
fn rg_mode8<F: RgFormat>(n: &Neighbourhood<F::Acc>) -> F::Acc {
    let bounds = line_bounds(n);
    let clipped = bounds.map(|(lo, hi)| clip(n.c, lo, hi));
    let mut scores = [F::Acc::ZERO; 4];
    for i in 0..4 {
        let range = bounds[i].1 - bounds[i].0;
        scores[i] = adds_diff::<F>(n.c.distance(clipped[i]), range.double());
    }
    clipped[pick_line(scores)]
}

#[inline(always)]
fn rg_mode9<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let bounds = line_bounds(n);
    let (lo, hi) = bounds[pick_line(bounds.map(|(lo, hi)| hi - lo))];
    clip(n.c, lo, hi)
}

#[inline(always)]
fn rg_mode10<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let a = n.neighbours();
    let d = a.map(|v| n.c.distance(v));
    let mut mindiff = d[0];
    for &v in &d[1..] {
        mindiff = mindiff.min(v);
    }
    for i in [6usize, 7, 5, 1, 2, 0, 4] {
        if mindiff == d[i] {
            return a[i];
        }
    }
    a[3]
}

#[inline(always)]
fn rg_mode11<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let sum = n.c.double().double()
        + (n.a2 + n.a4 + n.a5 + n.a7).double()
        + n.a1
        + n.a3
        + n.a6
        + n.a8;
    sum.rounded_div(16)
}

/// Line with the smallest spread among the diagonal, vertical and anti-diagonal ones
#[inline(always)]
fn closest_vertical_line<V: RgAccum>(n: &Neighbourhood<V>) -> (V, V) {
    let d1 = n.a1.distance(n.a8);
    let d2 = n.a2.distance(n.a7);
    let d3 = n.a3.distance(n.a6);
    let mindiff = d1.min(d2).min(d3);
    if mindiff == d2 {
        (n.a2, n.a7)
    } else if mindiff == d3 {
        (n.a3, n.a6)
    } else {
        (n.a1, n.a8)
    }
}

#[inline(always)]
fn rg_mode13_and14<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let (x, y) = closest_vertical_line(n);
    (x + y).rounded_div(2)
}

#[inline(always)]
fn rg_mode15_and16<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let average = ((n.a2 + n.a7).double() + n.a1 + n.a3 + n.a6 + n.a8).rounded_div(8);
    let (x, y) = closest_vertical_line(n);
    let (lo, hi) = min_max(x, y);
    clip(average, lo, hi)
}

#[inline(always)]
fn rg_mode18<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let bounds = line_bounds(n);
    let scores = lines(n).map(|(x, y)| n.c.distance(x).max(n.c.distance(y)));
    let (lo, hi) = bounds[pick_line(scores)];
    clip(n.c, lo, hi)
}

#[inline(always)]
fn rg_mode21<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let sums = lines(n).map(|(x, y)| x + y);
    let mut lo = sums[0].floor_div(2);
    let mut hi = sums[0].rounded_div(2);
    for &s in &sums[1..] {
        lo = lo.min(s.floor_div(2));
        hi = hi.max(s.rounded_div(2));
    }
    clip(n.c, lo, hi)
}

#[inline(always)]
fn rg_mode22<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let avg = lines(n).map(|(x, y)| (x + y).rounded_div(2));
    let mut lo = avg[0];
    let mut hi = avg[0];
    for &v in &avg[1..] {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    clip(n.c, lo, hi)
}

#[inline(always)]
fn rg_mode23<F: RgFormat>(n: &Neighbourhood<F::Acc>) -> F::Acc {
    let mut u = F::Acc::ZERO;
    let mut d = F::Acc::ZERO;
    for (lo, hi) in line_bounds(n) {
        let linediff = hi - lo;
        u = u.max(subs_diff(n.c, hi).min(linediff));
        d = d.max(subs_diff(lo, n.c).min(linediff));
    }
    adds::<F>(subs::<F>(n.c, u), d)
}

#[inline(always)]
fn rg_mode24<F: RgFormat>(n: &Neighbourhood<F::Acc>) -> F::Acc {
    let mut u = F::Acc::ZERO;
    let mut d = F::Acc::ZERO;
    for (lo, hi) in line_bounds(n) {
        let linediff = hi - lo;
        let tu = subs_diff(n.c, hi);
        u = u.max(tu.min(subs_diff(linediff, tu)));
        let td = subs_diff(lo, n.c);
        d = d.max(td.min(subs_diff(linediff, td)));
    }
    adds::<F>(subs::<F>(n.c, u), d)
}

#[inline(always)]
fn rg_mode25<F: RgFormat>(n: &Neighbourhood<F::Acc>) -> F::Acc {
    let mut minus = F::DIFF_MAX;
    let mut plus = F::DIFF_MAX;
    for v in n.neighbours() {
        let (m, p) = neighbourdiff::<F>(n.c, v);
        minus = minus.min(m);
        plus = plus.min(p);
    }
    sharpen::<F>(n.c, minus, plus)
}

#[inline(always)]
fn ring<V: Copy>(n: &Neighbourhood<V>) -> [(V, V); 8] {
    [
        (n.a1, n.a2),
        (n.a2, n.a3),
        (n.a3, n.a5),
        (n.a5, n.a8),
        (n.a8, n.a7),
        (n.a7, n.a6),
        (n.a6, n.a4),
        (n.a4, n.a1),
    ]
}

#[inline(always)]
fn rg_mode26<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    clip_to_pairs(n.c, ring(n))
}

#[inline(always)]
fn rg_mode27<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    clip_to_pairs(
        n.c,
        [
            (n.a1, n.a8),
            (n.a1, n.a2),
            (n.a7, n.a8),
            (n.a2, n.a7),
            (n.a2, n.a3),
            (n.a6, n.a7),
            (n.a3, n.a6),
            (n.a3, n.a5),
            (n.a4, n.a6),
            (n.a4, n.a5),
            (n.a5, n.a8),
            (n.a1, n.a4),
        ],
    )
}

#[inline(always)]
fn rg_mode28<V: RgAccum>(n: &Neighbourhood<V>) -> V {
    let r = ring(n);
    let l = lines(n);
    clip_to_pairs(
        n.c,
        [
            r[0], r[1], r[2], r[3], r[4], r[5], r[6], r[7], l[0], l[2], l[1], l[3],
        ],
    )
}

/// Applies one mode to a widened square, result is already saturated.
#[inline(always)]
pub(crate) fn rg_apply<F: RgFormat>(mode: RgMode, n: &Neighbourhood<F::Acc>) -> F::Acc {
    match mode {
        RgMode::Copy => n.c,
        RgMode::ClipMinMax1 => rg_mode1(n),
        RgMode::ClipMinMax2 => rg_mode_rank::<F::Acc, 1>(n),
        RgMode::ClipMinMax3 => rg_mode_rank::<F::Acc, 2>(n),
        RgMode::Median => rg_mode_rank::<F::Acc, 3>(n),
        RgMode::LineClipClosest => rg_mode5(n),
        RgMode::LineClipWeightedChange => rg_mode6::<F>(n),
        RgMode::LineClipWeighted => rg_mode7(n),
        RgMode::LineClipWeightedRange => rg_mode8::<F>(n),
        RgMode::LineClipMinRange => rg_mode9(n),
        RgMode::ClosestNeighbour => rg_mode10(n),
        RgMode::Blur | RgMode::BlurAlt => rg_mode11(n),
        RgMode::BobEvenClosest | RgMode::BobOddClosest => rg_mode13_and14(n),
        RgMode::BobEvenInterpolate | RgMode::BobOddInterpolate => rg_mode15_and16(n),
        RgMode::LineClipExtremes => clip_to_pairs(n.c, lines(n)),
        RgMode::LineClipMaxDistance => rg_mode18(n),
        RgMode::NeighbourMean => neighbour_sum(n).rounded_div(8),
        RgMode::SquareMean => (neighbour_sum(n) + n.c).rounded_div(9),
        RgMode::LineAverageClip => rg_mode21(n),
        RgMode::LineAverageClipRounded => rg_mode22(n),
        RgMode::EdgeHaloRemoval => rg_mode23::<F>(n),
        RgMode::EdgeHaloRemovalSoft => rg_mode24::<F>(n),
        RgMode::MinimalSharpen => rg_mode25::<F>(n),
        RgMode::RingClip => rg_mode26(n),
        RgMode::RingLineClip => rg_mode27(n),
        RgMode::RingCrossClip => rg_mode28(n),
    }
}

/// Mode kernel: filters the sample at byte offset `center` of `src`.
///
/// Reads only the 3x3 square around `center`, rows are `stride` bytes apart.
#[inline(always)]
pub(crate) fn rg_kernel<F: RgFormat, const MODE: u8>(
    src: &[u8],
    center: usize,
    stride: usize,
) -> F::Pixel {
    let mode: RgMode = MODE.into();
    let n = Neighbourhood::<F::Pixel>::load(src, center, stride).widen::<F::Acc>();
    rg_apply::<F>(mode, &n).as_()
}
