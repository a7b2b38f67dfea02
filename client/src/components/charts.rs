//! Inline SVG charts for the analytics console.
//!
//! Geometry helpers are pure and unit-tested; the components only bind them
//! to markup. Charts scale to their container through `viewBox`.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::TAU;
use std::fmt::Write as _;

use leptos::prelude::*;

pub const PILLAR_COLORS: [&str; 4] = ["#3B82F6", "#10B981", "#F59E0B", "#6366F1"];

const LINE_WIDTH: f64 = 600.0;
const LINE_HEIGHT: f64 = 240.0;
const LINE_PAD: f64 = 24.0;
const BAR_WIDTH: f64 = 300.0;
const BAR_HEIGHT: f64 = 200.0;
const DONUT_SIZE: f64 = 200.0;

/// Plot `values` across `width`, scaled so the largest value (or 1) touches
/// the top padding and zero sits on the baseline.
#[allow(clippy::cast_precision_loss)]
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    let span_x = width - 2.0 * pad;
    let span_y = height - 2.0 * pad;
    let steps = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + span_x * (i as f64) / steps;
            let y = height - pad - span_y * (v.max(0.0) / max);
            (x, y)
        })
        .collect()
}

pub fn polyline(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.1},{y:.1}");
    }
    out
}

/// Closed area under a line, down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!("M {:.1},{baseline:.1} L {} L {:.1},{baseline:.1} Z", first.0, polyline(points), last.0)
}

/// Fraction of the whole that each value occupies. All-zero input yields zeros.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v.max(0.0) / total).collect()
}

/// SVG path of a doughnut slice from `start` to `end` (fractions of a turn,
/// clockwise from twelve o'clock).
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full-turn arc degenerates to nothing; stop just short of closing.
    let end = if end - start >= 1.0 { start + 0.9999 } else { end };
    let point = |r: f64, t: f64| {
        let angle = t * TAU - TAU / 4.0;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let large = i32::from(end - start > 0.5);
    let (ox0, oy0) = point(outer, start);
    let (ox1, oy1) = point(outer, end);
    let (ix1, iy1) = point(inner, end);
    let (ix0, iy0) = point(inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner} {inner} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

/// Bar heights for `values` within `height`, tallest bar filling it.
pub fn bar_heights(values: &[f64], height: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v.max(0.0) / max * height).collect()
}

/// Filled line chart with x-axis labels.
#[component]
pub fn LineChart(#[prop(into)] labels: Signal<Vec<String>>, #[prop(into)] values: Signal<Vec<f64>>) -> impl IntoView {
    let points = Memo::new(move |_| line_points(&values.get(), LINE_WIDTH, LINE_HEIGHT, LINE_PAD));

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {LINE_WIDTH} {LINE_HEIGHT}")>
            <path class="chart__area" d=move || area_path(&points.get(), LINE_HEIGHT - LINE_PAD)/>
            <polyline class="chart__line" fill="none" points=move || polyline(&points.get())/>
            {move || {
                let labels = labels.get();
                points
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, (x, y))| {
                        let label = labels.get(i).cloned().unwrap_or_default();
                        view! {
                            <circle class="chart__point" cx=x cy=y r="4"/>
                            <text class="chart__tick" x=x y={LINE_HEIGHT - 4.0} text-anchor="middle">{label}</text>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

/// Doughnut with a legend of `(name, value)` slices.
#[component]
pub fn DoughnutChart(#[prop(into)] slices: Signal<Vec<(String, f64)>>) -> impl IntoView {
    let center = DONUT_SIZE / 2.0;
    let outer = center - 4.0;
    let inner = outer * 0.7;

    view! {
        <div class="chart chart--doughnut">
            <svg viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")>
                {move || {
                    let items = slices.get();
                    let values: Vec<f64> = items.iter().map(|(_, v)| *v).collect();
                    let mut start = 0.0;
                    shares(&values)
                        .into_iter()
                        .enumerate()
                        .filter(|(_, share)| *share > 0.0)
                        .map(|(i, share)| {
                            let d = arc_path(center, center, outer, inner, start, start + share);
                            start += share;
                            view! { <path d=d fill={PILLAR_COLORS[i % PILLAR_COLORS.len()]}/> }
                        })
                        .collect_view()
                }}
                <text class="chart__watermark" x=center y=center text-anchor="middle" dy="8">"CRI"</text>
            </svg>
            <ul class="chart__legend">
                {move || {
                    slices
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (name, _))| {
                            let swatch = format!("background:{}", PILLAR_COLORS[i % PILLAR_COLORS.len()]);
                            view! { <li><span class="chart__swatch" style=swatch></span>{name}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Vertical bars of `(label, count)`.
#[component]
pub fn BarChart(#[prop(into)] bars: Signal<Vec<(String, u32)>>) -> impl IntoView {
    let baseline = BAR_HEIGHT - 20.0;

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}")>
            {move || {
                let items = bars.get();
                let values: Vec<f64> = items.iter().map(|(_, n)| f64::from(*n)).collect();
                #[allow(clippy::cast_precision_loss)]
                let slot = BAR_WIDTH / items.len().max(1) as f64;
                bar_heights(&values, baseline - 10.0)
                    .into_iter()
                    .zip(items)
                    .enumerate()
                    .map(|(i, (h, (label, count)))| {
                        #[allow(clippy::cast_precision_loss)]
                        let x = slot * i as f64 + slot / 2.0;
                        view! {
                            <rect class="chart__bar" x={x - 10.0} y={baseline - h} width="20" height=h rx="4">
                                <title>{format!("{label}: {count}")}</title>
                            </rect>
                            <text class="chart__tick" x=x y={BAR_HEIGHT - 4.0} text-anchor="middle">{label}</text>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
