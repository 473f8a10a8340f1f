// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::Path;

use plotters::prelude::*;

use crate::errors::{MineError, MineResult};
use crate::pairwise::StatisticMatrix;

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Diverging blue-grey-red colour for `t` in `[0, 1]`.
fn coolwarm(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let (from, to, s) = if t < 0.5 { (COOL, NEUTRAL, t * 2.0) } else { (NEUTRAL, WARM, (t - 0.5) * 2.0) };
    let lerp = |a: f64, b: f64| (a + (b - a) * s).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn plot_err<E: std::fmt::Display>(e: E) -> MineError {
    MineError::Plot(e.to_string())
}

/// Render `matrix` as a PNG heatmap, rows and columns sorted by label.
///
/// Colours span the matrix's own min..max range.
pub fn heatmap(matrix: &StatisticMatrix, title: &str, path: impl AsRef<Path>) -> MineResult<()> {
    let k = matrix.labels.len();
    if k == 0 {
        return Err(MineError::EmptyTable);
    }
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| matrix.labels[a].cmp(&matrix.labels[b]));
    let sorted_labels: Vec<String> = order.iter().map(|&i| matrix.labels[i].clone()).collect();

    let (lo, hi) = matrix
        .values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = if hi > lo { hi - lo } else { 1.0 };

    let side = (120 + 40 * k as u32).max(400);
    let root = BitMapBackend::new(path.as_ref(), (side, side)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let n = k as i32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0i32..n, n..0i32)
        .map_err(plot_err)?;

    let label_at = |v: &i32| sorted_labels.get(*v as usize).cloned().unwrap_or_default();
    chart
        .configure_mesh()
        .x_labels(k)
        .y_labels(k)
        .x_label_offset(20)
        .y_label_offset(-20)
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&label_at)
        .y_label_formatter(&label_at)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(order.iter().enumerate().flat_map(|(r, &i)| {
            order.iter().enumerate().map(move |(c, &j)| {
                let v = matrix.values[(i, j)];
                let (x, y) = (c as i32, r as i32);
                Rectangle::new([(x, y), (x + 1, y + 1)], coolwarm((v - lo) / span).filled())
            })
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("heatmap saved under {}", path.as_ref().display());
    Ok(())
}
