//! SVG risk map plotting block-level CRI markers.
//!
//! DESIGN
//! ======
//! Markers are projected with spherical Web Mercator around a center/zoom
//! viewport, the same math slippy tile maps use, so zoom levels read the way
//! users expect (12 for a district, 15 for a single block). No tiles are
//! drawn; the background is a plain grid.

#[cfg(test)]
#[path = "risk_map_test.rs"]
mod risk_map_test;

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::net::types::{CriBand, CriPoint};

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 500.0;
const TILE_SIZE: f64 = 256.0;

/// Zoom used when a whole district is shown.
pub const DISTRICT_ZOOM: u8 = 12;
/// Zoom used when the view is narrowed to one block.
pub const BLOCK_ZOOM: u8 = 15;
/// Zoom used after recentring on the browser's position.
pub const LOCATE_ZOOM: u8 = 14;

/// Map center and zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(lat: f64, lng: f64, zoom: u8) -> Self {
        Self { lat, lng, zoom }
    }

    /// District-level view centred on the first point, if any.
    pub fn around(points: &[CriPoint]) -> Option<Self> {
        points.first().map(|p| Self::new(p.lat, p.lng, DISTRICT_ZOOM))
    }

    fn world_size(self) -> f64 {
        TILE_SIZE * f64::from(1u32 << self.zoom.min(20))
    }
}

fn mercator_y(lat: f64) -> f64 {
    let clamped = lat.clamp(-85.05, 85.05).to_radians();
    (PI / 4.0 + clamped / 2.0).tan().ln()
}

/// Screen position of `(lat, lng)` inside a `MAP_WIDTH` x `MAP_HEIGHT` canvas.
pub fn project(view: Viewport, lat: f64, lng: f64) -> (f64, f64) {
    let world = view.world_size();
    let x = (lng - view.lng) / 360.0 * world + MAP_WIDTH / 2.0;
    let y = MAP_HEIGHT / 2.0 - (mercator_y(lat) - mercator_y(view.lat)) / (2.0 * PI) * world;
    (x, y)
}

pub fn marker_radius(selected: bool) -> f64 {
    if selected { 25.0 } else { 20.0 }
}

pub fn zone_label(band: CriBand) -> &'static str {
    match band {
        CriBand::Red => "Critical Risk Zone",
        CriBand::Orange => "Elevated Zone",
        CriBand::Green => "Safe Zone",
    }
}

/// Marker layer over a grid background.
#[component]
pub fn RiskMap(
    #[prop(into)] points: Signal<Vec<CriPoint>>,
    #[prop(into)] viewport: Signal<Viewport>,
    #[prop(into, optional)] selected: Signal<Option<String>>,
) -> impl IntoView {
    let view_box = format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}");

    view! {
        <div class="risk-map">
            <svg class="risk-map__canvas" viewBox=view_box preserveAspectRatio="xMidYMid slice">
                <defs>
                    <pattern id="risk-map-grid" width="40" height="40" patternUnits="userSpaceOnUse">
                        <path d="M 40 0 L 0 0 0 40" fill="none" class="risk-map__gridline"/>
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#risk-map-grid)"/>
                {move || {
                    let view = viewport.get();
                    let chosen = selected.get();
                    points
                        .get()
                        .into_iter()
                        .map(|point| {
                            let is_selected = chosen.as_deref() == Some(point.block.as_str());
                            let (cx, cy) = project(view, point.lat, point.lng);
                            let color = point.color.hex();
                            let tooltip = format!(
                                "{}\nCRI Score: {}\n{}",
                                point.block,
                                point.cri,
                                zone_label(point.color),
                            );
                            view! {
                                <g class="risk-map__marker">
                                    <circle
                                        cx=cx
                                        cy=cy
                                        r=marker_radius(is_selected)
                                        fill=color
                                        stroke=color
                                        fill-opacity=if is_selected { "0.8" } else { "0.6" }
                                        stroke-width=if is_selected { "3" } else { "2" }
                                    >
                                        <title>{tooltip}</title>
                                    </circle>
                                    <text x=cx y=cy class="risk-map__score" text-anchor="middle" dy="4">
                                        {point.cri.round().to_string()}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="risk-map__legend">
                <h4>"Risk Intensity"</h4>
                <p><span class="dot dot--red"></span>"Critical (80+)"</p>
                <p><span class="dot dot--orange"></span>"Elevated (50-79)"</p>
                <p><span class="dot dot--green"></span>"Safe (0-49)"</p>
            </div>
        </div>
    }
}
