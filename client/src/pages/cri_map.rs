//! Public CRI heatmap with state/district/block drill-down.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page opens on a built-in national overview. Picking a district and
//! pressing "Load Data" replaces it with the backend's block readings for
//! that district; an optional block filter narrows the markers and zooms in.
//! Auto-refresh reloads the same district silently every thirty seconds,
//! keeping the current viewport.

#[cfg(test)]
#[path = "cri_map_test.rs"]
mod cri_map_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::risk_map::{BLOCK_ZOOM, DISTRICT_ZOOM, LOCATE_ZOOM, RiskMap, Viewport};
use crate::net::api;
use crate::net::types::{CriBand, CriPoint, LocationTree};
use crate::util::geo;
use crate::util::poll::poll_every;
use crate::util::time::{format_clock, now_ms};

const AUTO_REFRESH: Duration = Duration::from_secs(30);
const DEFAULT_STATE: &str = "Odisha";
const DEFAULT_DISTRICT: &str = "Khordha";

fn overview_point(block: &str, cri: f64, color: CriBand, lat: f64, lng: f64) -> CriPoint {
    CriPoint { block: block.to_owned(), cri, color, lat, lng, issue_count: None }
}

/// Readings shown before any district is loaded.
pub fn national_overview() -> Vec<CriPoint> {
    vec![
        overview_point("Bhubaneswar Ward 1", 45.0, CriBand::Green, 20.2961, 85.8245),
        overview_point("Saheed Nagar", 78.0, CriBand::Orange, 20.2900, 85.8450),
        overview_point("Patia", 82.0, CriBand::Red, 20.3550, 85.8180),
        overview_point("Cuttack Ward 1", 55.0, CriBand::Orange, 20.4625, 85.8828),
        overview_point("Chauliaganj", 85.0, CriBand::Red, 20.4500, 85.9000),
    ]
}

pub fn initial_viewport() -> Viewport {
    Viewport::new(20.2961, 85.8245, DISTRICT_ZOOM)
}

/// Distinct block names, sorted.
pub fn available_blocks(points: &[CriPoint]) -> Vec<String> {
    let mut blocks: Vec<String> = points.iter().map(|p| p.block.clone()).collect();
    blocks.sort();
    blocks.dedup();
    blocks
}

/// Points shown for the block filter; an empty filter shows everything.
pub fn filter_block(points: &[CriPoint], block: &str) -> Vec<CriPoint> {
    if block.is_empty() {
        return points.to_vec();
    }
    points.iter().filter(|p| p.block == block).cloned().collect()
}

/// Close-up on the first reading of `block`, if it has one.
pub fn block_focus(points: &[CriPoint], block: &str) -> Option<Viewport> {
    points.iter().find(|p| p.block == block).map(|p| Viewport::new(p.lat, p.lng, BLOCK_ZOOM))
}

/// Viewport after a district load. Silent reloads and active block filters
/// keep the current view.
pub fn viewport_after_load(points: &[CriPoint], silent: bool, block: &str) -> Option<Viewport> {
    if silent || !block.is_empty() { None } else { Viewport::around(points) }
}

/// Sorted district names of `state`; unknown states have none.
pub fn districts_for(tree: &LocationTree, state: &str) -> Vec<String> {
    let mut districts = tree.get(state).map(|listing| listing.districts()).unwrap_or_default();
    districts.sort();
    districts
}

/// Page signals written when a fetch completes.
#[derive(Clone, Copy)]
pub struct MapSignals {
    pub viewport: RwSignal<Viewport>,
    pub readings: RwSignal<Vec<CriPoint>>,
    pub last_update: RwSignal<Option<i64>>,
}

impl MapSignals {
    /// Store fetched readings. Writes only, so a torn-down page ignores it.
    pub fn commit(self, points: Vec<CriPoint>, silent: bool, chosen_block: &str, at_ms: i64) {
        if let Some(view) = viewport_after_load(&points, silent, chosen_block) {
            self.viewport.set(view);
        }
        self.readings.set(points);
        self.last_update.set(Some(at_ms));
    }
}

#[component]
pub fn CriMapPage() -> impl IntoView {
    let locations = RwSignal::new(LocationTree::new());
    let state = RwSignal::new(DEFAULT_STATE.to_owned());
    let district = RwSignal::new(DEFAULT_DISTRICT.to_owned());
    let block = RwSignal::new(String::new());
    let readings = RwSignal::new(national_overview());
    let viewport = RwSignal::new(initial_viewport());
    let loading = RwSignal::new(false);
    let auto_refresh = RwSignal::new(false);
    let last_update = RwSignal::new(None::<i64>);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match api::fetch_locations().await {
                Ok(tree) => locations.set(tree),
                Err(e) => leptos::logging::warn!("failed to load locations: {e}"),
            }
        });
    });

    let load = move |silent: bool| async move {
        let name = district.get_untracked();
        if name.is_empty() {
            return;
        }
        // Read before awaiting; the page may be gone when the fetch returns.
        let chosen_block = block.get_untracked();
        if !silent {
            loading.set(true);
        }
        match api::fetch_cri_data(&name).await {
            Ok(points) => {
                let signals = MapSignals { viewport, readings, last_update };
                signals.commit(points, silent, &chosen_block, now_ms());
            }
            Err(e) => leptos::logging::warn!("failed to load map data: {e}"),
        }
        if !silent {
            loading.set(false);
        }
    };

    // Restarted whenever the toggle or district changes; cleanup stops the old loop.
    Effect::new(move |_| {
        if auto_refresh.get() && !district.with(String::is_empty) {
            poll_every(AUTO_REFRESH, move || load(true));
        }
    });

    Effect::new(move |_| {
        let chosen = block.get();
        if let Some(view) = readings.with(|points| block_focus(points, &chosen)) {
            viewport.set(view);
        }
    });

    let locate = move |_| {
        leptos::task::spawn_local(async move {
            match geo::current_position().await {
                Ok(fix) => {
                    notice.set(None);
                    viewport.set(Viewport::new(fix.lat, fix.lng, LOCATE_ZOOM));
                }
                Err(e) => {
                    leptos::logging::warn!("error getting location: {e}");
                    notice.set(Some("Could not access your location.".to_owned()));
                }
            }
        });
    };

    let shown = Signal::derive(move || readings.with(|points| block.with(|b| filter_block(points, b))));
    let highlighted = Signal::derive(move || Some(block.get()).filter(|b| !b.is_empty()));
    let blocks = Memo::new(move |_| readings.with(|points| available_blocks(points)));

    view! {
        <div class="cri-map">
            <div class="cri-map__controls">
                <div class="cri-map__title">
                    <h1>"CRI Heatmap"</h1>
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || auto_refresh.get()
                            on:change=move |ev| auto_refresh.set(event_target_checked(&ev))
                        />
                        <span>"Auto-refresh (30s)"</span>
                    </label>
                    {move || last_update.get().map(|ms| view! { <span class="mono muted">"Updated: " {format_clock(ms)}</span> })}
                </div>

                <div class="cri-map__filters">
                    <button class="icon-button" title="Use My Location" on:click=locate>"\u{27A4}"</button>
                    <select
                        prop:value=move || state.get()
                        on:change=move |ev| {
                            state.set(event_target_value(&ev));
                            district.set(String::new());
                            block.set(String::new());
                        }
                    >
                        {move || {
                            let tree = locations.get();
                            if tree.is_empty() {
                                view! { <option>"Loading..."</option> }.into_any()
                            } else {
                                tree.keys()
                                    .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </select>
                    <select
                        prop:value=move || district.get()
                        on:change=move |ev| {
                            district.set(event_target_value(&ev));
                            block.set(String::new());
                        }
                    >
                        <option value="">"Select District"</option>
                        {move || {
                            locations.with(|tree| districts_for(tree, &state.get()))
                                .into_iter()
                                .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <select
                        prop:value=move || block.get()
                        disabled=move || blocks.with(Vec::is_empty)
                        on:change=move |ev| block.set(event_target_value(&ev))
                    >
                        <option value="">"All Blocks/Wards"</option>
                        {move || {
                            blocks.get()
                                .into_iter()
                                .map(|b| view! { <option value=b.clone()>{b.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <button
                        class="button"
                        disabled=move || loading.get()
                        on:click=move |_| leptos::task::spawn_local(load(false))
                    >
                        {move || if loading.get() { "Loading..." } else { "Load Data" }}
                    </button>
                    <Show when=move || !block.with(String::is_empty)>
                        <button
                            class="button button--ghost"
                            on:click=move |_| {
                                block.set(String::new());
                                viewport.update(|v| v.zoom = DISTRICT_ZOOM);
                            }
                        >
                            "Clear Filter"
                        </button>
                    </Show>
                </div>
                {move || notice.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </div>

            <RiskMap points=shown viewport=viewport selected=highlighted/>
        </div>
    }
}
