//! Main module for the media browser filter widgets using Yew.
//! Wires the toggle registry, slider, rating, and hover components to the
//! host page's submit boundary.

use gloo_timers::callback::Timeout;
use log::{info, warn};
use mediabrowser_ui::{
    hover::split_sources,
    query::FilterQuery,
    rating::parse_submitter,
    MultistateToggle, StateStyle, StyleTable, ToggleControl,
};
use yew::prelude::*;

mod ajax;
mod components;
mod config;
mod store;

use components::{render_thumbnail_grid, MultistateButton, RangeSlider, StarRating};
use config::*;
use store::REGISTRY;

// ──────────────────────────────────────────────────────────────────────────────
// Demo catalogue data; the real host page renders this server-side.

const GENRE_GROUP: &str = "genrebox";
const ALL_GENRES_ID: &str = "all-genre-box";
const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi"];

struct Film {
    pk: u32,
    title: &'static str,
    year: i32,
    rating: u8,
    description: &'static str,
    thumbnails: &'static str,
}

const FILMS: [Film; 4] = [
    Film {
        pk: 12,
        title: "The Long Reel",
        year: 1974,
        rating: 4,
        description: "A projectionist discovers a film that never ends.",
        thumbnails: "thumbs/12-1.jpg;thumbs/12-2.jpg;thumbs/12-3.jpg;thumbs/12-4.jpg",
    },
    Film {
        pk: 35,
        title: "Station Lights",
        year: 1998,
        rating: 3,
        description: "Two strangers keep missing the same midnight train.",
        thumbnails: "thumbs/35-1.jpg;thumbs/35-2.jpg",
    },
    Film {
        pk: 47,
        title: "Orbit Decay",
        year: 2011,
        rating: 5,
        description: "A salvage crew races a collapsing orbit.",
        thumbnails: "thumbs/47-1.jpg;thumbs/47-2.jpg;thumbs/47-3.jpg;thumbs/47-4.jpg;thumbs/47-5.jpg;thumbs/47-6.jpg;thumbs/47-7.jpg",
    },
    Film {
        pk: 58,
        title: "Paper Harbour",
        year: 2019,
        rating: 0,
        description: "A dockworker folds the town he wishes he lived in.",
        thumbnails: "thumbs/58-1.jpg",
    },
];

fn genre_id(name: &str) -> String {
    format!("genre-{}", name.to_lowercase())
}

fn filter_toggle() -> MultistateToggle {
    MultistateToggle::new(StyleTable::new(NEUTRAL_COLOR, INCLUDE_COLOR, EXCLUDE_COLOR))
}

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Create a debounced callback that cancels any previous pending call
fn debounce_callback<T: 'static>(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    callback: Callback<T>,
    value: T,
    delay_ms: u32,
) {
    // Cancel any existing timer by replacing it
    timer_handle.set(None);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(delay_ms, move || {
        callback.emit(value);
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring the registry, filter bar, film
/// list, and submit boundary.
#[function_component(Main)]
fn main_component() -> Html {
    // Registry version state triggers UI re-render when the store changes
    let registry_version = use_state(|| 0usize);
    let year_low = use_state(|| YEAR_MIN);
    let year_high = use_state(|| YEAR_MAX);
    let ratings = use_state(|| FILMS.map(|_| 0u8));
    let hovered = use_state(|| None::<usize>);
    // Debounce timer handle for filter submission
    let debounce_timer = use_state(|| None::<Timeout>);

    // Seed the ratings row and the control registry on mount
    {
        let ratings = ratings.clone();
        let registry_version = registry_version.clone();
        use_effect_with((), move |_| {
            ratings.set(FILMS.map(|f| f.rating));
            REGISTRY.with(|r| {
                let mut registry = r.borrow_mut();
                registry.insert(ToggleControl::group_controller(ALL_GENRES_ID, GENRE_GROUP));
                for name in GENRES {
                    registry.insert(ToggleControl::new(genre_id(name), Some(GENRE_GROUP)));
                }
            });
            registry_version.set(1);
        });
    }

    // Submit reads current registry and slider state at emit time
    let submit = {
        let year_low = year_low.clone();
        let year_high = year_high.clone();
        Callback::from(move |_: ()| {
            let query = REGISTRY
                .with(|r| FilterQuery::from_group(&r.borrow(), GENRE_GROUP))
                .with_year(*year_low, *year_high);
            match serde_json::to_string(&query) {
                Ok(json) => info!("submitting filter query: {}", json),
                Err(e) => warn!("filter query not serializable: {}", e),
            }
            ajax::submit_filter_query(&query);
        })
    };

    let on_toggle_activate = {
        let registry_version = registry_version.clone();
        let debounce_timer = debounce_timer.clone();
        let submit = submit.clone();
        Callback::from(move |id: String| {
            let toggle = filter_toggle();
            let (new_state, _) = REGISTRY.with(|r| {
                let mut registry = r.borrow_mut();
                let (state, style) = toggle.activate(&mut registry, &id);
                (state, style.clone())
            });
            info!("control {} now {:?}", id, new_state);
            registry_version.set(registry_version.wrapping_add(1));
            debounce_callback(&debounce_timer, submit.clone(), (), DEBOUNCE_MS);
        })
    };

    let on_year_change = {
        let year_low = year_low.clone();
        let year_high = year_high.clone();
        let debounce_timer = debounce_timer.clone();
        let submit = submit.clone();
        Callback::from(move |(low, high): (i32, i32)| {
            year_low.set(low);
            year_high.set(high);
            debounce_callback(&debounce_timer, submit.clone(), (), DEBOUNCE_MS);
        })
    };

    let on_rate = {
        let ratings = ratings.clone();
        Callback::from(move |submitter: String| {
            let Some((rating, pk)) = parse_submitter(&submitter) else {
                return;
            };
            if let Some(idx) = FILMS.iter().position(|f| f.pk == pk) {
                let mut updated = *ratings;
                updated[idx] = rating;
                ratings.set(updated);
            }
            info!("rating film {} at {} stars", pk, rating);
            ajax::submit_star_rating(&submitter);
        })
    };

    // Ensure re-render on registry updates by reading registry_version
    let _ = *registry_version;

    let toggle = filter_toggle();
    let (all_style, genre_styles): (StateStyle, Vec<StateStyle>) = REGISTRY.with(|r| {
        let registry = r.borrow();
        (
            toggle.current_style(&registry, ALL_GENRES_ID).clone(),
            GENRES
                .iter()
                .map(|name| toggle.current_style(&registry, &genre_id(name)).clone())
                .collect(),
        )
    });

    html! {
        <div class="container">
            <h1>{ "Film Browser" }</h1>

            <div class="filter-bar">
                <MultistateButton
                    id={ALL_GENRES_ID}
                    label="All"
                    style={all_style}
                    onactivate={on_toggle_activate.clone()}
                />
                { GENRES.iter().zip(genre_styles.iter()).map(|(name, style)| {
                    html! {
                        <MultistateButton
                            id={genre_id(name)}
                            label={*name}
                            style={style.clone()}
                            onactivate={on_toggle_activate.clone()}
                        />
                    }
                }).collect::<Html>() }
            </div>

            <RangeSlider
                label="Year:"
                scale_min={YEAR_MIN}
                scale_max={YEAR_MAX}
                low={*year_low}
                high={*year_high}
                min_gap={YEAR_MIN_GAP}
                onchange={on_year_change}
            />

            <div id="description-hover" class="description-hover">
                { if let Some(idx) = *hovered {
                    let film = &FILMS[idx];
                    html! {
                        <>
                            <p>{ film.description }</p>
                            { render_thumbnail_grid(&split_sources(film.thumbnails)) }
                        </>
                    }
                } else {
                    html! {}
                } }
            </div>

            <div id="film-list" class="film-list">
                { FILMS.iter().enumerate().map(|(idx, film)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <div
                            id={format!("film-item-{}", film.pk)}
                            class="film-item"
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <span class="film-title">
                                { format!("{} ({})", film.title, film.year) }
                            </span>
                            <StarRating
                                pk={film.pk}
                                rating={(*ratings)[idx]}
                                onrate={on_rate.clone()}
                            />
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
