//! Pure Yew view components for the media browser widgets.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use mediabrowser_ui::hover::grid_rows;
use mediabrowser_ui::rating::{fill_levels, submitter_name};
use mediabrowser_ui::slider::{clamp_handles, range_label, HandleOrigin};
use mediabrowser_ui::StateStyle;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{NUM_STARS, STAR_LIT_COLOR, STAR_UNLIT_COLOR, THUMBNAIL_COLUMNS};

/// Renders the hover-preview thumbnail grid for one film.
///
/// Images are laid out in rows of [`THUMBNAIL_COLUMNS`]; an empty source
/// list renders nothing, clearing the preview.
pub fn render_thumbnail_grid(sources: &[String]) -> Html {
    if sources.is_empty() {
        return html! {};
    }

    html! {
        <div class="img-grid">
            { grid_rows(sources, THUMBNAIL_COLUMNS).iter().map(|row| {
                html! {
                    <div class="img-grid-row">
                        { row.iter().map(|src| {
                            html! {
                                <img class="film-thumbnail-small" src={src.clone()} />
                            }
                        }).collect::<Html>() }
                    </div>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// A cycling filter button; the state machine lives in the parent, this
/// only renders the current style and reports clicks.
#[derive(Properties, PartialEq)]
pub struct MultistateButtonProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub style: StateStyle,
    pub onactivate: Callback<String>,
}

#[function_component(MultistateButton)]
pub fn multistate_button(props: &MultistateButtonProps) -> Html {
    let onclick = {
        let id = props.id.to_string();
        let onactivate = props.onactivate.clone();
        Callback::from(move |_: MouseEvent| onactivate.emit(id.clone()))
    };

    html! {
        <button
            type="button"
            id={props.id.clone()}
            class="multistate-button"
            style={format!("background-color: {}", props.style.background)}
            {onclick}
        >
            { props.label.clone() }
        </button>
    }
}

/// Dual-handle range slider over a shared scale.
///
/// Controlled component: the parent owns `(low, high)` and receives the
/// clamped pair on every input event.
#[derive(Properties, PartialEq)]
pub struct RangeSliderProps {
    pub label: AttrValue,
    pub scale_min: i32,
    pub scale_max: i32,
    pub low: i32,
    pub high: i32,
    pub min_gap: i32,
    pub onchange: Callback<(i32, i32)>,
}

#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    let on_handle_input = |origin: HandleOrigin| {
        let low = props.low;
        let high = props.high;
        let min_gap = props.min_gap;
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(moved) = input.value().parse::<i32>() {
                let (new_low, new_high) = match origin {
                    HandleOrigin::Min => clamp_handles(origin, moved, high, min_gap),
                    HandleOrigin::Max => clamp_handles(origin, low, moved, min_gap),
                };
                onchange.emit((new_low, new_high));
            }
        })
    };

    html! {
        <div class="form-group range-slider">
            <label>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    class="min"
                    min={props.scale_min.to_string()}
                    max={props.scale_max.to_string()}
                    value={props.low.to_string()}
                    oninput={on_handle_input(HandleOrigin::Min)}
                />
                <input type="range"
                    class="max"
                    min={props.scale_min.to_string()}
                    max={props.scale_max.to_string()}
                    value={props.high.to_string()}
                    oninput={on_handle_input(HandleOrigin::Max)}
                />
                <span class="slider_range">{ range_label(props.low, props.high) }</span>
            </div>
        </div>
    }
}

/// Star-rating control for one film; clicking a star submits the button's
/// form name (`star-<rating>-<pk>`) through `onrate`.
#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub pk: u32,
    pub rating: u8,
    pub onrate: Callback<String>,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <span class="star-rating">
            { fill_levels(props.rating, NUM_STARS).iter().enumerate().map(|(idx, lit)| {
                let star = idx as u8 + 1;
                let name = submitter_name(star, props.pk);
                let colour = if *lit { STAR_LIT_COLOR } else { STAR_UNLIT_COLOR };
                let onclick = {
                    let name = name.clone();
                    let onrate = props.onrate.clone();
                    Callback::from(move |_: MouseEvent| onrate.emit(name.clone()))
                };
                html! {
                    <button
                        type="button"
                        id={name.clone()}
                        name={name}
                        class="star-button"
                        style={format!("color: {}", colour)}
                        {onclick}
                    >
                        { "★" }
                    </button>
                }
            }).collect::<Html>() }
        </span>
    }
}
