use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::core::state::ScorecardState;
use crate::core::style::{
    FieldRange, ANIMATION_RANGE, BORDER_WIDTH_RANGE, FILL_OPACITY_RANGE, POINT_RADIUS_RANGE,
};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Toggle {
    Grid,
    Labels,
    Legend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slider {
    PointRadius,
    BorderWidth,
    FillOpacity,
    AnimationDuration,
}

impl Slider {
    fn range(self) -> FieldRange {
        match self {
            Slider::PointRadius => POINT_RADIUS_RANGE,
            Slider::BorderWidth => BORDER_WIDTH_RANGE,
            Slider::FillOpacity => FILL_OPACITY_RANGE,
            Slider::AnimationDuration => ANIMATION_RANGE,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Slider::PointRadius => "point-radius",
            Slider::BorderWidth => "border-width",
            Slider::FillOpacity => "fill-opacity",
            Slider::AnimationDuration => "animation-duration",
        }
    }

    /// Localized label with the current value and its unit.
    fn caption(self, state: &ScorecardState) -> String {
        let chart = &state.chart;
        match self {
            Slider::PointRadius => {
                format!("{}: {}px", t!("chart-point-radius"), chart.point_radius)
            }
            Slider::BorderWidth => format!(
                "{}: {}px",
                t!("chart-border-width"),
                format_number(chart.border_width)
            ),
            Slider::FillOpacity => {
                format!("{}: {}%", t!("chart-fill-opacity"), chart.fill_percent())
            }
            Slider::AnimationDuration => format!(
                "{}: {}ms",
                t!("chart-animation-duration"),
                chart.animation_duration
            ),
        }
    }

    fn value(self, state: &ScorecardState) -> String {
        let chart = &state.chart;
        match self {
            Slider::PointRadius => chart.point_radius.to_string(),
            Slider::BorderWidth => format_number(chart.border_width),
            Slider::FillOpacity => format_number(chart.fill_opacity),
            Slider::AnimationDuration => chart.animation_duration.to_string(),
        }
    }

    fn apply(self, state: &mut ScorecardState, input: &str) {
        let chart = &mut state.chart;
        match self {
            Slider::PointRadius => chart.set_point_radius(input),
            Slider::BorderWidth => chart.set_border_width(input),
            Slider::FillOpacity => chart.set_fill_opacity(input),
            Slider::AnimationDuration => chart.set_animation_duration(input),
        }
    }
}

/// Grid / labels / legend toggles and the four rendering sliders.
#[component]
pub fn ChartTab() -> Element {
    let state = use_context::<Signal<ScorecardState>>();
    let chart = state.read().chart.clone();

    rsx! {
        div { class: "editor-tab editor-tab--chart",
            ToggleRow { toggle: Toggle::Grid, checked: chart.show_grid }
            ToggleRow { toggle: Toggle::Labels, checked: chart.show_labels }
            ToggleRow { toggle: Toggle::Legend, checked: chart.show_legend }

            hr { class: "editor-tab__separator" }

            SliderRow { slider: Slider::PointRadius }
            SliderRow { slider: Slider::BorderWidth }
            SliderRow { slider: Slider::FillOpacity }
            SliderRow { slider: Slider::AnimationDuration }
        }
    }
}

#[component]
fn ToggleRow(toggle: Toggle, checked: bool) -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let (id, label) = match toggle {
        Toggle::Grid => ("show-grid", t!("chart-show-grid")),
        Toggle::Labels => ("show-labels", t!("chart-show-labels")),
        Toggle::Legend => ("show-legend", t!("chart-show-legend")),
    };

    rsx! {
        div { class: "toggle-row",
            label { class: "field__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| {
                    let on = evt.checked();
                    let mut snapshot = state.write();
                    let chart = &mut snapshot.chart;
                    match toggle {
                        Toggle::Grid => chart.show_grid = on,
                        Toggle::Labels => chart.show_labels = on,
                        Toggle::Legend => chart.show_legend = on,
                    }
                },
            }
        }
    }
}

#[component]
fn SliderRow(slider: Slider) -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let range = slider.range();
    let (caption, value) = {
        let snapshot = state.read();
        (slider.caption(&snapshot), slider.value(&snapshot))
    };

    rsx! {
        div { class: "slider-row",
            label { class: "field__label", r#for: "{slider.id()}", "{caption}" }
            input {
                id: "{slider.id()}",
                class: "slider-row__input",
                r#type: "range",
                min: "{range.min}",
                max: "{range.max}",
                step: "{range.step}",
                value: "{value}",
                oninput: move |evt: FormEvent| slider.apply(&mut state.write(), &evt.value()),
            }
        }
    }
}
