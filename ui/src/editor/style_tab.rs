use dioxus::prelude::*;

use crate::core::state::ScorecardState;
use crate::core::style::{ColorRole, Dimension, FontFamily};
use crate::t;

fn color_label(role: ColorRole) -> String {
    match role {
        ColorRole::Primary => t!("style-primary-color"),
        ColorRole::Secondary => t!("style-secondary-color"),
        ColorRole::Background => t!("style-background-color"),
        ColorRole::Text => t!("style-text-color"),
    }
}

fn color_id(role: ColorRole) -> &'static str {
    match role {
        ColorRole::Primary => "primary-color",
        ColorRole::Secondary => "secondary-color",
        ColorRole::Background => "background-color",
        ColorRole::Text => "text-color",
    }
}

fn dimension_label(dimension: Dimension) -> String {
    match dimension {
        Dimension::BorderRadius => t!("style-border-radius"),
        Dimension::CardWidth => t!("style-card-width"),
        Dimension::CardHeight => t!("style-card-height"),
        Dimension::FontSize => t!("style-font-size"),
    }
}

fn dimension_id(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::BorderRadius => "border-radius",
        Dimension::CardWidth => "card-width",
        Dimension::CardHeight => "card-height",
        Dimension::FontSize => "font-size",
    }
}

/// Colors, typography and card dimensions.
#[component]
pub fn StyleTab() -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let style = state.read().style.clone();

    rsx! {
        div { class: "editor-tab editor-tab--style",
            div { class: "field-grid",
                for role in ColorRole::ALL {
                    ColorField {
                        key: "{color_id(role)}",
                        role,
                        value: style.color(role).to_string(),
                    }
                }
            }

            hr { class: "editor-tab__separator" }

            div { class: "field-grid",
                div { class: "field",
                    label { class: "field__label", r#for: "font-family", {t!("style-font-family")} }
                    select {
                        id: "font-family",
                        class: "field__input",
                        value: "{style.font_family.name()}",
                        onchange: move |evt: FormEvent| {
                            state.write().style.set_font_family(&evt.value());
                        },
                        for family in FontFamily::ALL {
                            option {
                                key: "{family.name()}",
                                value: "{family.name()}",
                                selected: family == style.font_family,
                                "{family.name()}"
                            }
                        }
                    }
                }
                DimensionField { dimension: Dimension::FontSize, value: style.font_size }
                DimensionField { dimension: Dimension::BorderRadius, value: style.border_radius }
            }

            hr { class: "editor-tab__separator" }

            div { class: "field-grid",
                DimensionField { dimension: Dimension::CardWidth, value: style.card_width }
                DimensionField { dimension: Dimension::CardHeight, value: style.card_height }
            }
        }
    }
}

/// Swatch picker plus a hex text field; invalid hex keeps the current color.
#[component]
fn ColorField(role: ColorRole, value: String) -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let id = color_id(role);

    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{id}", {color_label(role)} }
            div { class: "color-field",
                input {
                    id: "{id}",
                    class: "color-field__swatch",
                    r#type: "color",
                    value: "{value}",
                    oninput: move |evt: FormEvent| {
                        state.write().style.set_color(role, &evt.value());
                    },
                }
                input {
                    class: "field__input color-field__hex",
                    r#type: "text",
                    value: "{value}",
                    spellcheck: "false",
                    oninput: move |evt: FormEvent| {
                        state.write().style.set_color(role, &evt.value());
                    },
                }
            }
        }
    }
}

/// Numeric input committed on change; clamped to the dimension's range.
#[component]
fn DimensionField(dimension: Dimension, value: u32) -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let range = dimension.range();
    let id = dimension_id(dimension);

    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{id}", {dimension_label(dimension)} }
            input {
                id: "{id}",
                class: "field__input",
                r#type: "number",
                min: "{range.min}",
                max: "{range.max}",
                step: "{range.step}",
                value: "{value}",
                onchange: move |evt: FormEvent| {
                    state.write().style.set_dimension(dimension, &evt.value());
                },
            }
        }
    }
}
