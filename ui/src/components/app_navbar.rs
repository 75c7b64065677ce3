use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Native name of each bundled locale for the switcher.
fn language_name(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        other => other,
    }
}

/// Top bar with the brand and, when more than one locale is bundled, a
/// language switcher.
///
/// Platforms that re-key their routed subtree on language change provide a
/// `Signal<String>` language code through context; the switcher writes the
/// new tag into it so the whole tree re-renders with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided).
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "GoodHelpAI" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang(),
                                    "{language_name(&code)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
