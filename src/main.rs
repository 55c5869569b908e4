// src/main.rs — TP.HUB 2026 showcase (Rust + Yew + WASM)
//
// One controller at the root owns the view mode; the nav bar and both content
// trees only ever send `Trigger`s back up.

mod content;
mod mode;
mod views;

use gloo::console::log;
use web_sys::window;
use yew::prelude::*;

use mode::{Trigger, ViewMode};
use views::{HomeView, NavBar, TeamView};

fn sync_document(mode: ViewMode) {
    let Some(w) = window() else { return; };
    w.scroll_to_with_x_and_y(0.0, 0.0);
    if let Some(doc) = w.document() {
        doc.set_title(mode.document_title());
    }
}

/// Log line for a trigger, or `None` when it leaves the mode unchanged.
fn transition_message(from: ViewMode, trigger: Trigger) -> Option<String> {
    let to = trigger.target();
    (from != to).then(|| format!("view: {from} -> {to} ({trigger})"))
}

fn render(mode: ViewMode, on_trigger: &Callback<Trigger>) -> Html {
    match mode {
        ViewMode::Home => html! { <HomeView on_trigger={on_trigger.clone()} /> },
        ViewMode::Team => html! { <TeamView on_trigger={on_trigger.clone()} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let mode = use_reducer(ViewMode::default);

    let on_trigger = {
        let mode = mode.clone();
        Callback::from(move |trigger: Trigger| {
            if let Some(msg) = transition_message(*mode, trigger) {
                log!(msg);
            }
            mode.dispatch(trigger);
        })
    };

    // Back to the top of the page on every swap
    use_effect_with(*mode, |m| {
        sync_document(*m);
        || ()
    });

    html! {
        <div class="page">
            <NavBar mode={*mode} on_trigger={on_trigger.clone()} />
            <main class="stage">
                <div key={mode.key()} class={classes!("view", mode.key())}>
                    { render(*mode, &on_trigger) }
                </div>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
