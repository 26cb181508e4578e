use gloo_console::log;
use ui::{counter_card::CounterCard, highlight_output::HighlightOutput, source_input::SourceInput, stream_input::StreamInput};
use vitecount::{sample, site::SiteConfig};
use yew::prelude::*;
use yewdux::prelude::*;

pub mod ui;

/// Text fed to the source view. Seeded with the starter component itself.
#[derive(Clone, PartialEq, Store)]
struct HighlightState {
    source: String,
    stream: String,
}

impl Default for HighlightState {
    fn default() -> Self {
        HighlightState {
            source: sample::SOURCE.to_string(),
            stream: sample::stream(),
        }
    }
}

#[function_component]
fn SourceView() -> Html {
    html! {
        <div class="card source-view">
            <SourceInput />
            <StreamInput />
            <HighlightOutput />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <CounterCard config={SiteConfig::default()} />
            <SourceView />
        </>
    }
}

fn main() {
    log!("vitecountx starting");
    yew::Renderer::<App>::new().render();
}
