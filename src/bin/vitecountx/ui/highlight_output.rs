use gloo_console::error;
use vitecount::highlight;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::HighlightState;

#[function_component]
pub fn HighlightOutput() -> Html {
    let state = use_store_value::<HighlightState>();
    let highlighted = use_memo(
        (state.source.clone(), state.stream.clone()),
        |(source, stream)| highlight::highlight(source, stream),
    );

    let failure = (*highlighted).as_ref().err().cloned();
    use_effect_with(failure, |failure| {
        if let Some(err) = failure {
            error!(err.to_string());
        }
    });

    match &*highlighted {
        Ok(segments) => html! {
            <pre id="highlight_output">
                { for segments.iter().map(|segment| html! {
                    <span style={segment.css_style()}>{segment.text.clone()}</span>
                }) }
            </pre>
        },
        Err(err) => html! {
            <pre id="highlight_output" class="error">{err.to_string()}</pre>
        },
    }
}
