use vitecount::lex;
use web_sys::{HtmlTextAreaElement, InputEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::HighlightState;

#[function_component]
pub fn SourceInput() -> Html {
    let (state, dispatch) = use_store::<HighlightState>();
    let oninput = dispatch.reduce_mut_callback_with(|state, event: InputEvent| {
        if let Some(text_area_element) = event.target_dyn_into::<HtmlTextAreaElement>() {
            state.source = text_area_element.value();
            state.stream = lex::stream(&state.source);
        }
    });
    html! {
        <textarea {oninput} id="source_input" value={state.source.clone()} />
    }
}
