use web_sys::{HtmlTextAreaElement, InputEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::HighlightState;

#[function_component]
pub fn StreamInput() -> Html {
    let (state, dispatch) = use_store::<HighlightState>();
    let oninput = dispatch.reduce_mut_callback_with(|state, event: InputEvent| {
        if let Some(text_area_element) = event.target_dyn_into::<HtmlTextAreaElement>() {
            state.stream = text_area_element.value();
        }
    });
    html! {
        <textarea {oninput} id="stream_input" value={state.stream.clone()} />
    }
}
