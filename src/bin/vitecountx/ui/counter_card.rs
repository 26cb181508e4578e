use gloo_console::log;
use vitecount::{
    counter::{Counter, CounterAction},
    site::{SiteConfig, HEADING, LINK_TARGET, LOGO_CLASS},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CounterCardProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component]
pub fn CounterCard(props: &CounterCardProps) -> Html {
    let counter = use_reducer(Counter::default);
    let onclick = {
        let dispatcher = counter.dispatcher();
        Callback::from(move |_: MouseEvent| {
            log!("increment");
            dispatcher.dispatch(CounterAction::Increment);
        })
    };

    let config = &props.config;
    let (before, code, after) = config.caption();
    html! {
        <>
            <a href={config.href()} target={LINK_TARGET}>
                <img src={config.logo_src.clone()} class={LOGO_CLASS} alt={config.logo_alt.clone()} />
            </a>
            <h1>{HEADING}</h1>
            <div class="card">
                <button {onclick}>{counter.label()}</button>
                <p>{before.to_string()}<code>{code.to_string()}</code>{after.to_string()}</p>
            </div>
        </>
    }
}
