use yew::prelude::*;

use super::button::Button;
use crate::attrs::Attrs;

#[derive(Properties, PartialEq)]
pub struct HelloWorldProps {
    #[prop_or_default]
    pub attrs: Attrs,
}

#[function_component(HelloWorld)]
pub fn hello_world(props: &HelloWorldProps) -> Html {
    let container = Attrs::new()
        .with("class", "flex flex-col items-center gap-4 p-8")
        .merge(&props.attrs, &[]);

    container.apply(html! {
        <div>
            <h1 class="text-2xl font-bold">{ "Hello world" }</h1>
            <Button>{ "Click me" }</Button>
        </div>
    })
}
