use yew::prelude::*;

use super::button::{Button, ButtonProps};
use crate::attrs::Attrs;
use crate::style::cn;

pub const FANCY_CLASSES: &str = "bg-gradient-to-r from-purple-500 to-pink-500 \
    text-white font-bold rounded-full shadow-lg hover:opacity-90";

/// A [`Button`] with a fixed look. Everything else is forwarded untouched.
#[function_component(FancyButton)]
pub fn fancy_button(props: &ButtonProps) -> Html {
    let class = cn([
        props.attrs.get("class").unwrap_or_default(),
        props.class.to_string().as_str(),
        FANCY_CLASSES,
    ]);
    let attrs = Attrs::new().merge(&props.attrs, &["class"]);

    html! {
        <Button
            variant={props.variant}
            size={props.size}
            class={Classes::from(class)}
            attrs={attrs}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            kind={props.kind.clone()}
        >
            { for props.children.iter() }
        </Button>
    }
}
