use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    fancy_button::FancyButton,
    hello_world::HelloWorld,
    progress::{fill_width, Progress},
};
use crate::attrs::Attrs;
use crate::config::AppConfig;
use gloo::console::log;
use gloo::timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub struct App {
    value: f64,
    max: f64,
    step: f64,
    autoplay: Option<Interval>,
    logs: Vec<String>,
}

pub enum Msg {
    Advance,
    Rewind,
    Reset,
    ToggleAutoplay,
    Tick,
    AddLog(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;

        Self {
            value: config.initial_value,
            max: config.max,
            step: config.step,
            autoplay: None,
            logs: vec!["Hello progress demo ready".to_string()],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Advance => {
                self.value += self.step;
                self.add_log(ctx, format!("Advanced to {}", self.value));
                true
            }
            Msg::Rewind => {
                self.value -= self.step;
                self.add_log(ctx, format!("Rewound to {}", self.value));
                true
            }
            Msg::Reset => {
                self.value = ctx.props().config.initial_value;
                self.autoplay = None;
                self.add_log(ctx, "Reset".to_string());
                true
            }
            Msg::ToggleAutoplay => {
                if self.autoplay.take().is_some() {
                    self.add_log(ctx, "Autoplay stopped".to_string());
                } else {
                    let tick_ms = ctx.props().config.tick_ms;
                    let link = ctx.link().clone();
                    self.autoplay = Some(Interval::new(tick_ms, move || {
                        link.send_message(Msg::Tick);
                    }));
                    self.add_log(ctx, format!("Autoplay started, every {} ms", tick_ms));
                }
                true
            }
            Msg::Tick => {
                self.value = next_tick(self.value, self.step, self.max);
                true
            }
            Msg::AddLog(entry) => {
                log!(entry.clone());
                self.logs.push(entry);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let autoplay_label = if self.autoplay.is_some() {
            "Stop autoplay"
        } else {
            "Autoplay"
        };

        html! {
            <div class="app-container">
                <header>
                    <HelloWorld attrs={Attrs::new().with("id", "greeting")} />
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Progress" }</h2>
                        <Progress
                            value={self.value}
                            max={self.max}
                            class="my-4"
                            attrs={Attrs::new().with("aria-label", "Demo progress")}
                        />
                        <div class="progress-text">{ fill_width(self.value, self.max) }</div>

                        <div class="button-container">
                            <FancyButton onclick={ctx.link().callback(|_| Msg::Advance)}>
                                { "Advance" }
                            </FancyButton>
                            <Button
                                variant={ButtonVariant::Outline}
                                onclick={ctx.link().callback(|_| Msg::Rewind)}
                            >
                                { "Rewind" }
                            </Button>
                            <Button
                                variant={ButtonVariant::Secondary}
                                size={ButtonSize::Sm}
                                onclick={ctx.link().callback(|_| Msg::ToggleAutoplay)}
                            >
                                { autoplay_label }
                            </Button>
                            <Button
                                variant={ButtonVariant::Ghost}
                                size={ButtonSize::Sm}
                                onclick={ctx.link().callback(|_| Msg::Reset)}
                            >
                                { "Reset" }
                            </Button>
                        </div>
                    </div>

                    <div class="panel">
                        <h2>{ "Activity" }</h2>
                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|entry| {
                                    html! { <div class="log-entry">{ entry }</div> }
                                })
                            }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, ctx: &Context<Self>, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        let entry = format!("[{}] {}", timestamp, message);
        ctx.link().send_message(Msg::AddLog(entry));
    }
}

/// Autoplay step: advance by `step`, starting over once the bar is full.
fn next_tick(value: f64, step: f64, max: f64) -> f64 {
    if value >= max {
        0.0
    } else {
        value + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_tick_advances() {
        assert_eq!(next_tick(0.0, 10.0, 100.0), 10.0);
        assert_eq!(next_tick(95.0, 10.0, 100.0), 105.0);
    }

    #[test]
    fn test_next_tick_wraps_when_full() {
        assert_eq!(next_tick(100.0, 10.0, 100.0), 0.0);
        assert_eq!(next_tick(105.0, 10.0, 100.0), 0.0);
    }
}
