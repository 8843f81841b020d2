use yew::prelude::*;

use crate::attrs::Attrs;

pub const DEFAULT_MAX: f64 = 100.0;

const TRACK_CLASSES: &str = "relative h-4 w-full overflow-hidden rounded-full bg-secondary";
const FILL_CLASSES: &str = "h-full bg-primary transition-all";

/// Share of `max` that `value` covers, as a percentage clamped to `[0, 100]`.
///
/// A `max` that isn't strictly positive (zero, negative or NaN) has no
/// meaningful ratio and yields `0`, as does a NaN `value`.
pub fn percentage(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let ratio = value / max * 100.0;
    // Also folds -0.0 into 0.0 so it never renders as "-0%".
    if ratio.is_nan() || ratio <= 0.0 {
        return 0.0;
    }
    ratio.min(100.0)
}

pub fn fill_width(value: f64, max: f64) -> String {
    format!("{}%", percentage(value, max))
}

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    pub value: f64,
    #[prop_or(DEFAULT_MAX)]
    pub max: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: Attrs,
}

#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    let percent = percentage(props.value, props.max);

    let track = Attrs::new()
        .with("class", TRACK_CLASSES)
        .with("role", "progressbar")
        .with("aria-valuemin", "0")
        .with("aria-valuemax", "100")
        .with("aria-valuenow", percent.to_string());
    let track = track
        .merge(&props.attrs, &[])
        .merge(&Attrs::new().with("class", props.class.to_string()), &[]);

    let fill = Attrs::new()
        .with("class", FILL_CLASSES)
        .with("style", format!("width: {}", fill_width(props.value, props.max)));

    track.apply(html! {
        <div>
            { fill.apply(html! { <div></div> }) }
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_not_clamped() {
        for (value, max) in [(0.0, 100.0), (42.0, 100.0), (1.0, 3.0), (7.5, 8.0), (8.0, 8.0)] {
            assert_eq!(percentage(value, max), value / max * 100.0);
        }
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(percentage(-10.0, 100.0), 0.0);
        assert_eq!(percentage(-0.001, 1.0), 0.0);
        assert_eq!(percentage(f64::NEG_INFINITY, 100.0), 0.0);
    }

    #[test]
    fn test_overflow_clamps_to_hundred() {
        assert_eq!(percentage(150.0, 100.0), 100.0);
        assert_eq!(percentage(1e300, 1.0), 100.0);
        assert_eq!(percentage(f64::INFINITY, 100.0), 100.0);
    }

    #[test]
    fn test_degenerate_max_is_zero_percent() {
        assert_eq!(percentage(10.0, 0.0), 0.0);
        assert_eq!(percentage(-10.0, 0.0), 0.0);
        assert_eq!(percentage(10.0, -50.0), 0.0);
        assert_eq!(percentage(10.0, f64::NAN), 0.0);
        assert_eq!(percentage(10.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_nan_value_is_zero_percent() {
        assert_eq!(percentage(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(fill_width(-0.0, 100.0), "0%");
    }

    #[test]
    fn test_is_pure() {
        assert_eq!(percentage(33.0, 70.0), percentage(33.0, 70.0));
        assert_eq!(fill_width(33.0, 70.0), fill_width(33.0, 70.0));
    }

    #[test]
    fn test_fill_width_scenarios() {
        assert_eq!(fill_width(0.0, 100.0), "0%");
        assert_eq!(fill_width(100.0, 100.0), "100%");
        assert_eq!(fill_width(150.0, 100.0), "100%");
        assert_eq!(fill_width(-10.0, 100.0), "0%");
        assert_eq!(fill_width(25.0, 50.0), "50%");
        assert_eq!(fill_width(10.0, 0.0), "0%");
        assert_eq!(fill_width(50.0, DEFAULT_MAX), "50%");
    }
}
