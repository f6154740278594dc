//! Thaw `Card` with an appear animation.
//!
//! The `card-appear` keyframes live in `styles/dashboard.css`; pass an
//! increasing `delay_ms` to stagger a grid of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = appear_style(delay_ms, &style);

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

fn appear_style(delay_ms: u32, extra: &str) -> String {
    let animation = format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        animation
    } else {
        format!("{} {}", animation, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style() {
        assert_eq!(
            appear_style(100, ""),
            "animation: card-appear 0.3s ease-out 100ms both;"
        );
        assert!(appear_style(0, "height: 100%;").ends_with("both; height: 100%;"));
    }
}
