use contracts::shared::data_table::BadgeTone;
use leptos::prelude::*;

/// Badge component with different tones
#[component]
pub fn Badge(
    /// Colour tone, neutral by default
    #[prop(optional, into)]
    tone: Option<BadgeTone>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = badge_class(tone.unwrap_or(BadgeTone::Neutral));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class, additional_class())>
            {children()}
        </span>
    }
}

fn badge_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Primary => "badge--primary",
        BadgeTone::Success => "badge--success",
        BadgeTone::Warning => "badge--warning",
        BadgeTone::Error => "badge--error",
        BadgeTone::Neutral => "badge--neutral",
    }
}
