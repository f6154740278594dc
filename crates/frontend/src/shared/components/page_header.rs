use leptos::prelude::*;

/// Title block for pages and cards
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: Option<String>,

    /// Renders an `h2` instead of the page-level `h1`
    #[prop(optional)]
    compact: bool,

    /// Right-aligned actions
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let title_view = if compact {
        view! { <h2 class="page-header__title page-header__title--compact">{title}</h2> }.into_any()
    } else {
        view! { <h1 class="page-header__title">{title}</h1> }.into_any()
    };

    view! {
        <div class="page-header" class:page-header--compact=compact>
            <div class="page-header__content">
                <div class="page-header__text">
                    {title_view}
                    {subtitle.map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
                </div>
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}
