use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::dashboards::d100_store_overview::{
    filter_activities, ActivityFilter, ActivityItem, ActivityKind,
};
use leptos::prelude::*;

fn kind_icon(kind: ActivityKind) -> UiIcon {
    match kind {
        ActivityKind::Success => UiIcon::CheckCircle,
        ActivityKind::Warning => UiIcon::AlertTriangle,
        ActivityKind::Error => UiIcon::XCircle,
        ActivityKind::Info => UiIcon::Info,
    }
}

/// Recent store events with All / Success / Alerts tabs.
#[component]
pub fn ActivityFeed(
    activities: Vec<ActivityItem>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let activities = StoredValue::new(activities);
    let filter = RwSignal::new(ActivityFilter::All);

    let tabs = ActivityFilter::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="feed-tabs__tab"
                    class:feed-tabs__tab--active=move || filter.get() == tab
                    on:click=move |_| {
                        filter.set(tab);
                        log::debug!("activity feed: tab -> {}", tab.label());
                    }
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let list_view = move || {
        if loading.get() {
            return (0..4)
                .map(|_| {
                    view! {
                        <div class="feed-skeleton">
                            <div class="skeleton skeleton--dot"></div>
                            <div class="feed-skeleton__lines">
                                <div class="skeleton skeleton--text"></div>
                                <div class="skeleton skeleton--text"></div>
                                <div class="skeleton skeleton--text skeleton--short"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any();
        }

        let visible = activities.with_value(|items| filter_activities(items, filter.get()));
        if visible.is_empty() {
            return view! { <p class="feed-empty">"No activities found"</p> }.into_any();
        }

        visible
            .into_iter()
            .enumerate()
            .map(|(index, activity)| {
                let icon_class = format!("activity-item__icon activity-item__icon--{}", activity.kind.as_str());
                let delay = format!("animation-delay: {}ms;", 50 * index);
                view! {
                    <div class="activity-item" style=delay>
                        <div class=icon_class>{ui_icon(kind_icon(activity.kind))}</div>
                        <div class="activity-item__content">
                            <h4 class="activity-item__title">{activity.title}</h4>
                            <p class="activity-item__description">{activity.description}</p>
                            <span class="activity-item__time">{activity.time}</span>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <CardAnimated class="activity-feed" delay_ms=400>
            <PageHeader title="Recent Activity" compact=true />
            <div class="feed-tabs">{tabs}</div>
            <div class="feed-body">{list_view}</div>
        </CardAnimated>
    }
}
