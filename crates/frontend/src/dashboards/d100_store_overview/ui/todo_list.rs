use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::{ui_icon, UiIcon};
use chrono::{Local, NaiveDate};
use contracts::dashboards::d100_store_overview::{
    due_label, filter_todos, new_todo, toggle_completed, TodoFilter, TodoItem,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Task list with All / Pending / Completed tabs and an inline add form.
///
/// Changes live in page state only.
#[component]
pub fn TodoList(
    items: Vec<TodoItem>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let items = RwSignal::new(items);
    let filter = RwSignal::new(TodoFilter::All);
    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let today = Local::now().date_naive();

    let toggle = move |id: String| {
        items.update(|items| {
            if toggle_completed(items, &id) {
                log::debug!("todo list: toggled {}", id);
            }
        });
    };

    let add_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let created = items.with(|items| draft.with(|title| new_todo(title, items)));
        if let Some(todo) = created {
            log::debug!("todo list: added {}", todo.id);
            items.update(|items| items.push(todo));
            draft.set(String::new());
            show_form.set(false);
        }
    };

    let cancel = move |_| {
        show_form.set(false);
        draft.set(String::new());
    };

    let tabs = TodoFilter::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="feed-tabs__tab"
                    class:feed-tabs__tab--active=move || filter.get() == tab
                    on:click=move |_| filter.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let list_view = move || {
        if loading.get() {
            return (0..3)
                .map(|_| {
                    view! {
                        <div class="feed-skeleton">
                            <div class="skeleton skeleton--dot"></div>
                            <div class="feed-skeleton__lines">
                                <div class="skeleton skeleton--text"></div>
                                <div class="skeleton skeleton--text skeleton--short"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any();
        }

        let visible = items.with(|items| filter_todos(items, filter.get()));
        if visible.is_empty() {
            return view! { <p class="feed-empty">"No tasks found"</p> }.into_any();
        }

        view! {
            <ul class="todo-list__items">
                {visible
                    .into_iter()
                    .map(|item| todo_row(item, today, toggle))
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <CardAnimated class="todo-list" delay_ms=400>
            <PageHeader title="To-Do List" compact=true>
                <button class="icon-btn" title="Add task" on:click=move |_| show_form.set(true)>
                    {ui_icon(UiIcon::Plus)}
                </button>
            </PageHeader>

            <div class="feed-tabs">{tabs}</div>

            <Show when=move || show_form.get()>
                <form class="todo-list__form" on:submit=add_todo>
                    <input
                        type="text"
                        class="todo-list__input"
                        placeholder="Add a new task..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <div class="todo-list__form-actions">
                        <button type="button" class="btn btn--secondary" on:click=cancel>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || draft.with(|title| title.trim().is_empty())
                        >
                            "Add Task"
                        </button>
                    </div>
                </form>
            </Show>

            <div class="feed-body">{list_view}</div>
        </CardAnimated>
    }
}

fn todo_row(
    item: TodoItem,
    today: NaiveDate,
    toggle: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let overdue = item.is_overdue(today);
    let TodoItem {
        id,
        title,
        description,
        priority,
        completed,
        due_date,
    } = item;

    let check = if completed { UiIcon::CheckCircle } else { UiIcon::Circle };
    let due_view = due_date.map(|due| {
        view! {
            <span class="todo-item__due" class:todo-item__due--overdue=overdue>
                {ui_icon(UiIcon::Clock)}
                {due_label(due, today)}
            </span>
        }
    });

    view! {
        <li class="todo-item">
            <button
                class="todo-item__check"
                class:todo-item__check--done=completed
                on:click=move |_| toggle(id.clone())
            >
                {ui_icon(check)}
            </button>
            <div class="todo-item__content">
                <div class="todo-item__header">
                    <h4 class="todo-item__title" class:todo-item__title--done=completed>{title}</h4>
                    <div class="todo-item__meta">
                        {due_view}
                        <Badge tone=priority.badge_tone()>{priority.as_str()}</Badge>
                    </div>
                </div>
                {description.map(|text| view! { <p class="todo-item__description">{text}</p> })}
            </div>
        </li>
    }
}
