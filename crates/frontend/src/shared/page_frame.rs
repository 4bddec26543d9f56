//! PageFrame: корневая обёртка каждой страницы во вкладке.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_patient--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

/// Шапка страницы: заголовок слева, действия справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {subtitle.map(|s| view! { <span class="page__subtitle">{s}</span> })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
