use leptos::prelude::*;

/// PageHeader component - title row with an actions slot on the right
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,
    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Right-hand side content (avatar, buttons)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
