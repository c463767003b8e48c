use leptos::*;
use shared::Role;

/// Placeholder rendered in place of a page the current session may not use,
/// for the lifetime of that page.
#[component]
pub fn AccessDenied(required_role: Role) -> impl IntoView {
    view! {
        <div class="card empty-state">
            <span class="empty-state-icon">"🔒"</span>
            <h5>"Access denied"</h5>
            <p>
                {format!(
                    "You must be signed in as a {} to view this page.",
                    required_role.label()
                )}
            </p>
        </div>
    }
}
