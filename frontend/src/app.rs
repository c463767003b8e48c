use leptos::*;
use leptos_router::*;

use crate::pages::create_group::CreateGroupPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=RedirectToCreateGroup />
                    <Route path="/grupos/new" view=CreateGroupPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn RedirectToCreateGroup() -> impl IntoView {
    let navigate = use_navigate();
    navigate("/grupos/new", Default::default());
    view! {}
}
