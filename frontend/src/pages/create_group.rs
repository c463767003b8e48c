use leptos::*;
use shared::{CourseLevel, Role};

use crate::api::ApiClient;
use crate::components::access_denied::AccessDenied;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::form_group::FormGroup;
use crate::components::loading::Loading;
use crate::components::select_input::SelectInput;
use crate::components::text_input::TextInput;
use crate::utils::group_form::{GroupDraft, GroupFormFeedback};

const REQUIRED_ROLE: Role = Role::Profesor;

#[component]
pub fn CreateGroupPage() -> impl IntoView {
    let draft = create_rw_signal(GroupDraft::default());
    let feedback = create_rw_signal(GroupFormFeedback::default());
    let saving = create_rw_signal(false);

    // Both fetches start at mount, run independently, and are dropped with
    // the page.
    let role = create_local_resource(
        || (),
        |_| async { ApiClient::current_role().await },
    );
    let existing_names = create_local_resource(
        || (),
        |_| async {
            ApiClient::list_group_names().await.unwrap_or_else(|e| {
                logging::error!("failed to load group names: {}", e);
                Vec::new()
            })
        },
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        feedback.set(GroupFormFeedback::default());
        saving.set(true);

        let request = draft.get_untracked().to_request();

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::create_group(request).await {
                Ok(outcome) => {
                    logging::log!("group submission outcome: {:?}", outcome);
                    if outcome.is_created() {
                        draft.set(GroupDraft::default());
                    }
                    feedback.set(GroupFormFeedback::from_outcome(&outcome));
                }
                Err(e) => {
                    // Transport failures stay off the form.
                    logging::error!("group submission failed: {}", e);
                }
            }
            saving.set(false);
        });
    };

    let name_value = Signal::derive(move || draft.get().name);
    let course_value = Signal::derive(move || {
        draft
            .get()
            .course
            .map(|course| course.as_str().to_string())
            .unwrap_or_default()
    });
    let course_options = Signal::derive(|| {
        CourseLevel::all()
            .iter()
            .map(|level| (level.as_str().to_string(), level.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_name_input = Callback::new(move |name: String| {
        draft.set(draft.get_untracked().with_name(name));
    });
    let on_course_change = Callback::new(move |value: String| {
        draft.set(draft.get_untracked().with_course(value.parse().ok()));
    });

    let checking = move || role.get().is_none();
    let authorized = move || matches!(role.get(), Some(Ok(r)) if r.can_manage_groups());

    view! {
        <div class="auth-container">
            <div class="auth-card card">
                <Show when=move || !checking() fallback=|| view! { <Loading /> }>
                    <Show
                        when=authorized
                        fallback=|| view! { <AccessDenied required_role=REQUIRED_ROLE /> }
                    >
                        <div class="auth-header">
                            <h1 class="auth-title">"Create Group"</h1>
                            <p class="auth-subtitle">
                                "Open a new group for one of the academy's courses"
                            </p>
                        </div>

                        {move || feedback.get().success.then(|| view! {
                            <Alert variant=AlertVariant::Success>"Successful creation"</Alert>
                        })}
                        {move || feedback.get().failure.map(|message| view! {
                            <Alert variant=AlertVariant::Error>{message}</Alert>
                        })}

                        <form on:submit=on_submit>
                            <FormGroup
                                label="Course"
                                for_id="course"
                                error=Signal::derive(move || feedback.get().course_error)
                            >
                                <SelectInput
                                    id="course"
                                    value=course_value
                                    options=course_options
                                    on_change=on_course_change
                                    placeholder="Select a course"
                                    disabled=saving
                                />
                            </FormGroup>

                            <FormGroup
                                label="Group's name"
                                for_id="group-name"
                                error=Signal::derive(move || feedback.get().group_name_error)
                            >
                                <TextInput
                                    id="group-name"
                                    value=name_value
                                    on_input=on_name_input
                                    placeholder="Group's name"
                                    disabled=saving
                                />
                            </FormGroup>

                            <button
                                type="submit"
                                class="btn btn-primary"
                                style="width: 100%; margin-top: 1rem;"
                                disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </form>

                        {move || {
                            let names = existing_names.get().unwrap_or_default();
                            (!names.is_empty()).then(|| view! {
                                <div class="form-group" style="margin-top: 1.5rem;">
                                    <span class="form-label">"Existing groups"</span>
                                    <ul class="group-name-list">
                                        {names
                                            .into_iter()
                                            .map(|name| view! { <li>{name}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                        }}
                    </Show>
                </Show>
            </div>
        </div>
    }
}
