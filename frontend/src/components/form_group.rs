use leptos::*;

/// Label + input wrapper that renders the server's field-level validation
/// message inline under the input when one is present.
#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=for_id>{label}</label>
            {children()}
            {move || error.get().map(|message| view! {
                <div class="alert alert-error" role="alert">{message}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_form_group_css_classes() {
        assert_eq!("form-group", "form-group");
        assert_eq!("form-label", "form-label");
        assert_eq!("alert alert-error", "alert alert-error");
    }
}
