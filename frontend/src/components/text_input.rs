use leptos::*;

/// Text input that reports edits to its owner instead of owning the value.
/// The group form replaces its whole draft on every keystroke.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="form-input"
            id=id
            placeholder=placeholder
            disabled=disabled
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_text_input_css_classes() {
        assert_eq!("form-input", "form-input");
    }
}
