use leptos::*;

/// Select dropdown with an optional disabled placeholder row that stays
/// selected while the owner has no value.
#[component]
pub fn SelectInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            id=id
            disabled=disabled
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {placeholder.map(|text| view! {
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {text}
                </option>
            })}
            {move || {
                options.get().into_iter().map(|(val, label)| {
                    let val_clone = val.clone();
                    view! {
                        <option
                            value=val.clone()
                            selected=move || value.get() == val_clone
                        >
                            {label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_select_input_css_classes() {
        assert_eq!("form-select", "form-select");
    }
}
