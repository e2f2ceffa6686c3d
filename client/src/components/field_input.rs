//! Labelled controlled input for one form field.
//!
//! Widget type, `maxlength`, `min`/`max` and select options all come from
//! the field's metadata in `forms`, so the rendered hints and the
//! validator never disagree.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use forms::{Field, InputKind};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// HTML attributes derived from a field's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAttrs {
    pub html_type: Option<&'static str>,
    pub maxlength: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<&'static str>,
}

impl InputAttrs {
    #[must_use]
    pub fn for_field(field: Field) -> Self {
        let kind = field.input_kind();
        let bounds = field.numeric_bounds();
        Self {
            html_type: kind.html_type(),
            maxlength: field.max_len().map(|n| n.to_string()),
            min: bounds.map(|(min, _)| min.to_string()),
            max: bounds.and_then(|(_, max)| max.is_finite().then(|| max.to_string())),
            step: (kind == InputKind::Number).then_some("any"),
        }
    }
}

#[component]
pub fn FieldInput(field: Field, #[prop(into)] value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    let key = field.key();
    let control = if field.input_kind() == InputKind::Select {
        let options = field
            .options()
            .iter()
            .map(|option| view! { <option value=*option>{*option}</option> })
            .collect_view();
        view! {
            <select
                class="field__control"
                id=key
                name=key
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="">{field.placeholder()}</option>
                {options}
            </select>
        }
        .into_any()
    } else {
        let attrs = InputAttrs::for_field(field);
        view! {
            <input
                class="field__control"
                id=key
                name=key
                type=attrs.html_type
                maxlength=attrs.maxlength
                min=attrs.min
                max=attrs.max
                step=attrs.step
                placeholder=field.placeholder()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field" for=key>
            <span class="field__label">{field.label()}</span>
            {control}
        </label>
    }
}
