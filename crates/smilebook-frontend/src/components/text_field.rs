use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    /// Validation message shown under the field when set.
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(false)]
    pub required: bool,
    #[prop_or(false)]
    pub readonly: bool,
}

/// A labeled text input with an inline validation message line.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let border = if props.error.is_some() {
        "border-red-500"
    } else {
        "border-gray-300"
    };

    html! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{ &props.label }</label>
            <input
                type={props.input_type.clone()}
                class={format!("w-full px-3 py-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500 {border}")}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                required={props.required}
                readonly={props.readonly}
            />
            {
                if let Some(error) = &props.error {
                    html! { <p class="mt-1 text-xs text-red-600">{ error }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
