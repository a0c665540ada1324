//! Origin/destination form.
//!
//! Both inputs are controlled: the displayed values always come from the
//! parent, and every keystroke is reported upward untouched.

use leptos::prelude::*;

/// Two text inputs and a submit button. Holds no state of its own.
#[component]
pub fn InputForm(
    #[prop(into)] origin: Signal<String>,
    #[prop(into)] destination: Signal<String>,
    on_origin_input: Callback<String>,
    on_destination_input: Callback<String>,
    /// Receives the raw submit event; the caller decides whether to prevent
    /// the browser's default reload.
    on_submit: Callback<leptos::ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="trip-form" on:submit=move |ev| on_submit.run(ev)>
            <div class="trip-form__field">
                <label for="startLocationInput">"Origin"</label>
                <input
                    id="startLocationInput"
                    class="trip-form__input"
                    type="text"
                    placeholder="From"
                    prop:value=move || origin.get()
                    on:input=move |ev| on_origin_input.run(event_target_value(&ev))
                />
            </div>
            <div class="trip-form__field">
                <label for="endLocationInput">"Destination"</label>
                <input
                    id="endLocationInput"
                    class="trip-form__input"
                    type="text"
                    placeholder="To"
                    prop:value=move || destination.get()
                    on:input=move |ev| on_destination_input.run(event_target_value(&ev))
                />
            </div>
            <button class="btn trip-form__submit" type="submit">
                "Submit"
            </button>
        </form>
    }
}
