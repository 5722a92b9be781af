//! Review form: name, review text, and a 1-5 rating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepted reviews are published on the shared `EventRelay`; the form never
//! talks to the product display directly. Rejected submits show one message
//! per missing field above the inputs.

use leptos::prelude::*;

use crate::state::review::{RATING_OPTIONS, ReviewFormState, parse_rating};
use crate::util::relay::{EventRelay, RelayMessage};

#[component]
pub fn ReviewForm() -> impl IntoView {
    let relay = expect_context::<EventRelay>();
    let form = RwSignal::new(ReviewFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(review) = form.try_update(ReviewFormState::submit).flatten() else {
            log::debug!("review rejected: {:?}", form.with_untracked(ReviewFormState::error_messages));
            return;
        };
        log::debug!("review accepted from {:?}", review.name);
        let delivered = relay.publish(RelayMessage::ReviewSubmitted(review));
        if delivered == 0 {
            log::warn!("review submitted with no listeners");
        }
    };

    let has_errors = move || form.with(|f| !f.errors.is_empty());
    let rating_value = move || form.with(|f| f.rating.map(|r| r.to_string()).unwrap_or_default());

    let rating_options = RATING_OPTIONS
        .into_iter()
        .map(|rating| view! { <option value=rating.to_string()>{rating.to_string()}</option> })
        .collect::<Vec<_>>();

    view! {
        <form class="review-form" on:submit=on_submit>
            <Show when=has_errors>
                <div class="review-form__errors">
                    <b>"Please correct the following error(s):"</b>
                    <ul>
                        {move || {
                            form.with(ReviewFormState::error_messages)
                                .into_iter()
                                .map(|message| view! { <li>{message}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>

            <p>
                <label for="name">"Name:"</label>
                <input
                    id="name"
                    placeholder="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </p>

            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    prop:value=move || form.with(|f| f.review.clone())
                    on:input=move |ev| form.update(|f| f.review = event_target_value(&ev))
                ></textarea>
            </p>

            <p>
                <label for="rating">"Rating:"</label>
                <select
                    id="rating"
                    prop:value=rating_value
                    on:change=move |ev| form.update(|f| f.rating = parse_rating(&event_target_value(&ev)))
                >
                    <option value="">"--"</option>
                    {rating_options}
                </select>
            </p>

            <p>
                <input type="submit" value="Submit"/>
            </p>
        </form>
    }
    .into_any()
}
