//! Posted reviews, newest last.

use leptos::prelude::*;

use crate::state::review::Review;

#[component]
pub fn ReviewList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews">
            {move || {
                let reviews = reviews.get();
                if reviews.is_empty() {
                    return view! { <p class="reviews__empty">"There are no reviews yet."</p> }.into_any();
                }

                let items = reviews
                    .into_iter()
                    .map(|review| {
                        view! {
                            <li class="reviews__item">
                                <p class="reviews__name">{review.name}</p>
                                <p class="reviews__rating">{format!("Rating: {}", review.rating)}</p>
                                <p class="reviews__text">{review.review}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <ul class="reviews__list">{items}</ul> }.into_any()
            }}
        </div>
    }
    .into_any()
}
