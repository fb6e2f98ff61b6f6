use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiError;
use crate::models::review::{Review, ReviewRequest};

/// Handler the shell supplies for a validated submission. Resolves with the
/// analyzed review once the backend has stored it.
pub type AnalyzeHandler =
    Rc<dyn Fn(ReviewRequest) -> LocalBoxFuture<'static, Result<Review, ApiError>>>;

/// Checks a submission before any network call, short-circuiting on the
/// first failure.
pub fn validate(product_name: &str, review_text: &str) -> Result<(), &'static str> {
    if product_name.trim().is_empty() {
        return Err("Product name is required");
    }
    let trimmed = review_text.trim();
    if trimmed.is_empty() {
        return Err("Review text is required");
    }
    if trimmed.chars().count() < 10 {
        return Err("Review text too short (minimum 10 characters)");
    }
    Ok(())
}

#[component]
pub fn ReviewForm(on_analyze: AnalyzeHandler) -> impl IntoView {
    let (product_name, set_product_name) = create_signal(String::new());
    let (review_text, set_review_text) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(message) = validate(&product_name.get_untracked(), &review_text.get_untracked()) {
            set_error.set(message.to_string());
            return;
        }
        set_error.set(String::new());
        set_submitting.set(true);

        let payload = ReviewRequest {
            product_name: product_name.get_untracked(),
            review_text: review_text.get_untracked(),
        };
        let on_analyze = Rc::clone(&on_analyze);
        spawn_local(async move {
            match on_analyze(payload).await {
                Ok(review) => {
                    log!("[FORM] review {} analyzed", review.id);
                    set_product_name.set(String::new());
                    set_review_text.set(String::new());
                }
                Err(err) => {
                    set_error.set(err.user_message("Failed to analyze review"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="review-form-container">
            <h2>"Submit Product Review"</h2>
            <form class="review-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="product_name">"Product Name *"</label>
                    <input
                        type="text"
                        id="product_name"
                        placeholder="e.g., iPhone 15 Pro"
                        prop:value=move || product_name.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| {
                            set_product_name.set(event_target_value(&ev));
                            set_error.set(String::new());
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="review_text">"Your Review *"</label>
                    <textarea
                        id="review_text"
                        rows="6"
                        placeholder="Share your experience with this product..."
                        prop:value=move || review_text.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| {
                            set_review_text.set(event_target_value(&ev));
                            set_error.set(String::new());
                        }
                    />
                    <div class="char-count">
                        {move || format!("{} characters", review_text.get().chars().count())}
                    </div>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <button type="submit" class="submit-btn" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Analyzing..." } else { "Analyze Review" }}
                </button>
            </form>
        </div>
    }
}
