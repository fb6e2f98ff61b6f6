/// Root shell for the review analyzer UI.
/// Owns the review list, loading flag, error banner, and sentiment filter;
/// child components receive read-only signals and signal intent via callbacks.
use std::rc::Rc;

use futures::FutureExt;
use leptos::logging::{error, log};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::components::review_form::{AnalyzeHandler, ReviewForm};
use crate::components::reviews_list::ReviewsList;
use crate::models::review::{Review, ReviewRequest, Sentiment};

/// How many recent reviews the shell asks for on load and retry.
const REVIEW_FETCH_LIMIT: usize = 20;

/// Banner message shown for each fetch failure category.
fn fetch_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Backend(_) | ApiError::Rejected => "Failed to fetch reviews",
        ApiError::Transport(_) | ApiError::Decode(_) => {
            "Unable to connect to server. Make sure backend is running."
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(String::new());
    let (sentiment_filter, set_sentiment_filter) = create_signal(None::<Sentiment>);

    let fetch_reviews = move |filter: Option<Sentiment>| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_reviews(REVIEW_FETCH_LIMIT, filter).await {
                Ok(fetched) => {
                    log!("[APP] loaded {} reviews", fetched.len());
                    set_error.set(String::new());
                    set_reviews.set(fetched);
                }
                Err(err) => {
                    error!("[APP] fetching reviews failed: {err}");
                    set_error.set(fetch_error_message(&err).to_string());
                }
            }
            set_loading.set(false);
        });
    };

    // Initial fetch on mount, and again whenever the filter changes.
    create_effect(move |_| {
        fetch_reviews(sentiment_filter.get());
    });

    let on_analyze: AnalyzeHandler = Rc::new(move |request: ReviewRequest| {
        async move {
            let review = api::analyze_review(&request).await?;
            log!("[APP] review {} analyzed as {:?}", review.id, review.sentiment);
            set_reviews.update(|reviews| reviews.insert(0, review.clone()));
            Ok(review)
        }
        .boxed_local()
    });

    view! {
        <Title text="AI Product Review Analyzer"/>
        <div class="app">
            <header class="app-header">
                <h1>"AI Product Review Analyzer"</h1>
                <p>"Submit a product review and see its sentiment and key points"</p>
            </header>

            <main class="app-main">
                <div class="container">
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-banner">
                            <span>{move || error.get()}</span>
                            <button
                                class="retry-btn"
                                on:click=move |_| fetch_reviews(sentiment_filter.get_untracked())
                            >
                                "Retry"
                            </button>
                        </div>
                    </Show>

                    <ReviewForm on_analyze=Rc::clone(&on_analyze)/>

                    <div class="filter-bar">
                        <label for="sentiment_filter">"Filter by sentiment"</label>
                        <select
                            id="sentiment_filter"
                            on:change=move |ev| {
                                set_sentiment_filter.set(Sentiment::from_param(&event_target_value(&ev)));
                            }
                        >
                            <option value="all">"All"</option>
                            <option value="positive">"Positive"</option>
                            <option value="negative">"Negative"</option>
                            <option value="neutral">"Neutral"</option>
                        </select>
                    </div>

                    <Show
                        when=move || !loading.get()
                        fallback=|| {
                            view! {
                                <div class="loading-state">
                                    <p>"Loading reviews..."</p>
                                </div>
                            }
                        }
                    >
                        <ReviewsList reviews/>
                    </Show>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_use_the_fetch_message() {
        assert_eq!(
            fetch_error_message(&ApiError::Backend("boom".into())),
            "Failed to fetch reviews"
        );
        assert_eq!(fetch_error_message(&ApiError::Rejected), "Failed to fetch reviews");
    }

    #[test]
    fn transport_failures_point_at_the_backend_process() {
        assert_eq!(
            fetch_error_message(&ApiError::Transport("connection refused".into())),
            "Unable to connect to server. Make sure backend is running."
        );
        assert_eq!(
            fetch_error_message(&ApiError::Decode("not json".into())),
            "Unable to connect to server. Make sure backend is running."
        );
    }
}
