/// Read-only list of analyzed reviews, newest first.
/// Renders each review as a card with its sentiment badge, confidence score,
/// key points, and creation time; shows a placeholder when the list is empty.
use leptos::*;

use crate::models::review::Review;
use crate::utils::datetime::format_timestamp;

#[component]
pub fn ReviewsList(reviews: ReadSignal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="review-list-section">
            <h2>"Analysis Results"</h2>
            <Show
                when=move || !reviews.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"No reviews yet. Submit a review above to see the AI analysis!"</p>
                        </div>
                    }
                }
            >
                <div class="reviews-grid">
                    {move || {
                        reviews
                            .get()
                            .into_iter()
                            .map(|review| view! { <ReviewCard review/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let sentiment = review.sentiment.unwrap_or_default();
    let score = review.formatted_score();
    let analyzed_at = format_timestamp(review.created_at.as_deref());

    view! {
        <div class="review-card">
            <div class="card-header">
                <h3>{review.product_name.clone()}</h3>
                <div class=format!("sentiment-badge {}", sentiment.css_class())>
                    <span class="sentiment-label">{sentiment.label()}</span>
                    {score.map(|score| view! { <span class="sentiment-score">{score}</span> })}
                </div>
            </div>

            <p class="review-text">{review.review_text.clone()}</p>

            <div class="key-points">
                <h4>"Key Points:"</h4>
                <ul>
                    {if review.key_points.is_empty() {
                        view! { <li class="no-points">"No key points extracted"</li> }.into_view()
                    } else {
                        review
                            .key_points
                            .iter()
                            .map(|point| view! { <li>{point.clone()}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>

            <div class="card-footer">
                <span>{format!("Analyzed: {}", analyzed_at)}</span>
            </div>
        </div>
    }
}
