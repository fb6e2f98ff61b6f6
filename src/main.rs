use review_analyzer::app::App;

// Client-side entry point; run with `trunk serve --open`.
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
