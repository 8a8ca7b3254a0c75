mod app;

mod components {
    pub mod analysis;
    pub mod comparison;
    pub mod conclusion;
    pub mod introduction;
    pub mod overview;
    pub mod sidebar;
    pub mod training;
}

fn main() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title("Mining ML Dashboard");
    }
    leptos::mount_to_body(app::App);
}
