use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SignupBannerPanel;

use view_model::use_signup_banner_view_model;

#[component]
pub fn SignupBanner() -> impl IntoView {
    let vm = use_signup_banner_view_model();
    view! { <SignupBannerPanel vm=vm config=crate::config::banner_config() /> }
}
