pub mod home;
pub mod signup_banner;

pub use home::*;
pub use signup_banner::SignupBanner;
