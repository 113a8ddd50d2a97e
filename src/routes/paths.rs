//! Route paths shared by the router, links, and post-submit navigation.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot/password";
/// Landing page after a successful login when the server names none.
pub const MAIN: &str = "/main";
