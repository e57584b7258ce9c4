//! Storage keys, API routes and fixed user-facing strings.

/// Storage key holding the serialized session user.
pub const USER_KEY: &str = "user";
/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const TIPS_PATH: &str = "/tip";
pub const PROFILE_PATH: &str = "/profile";
pub const STK_PUSH_PATH: &str = "/mpesa/stk-push";

/// Generic message shown when the request never produced a usable response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back!";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created! 🌟";

pub const LOGIN_PROMPT: &str = "Login to view tips";
pub const VIP_PROMPT: &str = "VIP Only · Unlock Now";

/// Name the client identifies itself with in the User-Agent header.
pub const CLIENT_NAME: &str = "payday-client";
