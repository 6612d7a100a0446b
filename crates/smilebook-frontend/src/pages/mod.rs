//! Page components for different routes in the application.

pub mod booking;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

pub use booking::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use register::*;
