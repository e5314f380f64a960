pub mod notifications;
pub mod session;
