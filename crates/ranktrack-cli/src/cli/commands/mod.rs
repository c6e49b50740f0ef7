pub mod dispatch;
mod helpers;
mod privacy;
mod programmes;
mod rank;
mod top;
mod user;

pub use dispatch::dispatch;
