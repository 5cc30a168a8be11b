//! Plain data structures shared by the orchestration layer, the HTTP edge and the stores.

pub mod account;
pub mod notification;
pub mod order;
pub mod response;

pub use account::*;
pub use notification::*;
pub use order::*;
pub use response::*;
