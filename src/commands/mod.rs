pub mod dispatch;
pub mod gray;
pub mod input;
pub mod path;
pub mod show;
pub mod subarray;
pub mod sum;
pub mod visit;
