pub mod add;
pub mod delete;
pub mod dispatch;
pub mod due;
pub mod list;
pub mod mark;
pub mod shared;
pub mod update;
