pub mod deque;
pub mod issue;
pub mod page;
