pub mod chat;

pub use chat::ChatView;
