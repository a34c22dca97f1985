pub mod app;
mod chat;
mod chat_bubble;
mod header;
mod theme;

pub use app::ChatApp;
