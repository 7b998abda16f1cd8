pub mod commands;
pub mod inline;
pub mod telegram;
pub mod util;

pub use telegram::TelegramChannel;
