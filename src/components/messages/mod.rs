pub mod message_dialog;
pub mod send_messages_card;

pub use message_dialog::*;
pub use send_messages_card::*;
