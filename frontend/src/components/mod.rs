pub mod advice_chat;
pub mod back_to_top;
pub mod header;
pub mod hero_curtain;
pub mod lead_form;
pub mod scroll_badge;
