//! User interface components for convo.
//!
//! The chat-list panel is the centerpiece; the rest are the small reusable
//! pieces it composes (avatar, skeleton, toasts, group-creation modal) plus
//! a minimal detail pane for the open conversation.

mod avatar; // Round avatar image
pub mod chat_detail; // Open-conversation pane
pub mod chat_list; // Conversation list panel
mod group_modal; // Create-group modal collaborator
mod skeleton; // Loading placeholder
pub mod toast; // Transient notification stack
