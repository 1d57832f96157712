//! Prompt content: moderator narration and role guidance

pub mod guidance;
pub mod narration;

pub use guidance::system_prompt;
pub use narration::Narration;
