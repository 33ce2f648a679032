pub mod context;
pub mod loop_;
pub mod session;
pub mod system_prompt;

pub use loop_::{is_exit_command, run_chat_loop};
pub use session::{Conversation, CookingAgent};
