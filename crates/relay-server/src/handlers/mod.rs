mod chat_completion;

pub use chat_completion::chat_completion_router;
