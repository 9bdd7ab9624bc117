pub mod capability;

pub use capability::{
    PromptEntry, ResourceEntry, SequentialThinking, ToolEntry, DEFAULT_SEQUENTIAL_THINKING_STEPS,
};
