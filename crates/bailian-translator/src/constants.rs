/// Constants for OpenAI ↔ Bailian translation

// Fixed reasoning chunk sent before the first surfaced thinking delta
pub const THINKING_INTRO: &str = "正在思考...";

// Finish reasons
pub const FINISH_STOP: &str = "stop";

// Object types
pub const OBJECT_CHAT_COMPLETION: &str = "chat.completion";

// Default max characters per surfaced reasoning delta
pub const DEFAULT_REASONING_DELTA_MAX: usize = 180;
