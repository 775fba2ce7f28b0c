pub mod dialogue;
pub mod podcast;
pub mod tts;
