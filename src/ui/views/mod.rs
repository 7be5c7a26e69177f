pub mod feedback;
pub mod intro;
pub mod loading;
pub mod playing;
