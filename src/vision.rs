/// Read-only window into the perception layer. The engine and its
/// capabilities query these; they never drive the camera pipeline.
pub trait VisionQuery: Send + Sync {
    fn face_count(&self) -> u32;
    fn detected_objects(&self) -> Vec<String>;
    fn object_in_hand(&self) -> Option<String>;
    fn emotion(&self) -> Option<String>;
    /// Raised fingers on the most prominent hand, when one is in frame.
    fn finger_count(&self) -> Option<u32>;
}
