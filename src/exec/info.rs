/// Version and diagnostic metadata exposed by the engine facade.
pub trait EngineInfo {
    fn version(&self) -> String;
    fn debug_level(&self) -> i32;
    fn set_debug_level(&self, level: i32);
    /// Turns off terminal colour codes in the engine's console output.
    fn disable_highlighting(&self);
}
