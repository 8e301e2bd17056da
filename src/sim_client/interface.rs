/// Position and orientation payload sent to relocate a simulated model.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRequest {
    pub model_name: String,
    pub position: Position,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Synchronous call that moves a named simulated model to a given pose.
/// Blocks until the simulator responds or the call fails.
pub trait RelocationService: Send + Sync {
    fn set_model_state(
        &self,
        request: &PoseRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
