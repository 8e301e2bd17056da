use crate::camera_stream::interface::ImageMessage;
use crate::capture::Screenshot;
use crate::config::Config;
use crate::frame::{self, Frame};
use crate::sim_client::interface::{Orientation, PoseRequest, Position};

pub const NO_FRAME_STATUS: &str = "No screenshot captured. Camera feed might be empty.";

/// The five numeric fields of the window, in the GUI's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseInputs {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub orientation_z: f64,
    pub orientation_w: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub inputs: PoseInputs,
    /// Single slot holding the most recently decoded frame. Overwritten on
    /// every accepted image message, never buffered.
    pub current_frame: Option<Frame>,
    /// Bumped whenever `current_frame` is replaced so the preview knows to
    /// re-upload its texture.
    pub frame_seq: u64,
    pub status: String,
    pub spawn_in_flight: bool,
}

#[derive(Debug)]
pub enum Msg {
    SpawnPressed,
    SpawnDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameReceived(ImageMessage),
    CapturePressed,
    CaptureDone(Result<Screenshot, Box<dyn std::error::Error + Send + Sync>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeCamera,
    SendPose(PoseRequest),
    SaveFrame(Frame),
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![Effect::SubscribeCamera])
}

/// Build the service payload from the GUI inputs. Position x and y are
/// inverted between the GUI frame and the simulator frame; orientation x and
/// y are not exposed in the window and stay zero.
pub fn pose_request(config: &Config, inputs: &PoseInputs) -> PoseRequest {
    PoseRequest {
        model_name: config.model_name.clone(),
        position: Position {
            x: -inputs.position_x,
            y: -inputs.position_y,
            z: inputs.position_z,
        },
        orientation: Orientation {
            x: 0.0,
            y: 0.0,
            z: inputs.orientation_z,
            w: inputs.orientation_w,
        },
    }
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::SpawnPressed => {
            if model.spawn_in_flight {
                return (model, vec![]);
            }
            let request = pose_request(config, &model.inputs);
            (
                Model {
                    spawn_in_flight: true,
                    ..model
                },
                vec![Effect::SendPose(request)],
            )
        }

        // Failures are logged by the run loop; the window itself does not
        // change beyond re-enabling the spawn button.
        Msg::SpawnDone(_) => (
            Model {
                spawn_in_flight: false,
                ..model
            },
            vec![],
        ),

        Msg::FrameReceived(message) => match frame::decode_bgr8(&message) {
            Ok(decoded) => (
                Model {
                    frame_seq: model.frame_seq + 1,
                    current_frame: Some(decoded),
                    ..model
                },
                vec![],
            ),
            Err(e) => (
                Model {
                    status: format!("Camera frame rejected: {}", e),
                    ..model
                },
                vec![],
            ),
        },

        Msg::CapturePressed => match &model.current_frame {
            Some(current) => {
                let effect = Effect::SaveFrame(current.clone());
                (model, vec![effect])
            }
            None => (
                Model {
                    status: NO_FRAME_STATUS.to_string(),
                    ..model
                },
                vec![],
            ),
        },

        Msg::CaptureDone(Ok(shot)) => (
            Model {
                status: format!(
                    "Screenshot saved at {} in 'pwd/{}'",
                    shot.timestamp,
                    config.screenshots_dir.display()
                ),
                ..model
            },
            vec![],
        ),

        Msg::CaptureDone(Err(e)) => (
            Model {
                status: format!("Screenshot failed: {}", e),
                ..model
            },
            vec![],
        ),
    }
}
