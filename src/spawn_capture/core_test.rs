#[cfg(test)]
mod tests {
    use crate::camera_stream::interface::ImageMessage;
    use crate::capture::Screenshot;
    use crate::config::Config;
    use crate::frame::Frame;
    use crate::spawn_capture::core::{
        init, pose_request, transition, Effect, Model, Msg, PoseInputs, NO_FRAME_STATUS,
    };
    use std::path::PathBuf;

    fn bgr_message(width: u32, height: u32) -> ImageMessage {
        let mut data = Vec::new();
        for i in 0..(width * height) {
            data.extend_from_slice(&[(i % 256) as u8, 10, 20]);
        }
        ImageMessage {
            width,
            height,
            data,
        }
    }

    #[test]
    fn test_init_subscribes_to_the_camera() {
        let (model, effects) = init();

        assert_eq!(model, Model::default());
        assert_eq!(effects, vec![Effect::SubscribeCamera]);
    }

    #[test]
    fn test_pose_request_inverts_x_and_y_and_zeroes_unused_orientation() {
        let config = Config::default();
        let inputs = PoseInputs {
            position_x: 1.5,
            position_y: -2.25,
            position_z: 0.75,
            orientation_z: 0.5,
            orientation_w: 0.9,
        };

        let request = pose_request(&config, &inputs);

        assert_eq!(request.model_name, "R1");
        assert_eq!(request.position.x, -1.5);
        assert_eq!(request.position.y, 2.25);
        assert_eq!(request.position.z, 0.75);
        assert_eq!(request.orientation.x, 0.0);
        assert_eq!(request.orientation.y, 0.0);
        assert_eq!(request.orientation.z, 0.5);
        assert_eq!(request.orientation.w, 0.9);
    }

    #[test]
    fn test_spawn_press_sends_one_pose_request() {
        let config = Config::default();
        let model = Model {
            inputs: PoseInputs {
                position_x: 2.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let (model, effects) = transition(&config, model, Msg::SpawnPressed);

        assert!(model.spawn_in_flight);
        assert_eq!(
            effects,
            vec![Effect::SendPose(pose_request(&config, &model.inputs))]
        );
    }

    #[test]
    fn test_spawn_press_while_in_flight_is_ignored() {
        let config = Config::default();
        let model = Model {
            spawn_in_flight: true,
            ..Default::default()
        };

        let (model, effects) = transition(&config, model, Msg::SpawnPressed);

        assert!(model.spawn_in_flight);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_spawn_failure_reenables_spawn_without_touching_status() {
        let config = Config::default();
        let model = Model {
            spawn_in_flight: true,
            status: "previous status".to_string(),
            ..Default::default()
        };

        let (model, effects) = transition(&config, model, Msg::SpawnDone(Err("no service".into())));

        assert!(!model.spawn_in_flight);
        assert_eq!(model.status, "previous status");
        assert!(effects.is_empty());
    }

    #[test]
    fn test_latest_frame_wins() {
        let config = Config::default();
        let (model, _) = init();

        let (model, _) = transition(&config, model, Msg::FrameReceived(bgr_message(4, 4)));
        let first_seq = model.frame_seq;
        let first_frame = model.current_frame.clone().unwrap();

        let (model, effects) = transition(&config, model, Msg::FrameReceived(bgr_message(8, 2)));

        assert!(effects.is_empty());
        assert_eq!(model.frame_seq, first_seq + 1);
        let current = model.current_frame.unwrap();
        assert_ne!(current, first_frame);
        assert_eq!(current.width, 8);
        assert_eq!(current.height, 2);
    }

    #[test]
    fn test_malformed_frame_keeps_the_slot_and_reports_it() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, Msg::FrameReceived(bgr_message(4, 4)));
        let kept = model.current_frame.clone();

        let bad = ImageMessage {
            width: 4,
            height: 4,
            data: vec![0; 5],
        };
        let (model, effects) = transition(&config, model, Msg::FrameReceived(bad));

        assert!(effects.is_empty());
        assert_eq!(model.current_frame, kept);
        assert!(model.status.starts_with("Camera frame rejected"));
    }

    #[test]
    fn test_capture_without_frame_sets_fixed_status_and_does_no_io() {
        let config = Config::default();
        let (model, _) = init();

        let (model, effects) = transition(&config, model, Msg::CapturePressed);

        assert!(effects.is_empty());
        assert_eq!(model.status, NO_FRAME_STATUS);
    }

    #[test]
    fn test_capture_with_frame_saves_a_copy_of_the_current_frame() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, Msg::FrameReceived(bgr_message(4, 4)));
        let expected = model.current_frame.clone().unwrap();

        let (model, effects) = transition(&config, model, Msg::CapturePressed);

        assert_eq!(effects, vec![Effect::SaveFrame(expected)]);
        assert!(model.current_frame.is_some());
    }

    #[test]
    fn test_capture_done_status_includes_timestamp_and_path_hint() {
        let config = Config::default();
        let (model, _) = init();
        let shot = Screenshot {
            path: PathBuf::from("screenshots/camera_feed_screenshot_2024-03-09_14-30-05.png"),
            timestamp: "2024-03-09_14-30-05".to_string(),
        };

        let (model, effects) = transition(&config, model, Msg::CaptureDone(Ok(shot)));

        assert!(effects.is_empty());
        assert_eq!(
            model.status,
            "Screenshot saved at 2024-03-09_14-30-05 in 'pwd/screenshots'"
        );
    }

    #[test]
    fn test_capture_failure_is_surfaced_in_the_status_field() {
        let config = Config::default();
        let (model, _) = init();

        let (model, effects) =
            transition(&config, model, Msg::CaptureDone(Err("disk full".into())));

        assert!(effects.is_empty());
        assert_eq!(model.status, "Screenshot failed: disk full");
    }
}
