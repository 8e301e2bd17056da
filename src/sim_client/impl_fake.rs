use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::sim_client::interface::{PoseRequest, RelocationService};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Stands in for the simulator's relocation service. Records every request it
/// receives so tests can assert on the wire payload.
pub struct RelocationServiceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    config: Config,
    requests: Mutex<Vec<PoseRequest>>,
}

impl RelocationServiceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, config: Config) -> Self {
        Self {
            logger: logger.with_namespace("sim_client").with_namespace("fake"),
            config,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<PoseRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RelocationService for RelocationServiceFake {
    fn set_model_state(
        &self,
        request: &PoseRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Calling {} for model '{}' at ({:.2}, {:.2}, {:.2})",
            self.config.relocation_service_name,
            request.model_name,
            request.position.x,
            request.position.y,
            request.position.z,
        ))?;
        thread::sleep(Duration::from_millis(200));
        self.requests.lock().unwrap().push(request.clone());
        self.logger.info("Model state accepted")?;
        Ok(())
    }
}
