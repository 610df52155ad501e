use anyhow::Result;
use swirl::{application::Application, logging, particles::SwirlConfig};

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    let result =
        Application::new(SwirlConfig::default()).and_then(|app| app.run());
    if let Err(err) = &result {
        log::error!("Swirl exited with an error {:?}", err);
    }
    result
}
