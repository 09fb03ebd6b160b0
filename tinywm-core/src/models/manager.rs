use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(
        display_server: crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    ) -> Self {
        Self::new(crate::config::TestConfig::default(), display_server)
    }
}
