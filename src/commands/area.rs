use crate::base::address::IntegrationId;
use crate::base::operation::CommandOperation;
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AreaAction {
    OccupancyState = 8,
}

/// Commands addressing an area occupancy sensor.
#[derive(Debug, Clone)]
pub struct AreaCommandBuilder {
    core: CommandBuilder,
}

impl AreaCommandBuilder {
    pub fn new() -> AreaCommandBuilder {
        AreaCommandBuilder {
            core: CommandBuilder::new("AREA"),
        }
    }

    pub fn with_operation(mut self, operation: CommandOperation) -> Self {
        self.core.set_operation(operation);
        self
    }

    pub fn with_integration_id(mut self, id: IntegrationId) -> Self {
        self.core.set_integration_id(id);
        self
    }

    pub fn with_action(mut self, action: AreaAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    /// `?AREA,<id>,8`
    pub fn build_get_occupancy_state_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let id = self.core.verify_integration_id()?;
        let action = self.core.verify_action(AreaAction::OccupancyState as u8)?;
        Ok(self
            .core
            .render(operation, &[id.to_string(), action.to_string()]))
    }
}
