use crate::base::address::IntegrationId;
use crate::base::operation::CommandOperation;
use crate::base::state::VariableState;
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SystemVariableAction {
    VariableState = 1,
}

/// Commands reading or writing a controller variable.
#[derive(Debug, Clone)]
pub struct SystemVariableCommandBuilder {
    core: CommandBuilder,
    variable_state: Option<VariableState>,
}

impl SystemVariableCommandBuilder {
    pub fn new() -> SystemVariableCommandBuilder {
        SystemVariableCommandBuilder {
            core: CommandBuilder::new("SYSVAR"),
            variable_state: None,
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

    pub fn with_action(mut self, action: SystemVariableAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    pub fn with_variable_state(mut self, state: VariableState) -> Self {
        self.variable_state = Some(state);
        self
    }

    /// `?SYSVAR,<id>,1`
    pub fn build_get_variable_state_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let id = self.core.verify_integration_id()?;
        let action = self
            .core
            .verify_action(SystemVariableAction::VariableState as u8)?;
        Ok(self
            .core
            .render(operation, &[id.to_string(), action.to_string()]))
    }

    /// `#SYSVAR,<id>,1,<state>`
    pub fn build_set_variable_state_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Set)?;
        let id = self.core.verify_integration_id()?;
        let action = self
            .core
            .verify_action(SystemVariableAction::VariableState as u8)?;
        let state = CommandBuilder::require_param(&self.variable_state, "variable state")?;
        Ok(self.core.render(
            operation,
            &[id.to_string(), action.to_string(), state.to_string()],
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(id: u32) -> IntegrationId {
        IntegrationId::new(id).unwrap()
    }

    #[test]
    fn get_variable_state() {
        let cmd = SystemVariableCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_integration_id(id(12))
            .with_action(SystemVariableAction::VariableState)
            .build_get_variable_state_command()
            .unwrap();
        assert_eq!(cmd, "?SYSVAR,12,1<CR><LF>");
    }

    #[test]
    fn set_variable_state() {
        let cmd = SystemVariableCommandBuilder::new()
            .with_operation(CommandOperation::Set)
            .with_integration_id(id(12))
            .with_action(SystemVariableAction::VariableState)
            .with_variable_state(VariableState::new(3))
            .build_set_variable_state_command()
            .unwrap();
        assert_eq!(cmd, "#SYSVAR,12,1,3<CR><LF>");
    }

    #[test]
    fn set_without_state() {
        match SystemVariableCommandBuilder::new()
            .with_operation(CommandOperation::Set)
            .with_integration_id(id(12))
            .with_action(SystemVariableAction::VariableState)
            .build_set_variable_state_command()
        {
            Err(CommandError::ParameterNotProvided("variable state")) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn missing_id_wins_over_missing_state() {
        match SystemVariableCommandBuilder::new()
            .with_operation(CommandOperation::Set)
            .with_action(SystemVariableAction::VariableState)
            .build_set_variable_state_command()
        {
            Err(CommandError::IntegrationIdNotProvided) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }
}
