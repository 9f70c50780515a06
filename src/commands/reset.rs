use crate::base::operation::CommandOperation;
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResetAction {
    Reset = 0,
}

/// Restarts the controller itself, so no integration id is involved.
#[derive(Debug, Clone)]
pub struct ResetCommandBuilder {
    core: CommandBuilder,
}

impl ResetCommandBuilder {
    pub fn new() -> ResetCommandBuilder {
        ResetCommandBuilder {
            core: CommandBuilder::new("RESET"),
        }
    }

    pub fn with_operation(mut self, operation: CommandOperation) -> Self {
        self.core.set_operation(operation);
        self
    }

    pub fn with_action(mut self, action: ResetAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    /// `#RESET,0`
    pub fn build_reset_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Set)?;
        let action = self.core.verify_action(ResetAction::Reset as u8)?;
        Ok(self.core.render(operation, &[action.to_string()]))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset() {
        let cmd = ResetCommandBuilder::new()
            .with_operation(CommandOperation::Set)
            .with_action(ResetAction::Reset)
            .build_reset_command()
            .unwrap();
        assert_eq!(cmd, "#RESET,0<CR><LF>");
    }

    #[test]
    fn reset_is_set_only() {
        match ResetCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_action(ResetAction::Reset)
            .build_reset_command()
        {
            Err(CommandError::IncorrectOperationProvided { expected, actual }) => {
                assert_eq!(expected, CommandOperation::Set);
                assert_eq!(actual, CommandOperation::Get);
            }
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn missing_action() {
        match ResetCommandBuilder::new()
            .with_operation(CommandOperation::Set)
            .build_reset_command()
        {
            Err(CommandError::ActionNumberNotProvided) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }
}
