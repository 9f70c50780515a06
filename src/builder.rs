use crate::base::address::IntegrationId;
use crate::base::operation::CommandOperation;
use std::fmt;

/// Trailing marker appended to every finished command. The protocol
/// reference writes it as the literal text "<CR><LF>"; switch this
/// constant to "\r\n" if a controller turns out to expect the control
/// bytes instead.
pub const TERMINATOR: &str = "<CR><LF>";

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    OperationNotProvided,
    IncorrectOperationProvided {
        expected: CommandOperation,
        actual: CommandOperation,
    },
    IntegrationIdNotProvided,
    ActionNumberNotProvided,
    IncorrectActionNumberProvided {
        expected: u8,
        actual: u8,
    },
    ParameterNotProvided(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            CommandError::OperationNotProvided => write!(fmt, "No operation provided"),
            CommandError::IncorrectOperationProvided { expected, actual } => {
                write!(fmt, "Expected operation '{}', not '{}'", expected, actual)
            }
            CommandError::IntegrationIdNotProvided => write!(fmt, "No integration id provided"),
            CommandError::ActionNumberNotProvided => write!(fmt, "No action number provided"),
            CommandError::IncorrectActionNumberProvided { expected, actual } => {
                write!(fmt, "Expected action number {}, not {}", expected, actual)
            }
            CommandError::ParameterNotProvided(name) => {
                write!(fmt, "No {} parameter provided", name)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Staging area shared by all command families. Setters only store;
/// every rule is checked by the terminal build method, first violation
/// wins: operation set, operation matches, integration id, action set,
/// action matches, parameters.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    keyword: &'static str,
    operation: Option<CommandOperation>,
    integration_id: Option<IntegrationId>,
    action: Option<u8>,
}

impl CommandBuilder {
    pub fn new(keyword: &'static str) -> CommandBuilder {
        CommandBuilder {
            keyword,
            operation: None,
            integration_id: None,
            action: None,
        }
    }

    pub fn set_operation(&mut self, operation: CommandOperation) {
        self.operation = Some(operation);
    }

    pub fn set_integration_id(&mut self, id: IntegrationId) {
        self.integration_id = Some(id);
    }

    pub fn set_action(&mut self, action: u8) {
        self.action = Some(action);
    }

    /// An operation must be set and must be the one the invoked build
    /// method is tied to.
    pub fn verify_operation(
        &self,
        expected: CommandOperation,
    ) -> Result<CommandOperation, CommandError> {
        match self.operation {
            None => Err(CommandError::OperationNotProvided),
            Some(actual) if actual != expected => {
                Err(CommandError::IncorrectOperationProvided { expected, actual })
            }
            Some(operation) => Ok(operation),
        }
    }

    pub fn verify_integration_id(&self) -> Result<IntegrationId, CommandError> {
        self.integration_id
            .ok_or(CommandError::IntegrationIdNotProvided)
    }

    /// An action must be set and must match the invoked build method.
    /// Families whose build methods imply the action skip this check.
    pub fn verify_action(&self, expected: u8) -> Result<u8, CommandError> {
        match self.action {
            None => Err(CommandError::ActionNumberNotProvided),
            Some(actual) if actual != expected => {
                Err(CommandError::IncorrectActionNumberProvided { expected, actual })
            }
            Some(action) => Ok(action),
        }
    }

    /// `name` is the human-readable parameter name used in the error.
    pub fn require_param<'a, T>(
        param: &'a Option<T>,
        name: &'static str,
    ) -> Result<&'a T, CommandError> {
        param.as_ref().ok_or(CommandError::ParameterNotProvided(name))
    }

    /// Assemble the final string. `fields` follow the keyword in the
    /// order fixed by the family grammar.
    pub fn render(&self, operation: CommandOperation, fields: &[String]) -> String {
        let mut cmd = format!("{}{}", operation, self.keyword);
        for field in fields {
            cmd.push(',');
            cmd.push_str(field);
        }
        cmd.push_str(TERMINATOR);
        cmd
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_fields_in_order() {
        let mut builder = CommandBuilder::new("AREA");
        builder.set_operation(CommandOperation::Get);
        let cmd = builder.render(
            CommandOperation::Get,
            &["2".to_string(), "8".to_string()],
        );
        assert_eq!(cmd, "?AREA,2,8<CR><LF>");
    }

    #[test]
    fn render_without_fields() {
        let builder = CommandBuilder::new("RESET");
        let cmd = builder.render(CommandOperation::Set, &[]);
        assert_eq!(cmd, "#RESET<CR><LF>");
    }

    #[test]
    fn operation_checks_first() {
        // Nothing set at all: the missing operation must win
        let builder = CommandBuilder::new("AREA");
        assert_eq!(
            builder.verify_operation(CommandOperation::Get),
            Err(CommandError::OperationNotProvided)
        );

        let mut builder = CommandBuilder::new("AREA");
        builder.set_operation(CommandOperation::Set);
        assert_eq!(
            builder.verify_operation(CommandOperation::Get),
            Err(CommandError::IncorrectOperationProvided {
                expected: CommandOperation::Get,
                actual: CommandOperation::Set
            })
        );
    }

    #[test]
    fn action_checks() {
        let builder = CommandBuilder::new("ETHERNET");
        assert_eq!(
            builder.verify_action(0),
            Err(CommandError::ActionNumberNotProvided)
        );

        let mut builder = CommandBuilder::new("ETHERNET");
        builder.set_action(5);
        assert_eq!(
            builder.verify_action(2),
            Err(CommandError::IncorrectActionNumberProvided {
                expected: 2,
                actual: 5
            })
        );
        assert_eq!(builder.verify_action(5), Ok(5));
    }

    #[test]
    fn missing_param_names_the_parameter() {
        let missing: Option<u8> = None;
        match CommandBuilder::require_param(&missing, "event index") {
            Err(CommandError::ParameterNotProvided("event index")) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandError::IncorrectOperationProvided {
                expected: CommandOperation::Get,
                actual: CommandOperation::Set
            }
            .to_string(),
            "Expected operation '?', not '#'"
        );
        assert_eq!(
            CommandError::IncorrectActionNumberProvided {
                expected: 2,
                actual: 5
            }
            .to_string(),
            "Expected action number 2, not 5"
        );
        assert_eq!(
            CommandError::ParameterNotProvided("ip address").to_string(),
            "No ip address parameter provided"
        );
    }
}
