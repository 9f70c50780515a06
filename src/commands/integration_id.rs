use crate::base::address::{IntegrationId, SerialNumber};
use crate::base::operation::CommandOperation;
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntegrationIdAction {
    IntegrationIdForSerialNumber = 1,
    InfoFromIntegrationId = 3,
}

/// Lookup commands mapping between serial numbers and integration ids.
/// The id, when required, goes in the parameter position after the
/// action code, like the serial number of the sibling action.
#[derive(Debug, Clone)]
pub struct IntegrationIdCommandBuilder {
    core: CommandBuilder,
    serial_number: Option<SerialNumber>,
}

impl IntegrationIdCommandBuilder {
    pub fn new() -> IntegrationIdCommandBuilder {
        IntegrationIdCommandBuilder {
            core: CommandBuilder::new("INTEGRATIONID"),
            serial_number: None,
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

    pub fn with_action(mut self, action: IntegrationIdAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    pub fn with_serial_number(mut self, serial: SerialNumber) -> Self {
        self.serial_number = Some(serial);
        self
    }

    /// `?INTEGRATIONID,1,<serial>`
    pub fn build_get_integration_id_for_serial_number_command(
        self,
    ) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let action = self
            .core
            .verify_action(IntegrationIdAction::IntegrationIdForSerialNumber as u8)?;
        let serial = CommandBuilder::require_param(&self.serial_number, "serial number")?;
        Ok(self
            .core
            .render(operation, &[action.to_string(), serial.to_string()]))
    }

    /// `?INTEGRATIONID,3,<id>`
    pub fn build_get_info_from_integration_id_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let id = self.core.verify_integration_id()?;
        let action = self
            .core
            .verify_action(IntegrationIdAction::InfoFromIntegrationId as u8)?;
        Ok(self
            .core
            .render(operation, &[action.to_string(), id.to_string()]))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_for_serial_number() {
        let cmd = IntegrationIdCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_action(IntegrationIdAction::IntegrationIdForSerialNumber)
            .with_serial_number(SerialNumber::new("5678EFEF").unwrap())
            .build_get_integration_id_for_serial_number_command()
            .unwrap();
        assert_eq!(cmd, "?INTEGRATIONID,1,5678EFEF<CR><LF>");
    }

    #[test]
    fn info_from_id() {
        let cmd = IntegrationIdCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_integration_id(IntegrationId::new(9).unwrap())
            .with_action(IntegrationIdAction::InfoFromIntegrationId)
            .build_get_info_from_integration_id_command()
            .unwrap();
        assert_eq!(cmd, "?INTEGRATIONID,3,9<CR><LF>");
    }

    #[test]
    fn serial_lookup_needs_no_id() {
        // Only the serial number is required for action 1
        match IntegrationIdCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_action(IntegrationIdAction::IntegrationIdForSerialNumber)
            .build_get_integration_id_for_serial_number_command()
        {
            Err(CommandError::ParameterNotProvided("serial number")) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn info_lookup_needs_id() {
        match IntegrationIdCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_action(IntegrationIdAction::InfoFromIntegrationId)
            .build_get_info_from_integration_id_command()
        {
            Err(CommandError::IntegrationIdNotProvided) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn wrong_action_across_methods() {
        match IntegrationIdCommandBuilder::new()
            .with_operation(CommandOperation::Get)
            .with_action(IntegrationIdAction::InfoFromIntegrationId)
            .with_serial_number(SerialNumber::new("00AA").unwrap())
            .build_get_integration_id_for_serial_number_command()
        {
            Err(CommandError::IncorrectActionNumberProvided { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 3);
            }
            r => panic!("Unexpected result: {:?}", r),
        }
    }
}
