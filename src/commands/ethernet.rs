use crate::base::address::IpAddress;
use crate::base::operation::CommandOperation;
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EthernetAction {
    IpAddress = 0,
    GatewayAddress = 1,
    SubnetMask = 2,
    Dhcp = 4,
    MulticastAddress = 5,
}

/// Commands configuring the controller's own network interface, so no
/// integration id is involved.
#[derive(Debug, Clone)]
pub struct EthernetCommandBuilder {
    core: CommandBuilder,
    ip_address: Option<IpAddress>,
    gateway_address: Option<IpAddress>,
    subnet_mask: Option<IpAddress>,
    multicast_address: Option<IpAddress>,
}

impl EthernetCommandBuilder {
    pub fn new() -> EthernetCommandBuilder {
        EthernetCommandBuilder {
            core: CommandBuilder::new("ETHERNET"),
            ip_address: None,
            gateway_address: None,
            subnet_mask: None,
            multicast_address: None,
        }
    }

    pub fn with_operation(mut self, operation: CommandOperation) -> Self {
        self.core.set_operation(operation);
        self
    }

    pub fn with_action(mut self, action: EthernetAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    pub fn with_ip_address(mut self, addr: IpAddress) -> Self {
        self.ip_address = Some(addr);
        self
    }

    pub fn with_gateway_address(mut self, addr: IpAddress) -> Self {
        self.gateway_address = Some(addr);
        self
    }

    pub fn with_subnet_mask(mut self, addr: IpAddress) -> Self {
        self.subnet_mask = Some(addr);
        self
    }

    pub fn with_multicast_address(mut self, addr: IpAddress) -> Self {
        self.multicast_address = Some(addr);
        self
    }

    fn build_get(self, action: EthernetAction) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let action = self.core.verify_action(action as u8)?;
        Ok(self.core.render(operation, &[action.to_string()]))
    }

    fn build_set(
        self,
        action: EthernetAction,
        addr: Option<IpAddress>,
        name: &'static str,
    ) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Set)?;
        let action = self.core.verify_action(action as u8)?;
        let addr = CommandBuilder::require_param(&addr, name)?;
        Ok(self
            .core
            .render(operation, &[action.to_string(), addr.to_string()]))
    }

    /// `?ETHERNET,0`
    pub fn build_get_ip_address_command(self) -> Result<String, CommandError> {
        self.build_get(EthernetAction::IpAddress)
    }

    /// `#ETHERNET,0,<ip>`
    pub fn build_set_ip_address_command(mut self) -> Result<String, CommandError> {
        let addr = self.ip_address.take();
        self.build_set(EthernetAction::IpAddress, addr, "ip address")
    }

    /// `?ETHERNET,1`
    pub fn build_get_gateway_address_command(self) -> Result<String, CommandError> {
        self.build_get(EthernetAction::GatewayAddress)
    }

    /// `#ETHERNET,1,<gateway>`
    pub fn build_set_gateway_address_command(mut self) -> Result<String, CommandError> {
        let addr = self.gateway_address.take();
        self.build_set(EthernetAction::GatewayAddress, addr, "gateway address")
    }

    /// `?ETHERNET,2`
    pub fn build_get_subnet_mask_command(self) -> Result<String, CommandError> {
        self.build_get(EthernetAction::SubnetMask)
    }

    /// `#ETHERNET,2,<mask>`
    pub fn build_set_subnet_mask_command(mut self) -> Result<String, CommandError> {
        let addr = self.subnet_mask.take();
        self.build_set(EthernetAction::SubnetMask, addr, "subnet mask")
    }

    /// `?ETHERNET,4`. DHCP state can only be queried.
    pub fn build_get_dhcp_command(self) -> Result<String, CommandError> {
        self.build_get(EthernetAction::Dhcp)
    }

    /// `?ETHERNET,5`
    pub fn build_get_multicast_address_command(self) -> Result<String, CommandError> {
        self.build_get(EthernetAction::MulticastAddress)
    }

    /// `#ETHERNET,5,<multicast>`
    pub fn build_set_multicast_address_command(mut self) -> Result<String, CommandError> {
        let addr = self.multicast_address.take();
        self.build_set(EthernetAction::MulticastAddress, addr, "multicast address")
    }
}
