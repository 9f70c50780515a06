//! Build command strings from loosely typed requests, as supplied by the
//! command line tools or a batch file. Values are validated by the value
//! types and the family builders; this module only routes.

use core::str::FromStr;
use serde_derive::Deserialize;

use crate::base::address::{IntegrationId, IpAddress, SerialNumber};
use crate::base::operation::CommandOperation;
use crate::base::state::{EnableState, EventIndex, OutputLevel, VariableState};
use crate::base::time::{DelayTime, FadeTime};
use crate::commands::area::{AreaAction, AreaCommandBuilder};
use crate::commands::ethernet::{EthernetAction, EthernetCommandBuilder};
use crate::commands::integration_id::{IntegrationIdAction, IntegrationIdCommandBuilder};
use crate::commands::output::OutputCommandBuilder;
use crate::commands::reset::{ResetAction, ResetCommandBuilder};
use crate::commands::sysvar::{SystemVariableAction, SystemVariableCommandBuilder};
use crate::commands::timeclock::{TimeClockAction, TimeClockCommandBuilder};
use crate::error::DynResult;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandRequest {
    pub family: String,
    pub operation: String,
    #[serde(default)]
    pub integration_id: Option<u32>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub fade: Option<String>,
    #[serde(default)]
    pub delay: Option<String>,
    #[serde(default)]
    pub variable_state: Option<u32>,
    #[serde(default)]
    pub event_index: Option<u32>,
    #[serde(default)]
    pub enable_state: Option<String>,
}

fn unknown_action(family: &str, action: &str) -> Box<dyn std::error::Error + Send + Sync> {
    format!("Unknown action '{}' for {}", action, family).into()
}

pub fn compose(req: &CommandRequest) -> DynResult<String> {
    let operation = CommandOperation::from_str(&req.operation)?;
    let action = req.action.as_deref().unwrap_or("");
    match req.family.to_ascii_lowercase().as_str() {
        "area" => compose_area(req, operation, action),
        "ethernet" => compose_ethernet(req, operation, action),
        "integrationid" => compose_integration_id(req, operation, action),
        "output" => compose_output(req, operation, action),
        "reset" => compose_reset(operation, action),
        "sysvar" => compose_sysvar(req, operation, action),
        "timeclock" => compose_timeclock(req, operation, action),
        family => Err(format!("Unknown command family '{}'", family).into()),
    }
}

fn compose_area(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = AreaCommandBuilder::new().with_operation(operation);
    if let Some(id) = req.integration_id {
        builder = builder.with_integration_id(IntegrationId::new(id)?);
    }
    match action {
        "occupancy-state" => Ok(builder
            .with_action(AreaAction::OccupancyState)
            .build_get_occupancy_state_command()?),
        _ => Err(unknown_action("AREA", action)),
    }
}

fn compose_ethernet(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = EthernetCommandBuilder::new().with_operation(operation);
    let addr = match &req.address {
        Some(addr) => Some(IpAddress::new(addr)?),
        None => None,
    };
    match action {
        "ip-address" => {
            builder = builder.with_action(EthernetAction::IpAddress);
            if let Some(addr) = addr {
                builder = builder.with_ip_address(addr);
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_ip_address_command()?),
                CommandOperation::Set => Ok(builder.build_set_ip_address_command()?),
            }
        }
        "gateway-address" => {
            builder = builder.with_action(EthernetAction::GatewayAddress);
            if let Some(addr) = addr {
                builder = builder.with_gateway_address(addr);
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_gateway_address_command()?),
                CommandOperation::Set => Ok(builder.build_set_gateway_address_command()?),
            }
        }
        "subnet-mask" => {
            builder = builder.with_action(EthernetAction::SubnetMask);
            if let Some(addr) = addr {
                builder = builder.with_subnet_mask(addr);
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_subnet_mask_command()?),
                CommandOperation::Set => Ok(builder.build_set_subnet_mask_command()?),
            }
        }
        "dhcp" => Ok(builder
            .with_action(EthernetAction::Dhcp)
            .build_get_dhcp_command()?),
        "multicast-address" => {
            builder = builder.with_action(EthernetAction::MulticastAddress);
            if let Some(addr) = addr {
                builder = builder.with_multicast_address(addr);
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_multicast_address_command()?),
                CommandOperation::Set => Ok(builder.build_set_multicast_address_command()?),
            }
        }
        _ => Err(unknown_action("ETHERNET", action)),
    }
}

fn compose_integration_id(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = IntegrationIdCommandBuilder::new().with_operation(operation);
    if let Some(id) = req.integration_id {
        builder = builder.with_integration_id(IntegrationId::new(id)?);
    }
    if let Some(serial) = &req.serial_number {
        builder = builder.with_serial_number(SerialNumber::new(serial)?);
    }
    match action {
        "from-serial" => Ok(builder
            .with_action(IntegrationIdAction::IntegrationIdForSerialNumber)
            .build_get_integration_id_for_serial_number_command()?),
        "info" => Ok(builder
            .with_action(IntegrationIdAction::InfoFromIntegrationId)
            .build_get_info_from_integration_id_command()?),
        _ => Err(unknown_action("INTEGRATIONID", action)),
    }
}

fn compose_output(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = OutputCommandBuilder::new().with_operation(operation);
    if let Some(id) = req.integration_id {
        builder = builder.with_integration_id(IntegrationId::new(id)?);
    }
    match action {
        "output-level" => {
            if let Some(level) = req.level {
                builder = builder.with_output_level(OutputLevel::new(level)?);
            }
            if let Some(fade) = &req.fade {
                builder = builder.with_fade_time(FadeTime::from(fade.as_str()));
            }
            if let Some(delay) = &req.delay {
                builder = builder.with_delay_time(DelayTime::from(delay.as_str()));
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_output_level_command()?),
                CommandOperation::Set => Ok(builder.build_set_output_level_command()?),
            }
        }
        "raise" => Ok(builder.build_start_raising_level_command()?),
        "lower" => Ok(builder.build_start_lowering_level_command()?),
        _ => Err(unknown_action("OUTPUT", action)),
    }
}

fn compose_reset(operation: CommandOperation, action: &str) -> DynResult<String> {
    match action {
        "" | "reset" => Ok(ResetCommandBuilder::new()
            .with_operation(operation)
            .with_action(ResetAction::Reset)
            .build_reset_command()?),
        _ => Err(unknown_action("RESET", action)),
    }
}

fn compose_sysvar(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = SystemVariableCommandBuilder::new().with_operation(operation);
    if let Some(id) = req.integration_id {
        builder = builder.with_integration_id(IntegrationId::new(id)?);
    }
    match action {
        "variable-state" => {
            if let Some(state) = req.variable_state {
                builder = builder.with_variable_state(VariableState::new(state));
            }
            match operation {
                CommandOperation::Get => Ok(builder.build_get_variable_state_command()?),
                CommandOperation::Set => Ok(builder.build_set_variable_state_command()?),
            }
        }
        _ => Err(unknown_action("SYSVAR", action)),
    }
}

fn compose_timeclock(
    req: &CommandRequest,
    operation: CommandOperation,
    action: &str,
) -> DynResult<String> {
    let mut builder = TimeClockCommandBuilder::new().with_operation(operation);
    if let Some(id) = req.integration_id {
        builder = builder.with_integration_id(IntegrationId::new(id)?);
    }
    if let Some(index) = req.event_index {
        builder = builder.with_event_index(EventIndex::new(index));
    }
    if let Some(state) = &req.enable_state {
        builder = builder.with_enable_state(EnableState::from_str(state)?);
    }
    match action {
        "sunrise" => Ok(builder
            .with_action(TimeClockAction::SunriseTime)
            .build_get_sunrise_time_command()?),
        "sunset" => Ok(builder
            .with_action(TimeClockAction::SunsetTime)
            .build_get_sunset_time_command()?),
        "days-schedule" => Ok(builder
            .with_action(TimeClockAction::DaysSchedule)
            .build_get_days_schedule_command()?),
        "execute-event" => Ok(builder
            .with_action(TimeClockAction::ExecuteIndexedEvent)
            .build_set_execute_indexed_event_command()?),
        "event-enable" => Ok(builder
            .with_action(TimeClockAction::IndexedEventEnableState)
            .build_set_indexed_event_enable_state_command()?),
        _ => Err(unknown_action("TIMECLOCK", action)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn routes_area_request() {
        let req = CommandRequest {
            family: "area".to_string(),
            operation: "get".to_string(),
            integration_id: Some(2),
            action: Some("occupancy-state".to_string()),
            ..Default::default()
        };
        assert_eq!(compose(&req).unwrap(), "?AREA,2,8<CR><LF>");
    }

    #[test]
    fn routes_output_set_with_tokens() {
        let req = CommandRequest {
            family: "output".to_string(),
            operation: "#".to_string(),
            integration_id: Some(2),
            action: Some("output-level".to_string()),
            level: Some(70),
            fade: Some("4".to_string()),
            delay: Some("2".to_string()),
            ..Default::default()
        };
        assert_eq!(compose(&req).unwrap(), "#OUTPUT,2,1,70,4,2<CR><LF>");
    }

    #[test]
    fn builder_errors_pass_through() {
        let req = CommandRequest {
            family: "ethernet".to_string(),
            operation: "set".to_string(),
            action: Some("ip-address".to_string()),
            ..Default::default()
        };
        let err = compose(&req).unwrap_err();
        assert_eq!(err.to_string(), "No ip address parameter provided");
    }

    #[test]
    fn unknown_family() {
        let req = CommandRequest {
            family: "shade".to_string(),
            operation: "get".to_string(),
            ..Default::default()
        };
        assert!(compose(&req).is_err());
    }
}
