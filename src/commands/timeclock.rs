use crate::base::address::IntegrationId;
use crate::base::operation::CommandOperation;
use crate::base::state::{EnableState, EventIndex};
use crate::builder::{CommandBuilder, CommandError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeClockAction {
    SunriseTime = 2,
    SunsetTime = 3,
    DaysSchedule = 4,
    ExecuteIndexedEvent = 5,
    IndexedEventEnableState = 6,
}

/// Commands for a time clock and its scheduled events.
#[derive(Debug, Clone)]
pub struct TimeClockCommandBuilder {
    core: CommandBuilder,
    event_index: Option<EventIndex>,
    enable_state: Option<EnableState>,
}

impl TimeClockCommandBuilder {
    pub fn new() -> TimeClockCommandBuilder {
        TimeClockCommandBuilder {
            core: CommandBuilder::new("TIMECLOCK"),
            event_index: None,
            enable_state: None,
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

    pub fn with_action(mut self, action: TimeClockAction) -> Self {
        self.core.set_action(action as u8);
        self
    }

    pub fn with_event_index(mut self, index: EventIndex) -> Self {
        self.event_index = Some(index);
        self
    }

    pub fn with_enable_state(mut self, state: EnableState) -> Self {
        self.enable_state = Some(state);
        self
    }

    fn build_get(self, action: TimeClockAction) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Get)?;
        let id = self.core.verify_integration_id()?;
        let action = self.core.verify_action(action as u8)?;
        Ok(self
            .core
            .render(operation, &[id.to_string(), action.to_string()]))
    }

    /// `?TIMECLOCK,<id>,2`
    pub fn build_get_sunrise_time_command(self) -> Result<String, CommandError> {
        self.build_get(TimeClockAction::SunriseTime)
    }

    /// `?TIMECLOCK,<id>,3`
    pub fn build_get_sunset_time_command(self) -> Result<String, CommandError> {
        self.build_get(TimeClockAction::SunsetTime)
    }

    /// `?TIMECLOCK,<id>,4`
    pub fn build_get_days_schedule_command(self) -> Result<String, CommandError> {
        self.build_get(TimeClockAction::DaysSchedule)
    }

    /// `#TIMECLOCK,<id>,5,<event>`
    pub fn build_set_execute_indexed_event_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Set)?;
        let id = self.core.verify_integration_id()?;
        let action = self
            .core
            .verify_action(TimeClockAction::ExecuteIndexedEvent as u8)?;
        let event = CommandBuilder::require_param(&self.event_index, "event index")?;
        Ok(self.core.render(
            operation,
            &[id.to_string(), action.to_string(), event.to_string()],
        ))
    }

    /// `#TIMECLOCK,<id>,6,<event>,<enable>`
    pub fn build_set_indexed_event_enable_state_command(self) -> Result<String, CommandError> {
        let operation = self.core.verify_operation(CommandOperation::Set)?;
        let id = self.core.verify_integration_id()?;
        let action = self
            .core
            .verify_action(TimeClockAction::IndexedEventEnableState as u8)?;
        let event = CommandBuilder::require_param(&self.event_index, "event index")?;
        let enable = CommandBuilder::require_param(&self.enable_state, "enable state")?;
        Ok(self.core.render(
            operation,
            &[
                id.to_string(),
                action.to_string(),
                event.to_string(),
                enable.to_string(),
            ],
        ))
    }
}
