use core::str::FromStr;
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AddressError {
    InvalidIntegrationId,
    InvalidIpAddress,
    InvalidSerialNumber,
}

impl fmt::Display for AddressError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            AddressError::InvalidIntegrationId => {
                write!(fmt, "Integration id out of range. id >= 1")
            }
            AddressError::InvalidIpAddress => write!(fmt, "Not a dotted-quad IP address"),
            AddressError::InvalidSerialNumber => {
                write!(fmt, "Serial number must be a non-empty hex string")
            }
        }
    }
}

impl std::error::Error for AddressError {}

/// Address of a device as configured in the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntegrationId(u32);

impl IntegrationId {
    pub fn new(id: u32) -> Result<IntegrationId, AddressError> {
        if id == 0 {
            return Err(AddressError::InvalidIntegrationId);
        }
        Ok(IntegrationId(id))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::convert::TryFrom<u32> for IntegrationId {
    type Error = AddressError;
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for IntegrationId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        self.0.fmt(fmt)
    }
}

impl FromStr for IntegrationId {
    type Err = AddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u32::from_str(s).map_or(Err(AddressError::InvalidIntegrationId), Self::new)
    }
}

/// Checked for dotted-quad syntax but stored as the caller wrote it, so the
/// wire form echoes the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(addr: &str) -> Result<IpAddress, AddressError> {
        if Ipv4Addr::from_str(addr).is_err() {
            return Err(AddressError::InvalidIpAddress);
        }
        Ok(IpAddress(addr.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        fmt.write_str(&self.0)
    }
}

impl FromStr for IpAddress {
    type Err = AddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Factory-assigned serial number, as printed on the device label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(serial: &str) -> Result<SerialNumber, AddressError> {
        if serial.is_empty() || !serial.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidSerialNumber);
        }
        Ok(SerialNumber(serial.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        fmt.write_str(&self.0)
    }
}

impl FromStr for SerialNumber {
    type Err = AddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
