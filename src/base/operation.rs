use core::str::FromStr;
use std::fmt;

/// Query or change a value on the controller. The operation selects the
/// symbol the command string starts with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandOperation {
    Get,
    Set,
}

impl CommandOperation {
    pub const fn symbol(&self) -> char {
        match self {
            CommandOperation::Get => '?',
            CommandOperation::Set => '#',
        }
    }
}

impl fmt::Display for CommandOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OperationError {
    UnknownOperation,
}

impl fmt::Display for OperationError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            OperationError::UnknownOperation => write!(fmt, "Not an operation. Use '?' or '#'"),
        }
    }
}

impl std::error::Error for OperationError {}

impl FromStr for CommandOperation {
    type Err = OperationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "?" || s.eq_ignore_ascii_case("get") {
            Ok(CommandOperation::Get)
        } else if s == "#" || s.eq_ignore_ascii_case("set") {
            Ok(CommandOperation::Set)
        } else {
            Err(OperationError::UnknownOperation)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(CommandOperation::Get.to_string(), "?");
        assert_eq!(CommandOperation::Set.to_string(), "#");
    }

    #[test]
    fn parse() {
        assert_eq!(CommandOperation::from_str("?"), Ok(CommandOperation::Get));
        assert_eq!(CommandOperation::from_str("#"), Ok(CommandOperation::Set));
        assert_eq!(CommandOperation::from_str("GET"), Ok(CommandOperation::Get));
        assert_eq!(CommandOperation::from_str("set"), Ok(CommandOperation::Set));
        assert_eq!(
            CommandOperation::from_str("!"),
            Err(OperationError::UnknownOperation)
        );
    }
}
