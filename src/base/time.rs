use std::fmt;
use std::time::Duration;

/// Input shapes accepted for the fade and delay parameters. A token is
/// passed through verbatim for callers that already hold a pre-formatted
/// value; a timespan is rendered as HH:MM:SS with optional fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParam {
    Token(String),
    Timespan(Duration),
}

impl TimeParam {
    fn format(&self, fmt: &mut fmt::Formatter, keep_fraction: bool) -> fmt::Result {
        match self {
            TimeParam::Token(token) => fmt.write_str(token),
            TimeParam::Timespan(duration) => {
                let secs = duration.as_secs();
                // Fraction in 100 ns ticks, seven digits
                let ticks = u64::from(duration.subsec_nanos()) / 100;
                write!(
                    fmt,
                    "{:02}:{:02}:{:02}",
                    secs / 3600,
                    (secs / 60) % 60,
                    secs % 60
                )?;
                if keep_fraction && ticks > 0 {
                    write!(fmt, ".{:07}", ticks)?;
                }
                Ok(())
            }
        }
    }
}

/// Time an output takes to reach its new level. Sub-second precision is
/// kept on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeTime(TimeParam);

impl FadeTime {
    pub fn new(param: TimeParam) -> FadeTime {
        FadeTime(param)
    }
}

impl From<&str> for FadeTime {
    fn from(token: &str) -> Self {
        FadeTime(TimeParam::Token(token.to_string()))
    }
}

impl From<String> for FadeTime {
    fn from(token: String) -> Self {
        FadeTime(TimeParam::Token(token))
    }
}

impl From<u32> for FadeTime {
    fn from(seconds: u32) -> Self {
        FadeTime(TimeParam::Token(seconds.to_string()))
    }
}

impl From<Duration> for FadeTime {
    fn from(duration: Duration) -> Self {
        FadeTime(TimeParam::Timespan(duration))
    }
}

impl fmt::Display for FadeTime {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        self.0.format(fmt, true)
    }
}

/// Time to wait before an output change starts. Truncated to whole
/// seconds on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayTime(TimeParam);

impl DelayTime {
    pub fn new(param: TimeParam) -> DelayTime {
        DelayTime(param)
    }
}

impl From<&str> for DelayTime {
    fn from(token: &str) -> Self {
        DelayTime(TimeParam::Token(token.to_string()))
    }
}

impl From<String> for DelayTime {
    fn from(token: String) -> Self {
        DelayTime(TimeParam::Token(token))
    }
}

impl From<u32> for DelayTime {
    fn from(seconds: u32) -> Self {
        DelayTime(TimeParam::Token(seconds.to_string()))
    }
}

impl From<Duration> for DelayTime {
    fn from(duration: Duration) -> Self {
        DelayTime(TimeParam::Timespan(duration))
    }
}

impl fmt::Display for DelayTime {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        self.0.format(fmt, false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fade_timespan() {
        let fade = FadeTime::from(Duration::from_millis(4250));
        assert_eq!(fade.to_string(), "00:00:04.2500000");
        let fade = FadeTime::from(Duration::from_secs(4));
        assert_eq!(fade.to_string(), "00:00:04");
        let fade = FadeTime::from(Duration::from_secs(2 * 3600 + 31 * 60 + 5));
        assert_eq!(fade.to_string(), "02:31:05");
    }

    #[test]
    fn delay_truncates_fraction() {
        let delay = DelayTime::from(Duration::from_secs(2));
        assert_eq!(delay.to_string(), "00:00:02");
        let delay = DelayTime::from(Duration::from_millis(2750));
        assert_eq!(delay.to_string(), "00:00:02");
    }

    #[test]
    fn token_passthrough() {
        assert_eq!(FadeTime::from("4").to_string(), "4");
        assert_eq!(FadeTime::from(4u32).to_string(), "4");
        assert_eq!(DelayTime::from("00:00:02").to_string(), "00:00:02");
    }
}
