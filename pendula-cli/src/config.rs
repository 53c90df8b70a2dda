// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use pendula_core::{Parameter, PendulumConfiguration};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    /// Expected a value for every parameter.
    ParameterCount(usize),
    /// The value could not be parsed as a number.
    InvalidNumber(Parameter, String),
    /// The value is infinite or not a number.
    NonFinite(Parameter),
    /// The configuration file could not be read.
    Io(std::path::PathBuf, std::io::Error),
    /// The configuration file is malformed.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::ParameterCount(count) => write!(
                f,
                "expected {} parameters, got {}",
                Parameter::ENTRY_ORDER.len(),
                count
            ),
            ConfigError::InvalidNumber(parameter, value) => {
                write!(f, "{}: invalid number: '{}'", parameter, value)
            }
            ConfigError::NonFinite(parameter) => write!(f, "{}: value must be finite", parameter),
            ConfigError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Pendula configuration file.
#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq)]
pub struct Config {
    /// Number of frames to simulate.
    pub frames: Option<u32>,
    /// Pendulum parameters.
    pub pendulum: PendulumConfiguration,
}

impl Config {
    /// Reject configurations with parameters that are not finite.
    fn validate(self) -> Result<Self> {
        validate(&self.pendulum)?;
        Ok(self)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str::<Config>(s)
            .map_err(ConfigError::Parse)?
            .validate()
    }
}

/// Read the configuration from file.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    log::debug!("Reading configuration from {}", path.display());

    std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?
        .parse()
}

/// Parse the pendulum parameters in entry order.
///
/// Every value must be a finite number.
pub fn from_args<S: AsRef<str>>(values: &[S]) -> Result<PendulumConfiguration> {
    if values.len() != Parameter::ENTRY_ORDER.len() {
        return Err(ConfigError::ParameterCount(values.len()));
    }

    let mut parsed = [0.0; 5];
    for ((parameter, value), slot) in Parameter::ENTRY_ORDER
        .iter()
        .zip(values)
        .zip(parsed.iter_mut())
    {
        *slot = parse_parameter(*parameter, value.as_ref())?;
    }

    let [x_base, l1, l2, theta1, theta2] = parsed;

    Ok(PendulumConfiguration::new(x_base, l1, l2, theta1, theta2))
}

fn parse_parameter(parameter: Parameter, value: &str) -> Result<f64> {
    let number = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber(parameter, value.to_string()))?;

    if !number.is_finite() {
        return Err(ConfigError::NonFinite(parameter));
    }

    Ok(number)
}

fn validate(config: &PendulumConfiguration) -> Result<()> {
    match Parameter::ALL
        .iter()
        .find(|parameter| !config.get(**parameter).is_finite())
    {
        Some(parameter) => Err(ConfigError::NonFinite(*parameter)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let config = from_args(&["0", "1.5", "2", "-0.3", " 0.25 "]).unwrap();

        assert_eq!(config, PendulumConfiguration::new(0.0, 1.5, 2.0, -0.3, 0.25));
    }

    #[test]
    fn test_from_args_invalid_number() {
        let error = from_args(&["0", "1", "abc", "0", "0"]).unwrap_err();

        match error {
            ConfigError::InvalidNumber(parameter, value) => {
                assert_eq!(parameter, Parameter::L2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_from_args_partial_input() {
        assert!(matches!(
            from_args(&["0", "1", "", "0", "0"]),
            Err(ConfigError::InvalidNumber(Parameter::L2, _))
        ));
        assert!(matches!(
            from_args(&["0", "1", "1.", "0", "-"]),
            Err(ConfigError::InvalidNumber(Parameter::Theta2, _))
        ));
    }

    #[test]
    fn test_from_args_non_finite() {
        assert!(matches!(
            from_args(&["0", "inf", "1", "0", "0"]),
            Err(ConfigError::NonFinite(Parameter::L1))
        ));
        assert!(matches!(
            from_args(&["0", "1", "1", "NaN", "0"]),
            Err(ConfigError::NonFinite(Parameter::Theta1))
        ));
    }

    #[test]
    fn test_from_args_count() {
        assert!(matches!(
            from_args(&["0", "1", "1"]),
            Err(ConfigError::ParameterCount(3))
        ));
    }

    #[test]
    fn test_config_from_str() {
        let config: Config = r#"
            frames = 250

            [pendulum]
            x_base = 0.5
            l1 = 1
            theta1 = 0.1
            l2 = 2.0
            theta2 = -0.1
        "#
        .parse()
        .unwrap();

        assert_eq!(config.frames, Some(250));
        assert_eq!(
            config.pendulum,
            PendulumConfiguration::new(0.5, 1.0, 2.0, 0.1, -0.1)
        );
    }

    #[test]
    fn test_config_without_frames() {
        let config: Config = r#"
            [pendulum]
            x_base = 0.0
            l1 = 1.0
            theta1 = 0.0
            l2 = 1.0
            theta2 = 0.0
        "#
        .parse()
        .unwrap();

        assert_eq!(config.frames, None);
    }

    #[test]
    fn test_config_rejects_non_finite() {
        let result = r#"
            [pendulum]
            x_base = 0.0
            l1 = nan
            theta1 = 0.0
            l2 = 1.0
            theta2 = 0.0
        "#
        .parse::<Config>();

        assert!(matches!(result, Err(ConfigError::NonFinite(Parameter::L1))));
    }

    #[test]
    fn test_config_missing_field() {
        let result = r#"
            [pendulum]
            x_base = 0.0
            l1 = 1.0
        "#
        .parse::<Config>();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = from_file("/nonexistent/pendula.toml");

        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }
}
