use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            Stage::Local => "local",
            Stage::Development => "development",
            Stage::Production => "production",
        };
        write!(f, "{}", stage)
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;

    fn try_from(stage: &str) -> Result<Self, Self::Error> {
        match stage.to_ascii_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "development" => Ok(Stage::Development),
            "production" => Ok(Stage::Production),
            other => Err(anyhow::anyhow!("Unknown stage: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages() {
        assert_eq!(Stage::try_from("production").unwrap(), Stage::Production);
        assert_eq!(Stage::try_from("Development").unwrap(), Stage::Development);
        assert!(Stage::try_from("staging").is_err());
    }
}
