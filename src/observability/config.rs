#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

impl ServiceContext {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(component: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let component = component.trim().to_string();

        let service_name = lookup("SERVICE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = lookup("STAGE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_name,
            environment,
            component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_component_name() {
        let context = ServiceContext::from_lookup(" payex-callback ", |_| None);

        assert_eq!(context.service_name, "payex-callback");
        assert_eq!(context.environment, "unknown");
        assert_eq!(context.component, "payex-callback");
    }

    #[test]
    fn reads_service_name_and_stage() {
        let context = ServiceContext::from_lookup("payex-callback", |key| match key {
            "SERVICE_NAME" => Some("payments".to_string()),
            "STAGE" => Some("production".to_string()),
            _ => None,
        });

        assert_eq!(context.service_name, "payments");
        assert_eq!(context.environment, "production");
    }
}
