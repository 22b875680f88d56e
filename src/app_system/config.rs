use clap::Parser;

/// Runtime settings, from command-line flags or `STOREFRONT_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "course_storefront", version, about = "Course storefront REST API")]
pub struct StorefrontConfig {
    /// Interface to bind
    #[arg(long, env = "STOREFRONT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "STOREFRONT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Number that receives enrollment notices, international format without `+`
    #[arg(long, env = "STOREFRONT_WHATSAPP_NUMBER", default_value = "918302718516")]
    pub whatsapp_number: String,

    /// Pending requests each store actor buffers before callers wait
    #[arg(long, env = "STOREFRONT_CHANNEL_CAPACITY", default_value_t = 32, value_parser = parse_capacity)]
    pub channel_capacity: usize,

    /// Start with an empty catalog
    #[arg(long, env = "STOREFRONT_NO_SEED")]
    pub no_seed: bool,

    /// Allowed CORS origin; repeat for several. None means any origin.
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,
}

impl StorefrontConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = StorefrontConfig::try_parse_from([
            "course_storefront",
            "--port",
            "8080",
            "--no-seed",
            "--cors-origin",
            "http://localhost:5173",
            "--cors-origin",
            "https://shop.example.in",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.no_seed);
        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.socket_addr().ends_with(":8080"));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = StorefrontConfig::try_parse_from(["course_storefront", "--channel-capacity", "0"]);
        assert!(result.is_err());
    }
}
