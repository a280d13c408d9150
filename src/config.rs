use serde::Deserialize;

/// Deployment environment. Controls the `Secure` attribute on the session
/// cookie: browsers only send secure cookies over HTTPS, which is assumed
/// in production and not in local development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    fn from_env_str(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub client_origin: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::from_env_str(&v))
            .unwrap_or(Environment::Development);
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let client_origin =
            std::env::var("CLIENT_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "agora".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "agora-users".into()),
        };
        Ok(Self {
            database_url,
            environment,
            host,
            port,
            client_origin,
            jwt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_flag_comes_from_env_string() {
        assert!(Environment::from_env_str("production").is_production());
        assert!(Environment::from_env_str("Production").is_production());
        assert!(!Environment::from_env_str("development").is_production());
        assert!(!Environment::from_env_str("staging").is_production());
        assert!(!Environment::from_env_str("").is_production());
    }
}
