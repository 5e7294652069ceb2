use clap::Parser;

/// In-memory user API server.
#[derive(Parser, Debug, Clone)]
#[command(name = "user_api", version)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Default log filter. `RUST_LOG` takes precedence when set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Mailbox size of the user actor.
    #[arg(long, env = "CHANNEL_CAPACITY", default_value_t = 32, value_parser = parse_capacity)]
    pub channel_capacity: usize,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            channel_capacity: 32,
        }
    }
}
