use serde::{Deserialize, Serialize};
use std::env;

/// Connection parameters for the Postgres server hosting the election database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl ConnectionParams {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let dbname = env::var("DB_NAME").unwrap_or_else(|_| "nepal_election".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "db_user".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "db_pwd@123".to_string());
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5433".to_string())
            .parse::<u16>()?;

        Ok(Self {
            dbname,
            user,
            password,
            host,
            port,
        })
    }

    /// Connection string for the server's `postgres` maintenance database.
    /// Database-management statements are issued from there, never from the
    /// target database itself.
    pub fn admin_conn_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname=postgres",
            self.host, self.port, self.user, self.password
        )
    }
}
