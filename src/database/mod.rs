use tokio_postgres::NoTls;

use crate::config::ConnectionParams;

/// Which branch an ensure run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyExists,
}

/// Allow-list check for a name about to be interpolated into a
/// `CREATE DATABASE` statement. Identifiers cannot be bound as statement
/// parameters, so anything outside `[A-Za-z_][A-Za-z0-9_]*` is refused.
pub fn valid_database_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn create_statement(name: &str) -> String {
    format!("CREATE DATABASE \"{}\"", name)
}

fn created_message(name: &str) -> String {
    format!("Database '{}' created successfully.", name)
}

fn already_exists_message(name: &str) -> String {
    format!("Database '{}' already exists.", name)
}

/// Create the target database if the server does not already have it.
///
/// Connects to the maintenance database, checks the catalog for the target
/// name, and issues `CREATE DATABASE` only when the name is absent. The
/// client runs each statement in its own implicit transaction; `CREATE
/// DATABASE` cannot run inside an explicit transaction block.
pub async fn ensure_database(
    params: &ConnectionParams,
) -> Result<EnsureOutcome, Box<dyn std::error::Error>> {
    let (client, connection) =
        tokio_postgres::connect(&params.admin_conn_string(), NoTls).await?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {}", e);
        }
    });

    let row = client
        .query_opt(
            "SELECT 1 FROM pg_catalog.pg_database WHERE datname = $1",
            &[&params.dbname],
        )
        .await?;

    if row.is_some() {
        println!("{}", already_exists_message(&params.dbname));
        return Ok(EnsureOutcome::AlreadyExists);
    }

    if !valid_database_name(&params.dbname) {
        return Err(format!(
            "refusing to create database: invalid database name '{}'",
            params.dbname
        )
        .into());
    }

    client.execute(create_statement(&params.dbname).as_str(), &[]).await?;

    println!("{}", created_message(&params.dbname));
    Ok(EnsureOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(valid_database_name("nepal_election"));
        assert!(valid_database_name("testdb"));
        assert!(valid_database_name("a1_b2"));
        assert!(valid_database_name("_scratch"));
    }

    #[test]
    fn rejects_names_unsafe_to_interpolate() {
        assert!(!valid_database_name(""));
        assert!(!valid_database_name("1election"));
        assert!(!valid_database_name("nepal-election"));
        assert!(!valid_database_name("db name"));
        assert!(!valid_database_name("db\"; DROP DATABASE postgres; --"));
        assert!(!valid_database_name("db'name"));
    }

    #[test]
    fn create_statement_quotes_the_identifier() {
        assert_eq!(
            create_statement("nepal_election"),
            "CREATE DATABASE \"nepal_election\""
        );
    }

    #[test]
    fn status_lines_match_the_bootstrap_contract() {
        assert_eq!(
            created_message("testdb"),
            "Database 'testdb' created successfully."
        );
        assert_eq!(
            already_exists_message("testdb"),
            "Database 'testdb' already exists."
        );
    }
}
