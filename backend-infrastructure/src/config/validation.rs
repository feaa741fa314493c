use anyhow::{anyhow, Result};

pub fn validate_database_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("database_url is empty"));
    }
    if !(trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://")) {
        return Err(anyhow!("database_url must use the postgres:// or postgresql:// scheme"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_postgres_schemes() {
        assert!(validate_database_url("postgres://u:p@localhost/lifelog").is_ok());
        assert!(validate_database_url("postgresql://localhost:5433/lifelog").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_blanks() {
        assert!(validate_database_url("mysql://localhost/lifelog").is_err());
        assert!(validate_database_url("  ").is_err());
    }
}
