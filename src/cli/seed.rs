//! Seed commands - sample teams and the first operator account

use anyhow::{anyhow, Context};
use clap::Args;
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::config::AppConfig;
use crate::domain::repositories::user_repository::{User, UserRepository};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::user::value_objects::{validate_password, Username};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{SqliteTeamRepository, SqliteUserRepository};

const SAMPLE_TEAMS: &[(&str, &[&str])] = &[
    ("Team A", &["John Doe", "Jane Smith", "Alice White"]),
    ("Team B", &["Bob Brown", "Charlie Green", "Dana Black"]),
    ("Team C", &["Eva Gray", "Frank Lin", "Grace Kim"]),
    ("Team D", &["Hank Zhao", "Ivy Chen"]),
    ("Team E", &["Jack Wu"]),
];

#[derive(Args)]
pub struct SeedUserArgs {
    #[arg(long, default_value = "admin")]
    pub username: String,

    #[arg(long, default_value = "admin123")]
    pub password: String,
}

async fn open(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let pool = database::create_pool(&config.database.url, 1)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    database::run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_teams(config: AppConfig) -> anyhow::Result<()> {
    let pool = open(&config).await?;
    let created = seed_teams(&SqliteTeamRepository::new(pool)).await?;
    info!(teams = created, "database seeded");
    Ok(())
}

pub async fn run_user(config: AppConfig, args: SeedUserArgs) -> anyhow::Result<()> {
    let pool = open(&config).await?;
    let repo = SqliteUserRepository::new(pool);

    if seed_user(&repo, &args.username, &args.password).await? {
        info!(username = %args.username, "operator account created");
    } else {
        info!(username = %args.username, "operator account already exists");
    }
    Ok(())
}

/// Replaces every team with the sample roster; returns the number created
pub async fn seed_teams<R: TeamRepository>(repo: &R) -> anyhow::Result<usize> {
    let removed = repo.delete_all().await?;
    info!(teams = removed, "cleared existing teams");

    for (name, members) in SAMPLE_TEAMS {
        let (team, events) = Team::new(
            name.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        )?;
        repo.create(&team).await?;
        events.iter().for_each(|event| event.record());
    }

    Ok(SAMPLE_TEAMS.len())
}

/// Creates the account unless the username is taken; returns whether it was created
pub async fn seed_user<R: UserRepository>(
    repo: &R,
    username: &str,
    password: &str,
) -> anyhow::Result<bool> {
    let username = Username::new(username)?;
    validate_password(password)?;

    if repo.find_by_username(&username).await?.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(password).map_err(|e| anyhow!(e))?;
    repo.create(&User::new(username, password_hash)).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::domain::team::TeamStatus;

    async fn test_pool() -> SqlitePool {
        let pool = database::create_in_memory_pool().await.unwrap();
        database::run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seed_teams_replaces_existing_roster() {
        let repo = SqliteTeamRepository::new(test_pool().await);
        let (old, _) = Team::new("Old Team".to_string(), vec!["Someone".to_string()]).unwrap();
        repo.create(&old).await.unwrap();

        let created = seed_teams(&repo).await.unwrap();
        assert_eq!(created, 5);

        let teams = repo.find_all().await.unwrap();
        let names: Vec<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Team A", "Team B", "Team C", "Team D", "Team E"]);
        assert!(teams.iter().all(|t| t.status() == TeamStatus::Unpresented));

        // Running again leaves the same roster
        assert_eq!(seed_teams(&repo).await.unwrap(), 5);
        assert_eq!(repo.find_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn seed_user_creates_account_once() {
        let repo = SqliteUserRepository::new(test_pool().await);

        assert!(seed_user(&repo, "admin", "admin123").await.unwrap());
        assert!(!seed_user(&repo, "admin", "other-password").await.unwrap());

        let username = Username::new("admin").unwrap();
        let user = repo.find_by_username(&username).await.unwrap().unwrap();
        assert!(verify_password("admin123", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn seed_user_rejects_invalid_credentials() {
        let repo = SqliteUserRepository::new(test_pool().await);

        assert!(seed_user(&repo, "ab", "admin123").await.is_err());
        assert!(seed_user(&repo, "admin", "123").await.is_err());
    }
}
