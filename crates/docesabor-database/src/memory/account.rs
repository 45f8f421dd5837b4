use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_entity::account::{Account, NewAccount, Role};

use super::MemoryDatabase;
use crate::store::AccountStore;

#[async_trait]
impl AccountStore for MemoryDatabase {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().rev().cloned().collect())
    }

    async fn find_by_roles(&self, roles: &[Role]) -> AppResult<Vec<Account>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .accounts
            .iter()
            .rev()
            .filter(|a| roles.contains(&a.role))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        let mut tables = self.tables.lock().await;
        if tables
            .accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::validation("E-mail already in use"));
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            city: data.city.clone(),
            created_at: Utc::now(),
        };
        tables.accounts.push(account.clone());
        Ok(account)
    }
}
