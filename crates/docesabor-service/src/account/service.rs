//! Account registration and lookup.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use docesabor_auth::{AccessGuard, Capability, Decision, JwtEncoder, PasswordHasher, PasswordPolicy};
use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_database::AccountStore;
use docesabor_entity::account::{Account, NewAccount, RegisterAccount, Role};
use docesabor_entity::audit::CreateAuditLogEntry;

use crate::audit::AuditTrail;
use crate::context::RequestContext;

/// Handles account sign-up, staff creation, listings and login.
#[derive(Clone)]
pub struct AccountService {
    /// Credential store.
    pub(super) accounts: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password acceptance policy.
    policy: Arc<PasswordPolicy>,
    /// Token issuer.
    pub(super) encoder: Arc<JwtEncoder>,
    /// Access guard.
    guard: Arc<AccessGuard>,
    /// Audit trail.
    pub(super) audit: AuditTrail,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        encoder: Arc<JwtEncoder>,
        guard: Arc<AccessGuard>,
        audit: AuditTrail,
    ) -> Self {
        Self {
            accounts,
            hasher,
            policy,
            encoder,
            guard,
            audit,
        }
    }

    /// Public sign-up. The role is always [`Role::Client`].
    pub async fn register_client(&self, req: RegisterAccount) -> AppResult<Account> {
        let account = self.insert(req, Role::Client).await?;
        info!(account_id = %account.id, "Client registered");
        Ok(account)
    }

    /// Create an employee or admin account on behalf of a staff caller.
    ///
    /// `tipo` defaults to EMPLOYEE. Any staff caller may create either role.
    pub async fn create_staff(
        &self,
        ctx: &RequestContext,
        req: RegisterAccount,
    ) -> AppResult<Account> {
        self.guard.require(ctx.role, Capability::CreateStaffAccount)?;

        let role = req.role.unwrap_or(Role::Employee);
        if !role.is_staff() {
            return Err(AppError::validation(
                "Staff accounts must be EMPLOYEE or ADMIN",
            ));
        }

        let account = self.insert(req, role).await?;
        info!(
            account_id = %account.id,
            role = %account.role,
            created_by = %ctx.account_id,
            "Staff account created"
        );
        self.audit.record(
            CreateAuditLogEntry::new(ctx.account_id, "Staff account created")
                .with_supplement(format!("{} ({}) as {}", account.name, account.email, account.role)),
        );
        Ok(account)
    }

    async fn insert(&self, mut req: RegisterAccount, role: Role) -> AppResult<Account> {
        req.email = req.normalized_email();
        req.name = req.name.trim().to_string();
        req.city = req.city.map(|c| c.trim().to_string());
        req.validate()?;
        self.policy.check(&req.password)?;

        let password_hash = self.hash_blocking(req.password).await?;
        self.accounts
            .create(&NewAccount {
                name: req.name,
                email: req.email,
                password_hash,
                role,
                city: req.city,
            })
            .await
    }

    /// Argon2 hashing on the blocking pool.
    async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task panicked", e))?
    }

    /// Password verification on the blocking pool. Without a stored hash the
    /// same work is spent on the dummy hash and the result is `false`.
    pub(super) async fn verify_blocking(
        &self,
        password: String,
        hash: Option<String>,
    ) -> AppResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || match hash {
            Some(hash) => hasher.verify_password(&password, &hash),
            None => {
                hasher.verify_dummy(&password);
                false
            }
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password verification task panicked", e))
    }

    /// Every account, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Account>> {
        self.guard.require(ctx.role, Capability::ListAccounts)?;
        self.accounts.find_all().await
    }

    /// Client accounts, newest first.
    pub async fn list_clients(&self, ctx: &RequestContext) -> AppResult<Vec<Account>> {
        self.guard.require(ctx.role, Capability::ListAccounts)?;
        self.accounts.find_by_roles(&[Role::Client]).await
    }

    /// Employee and admin accounts, newest first.
    pub async fn list_staff(&self, ctx: &RequestContext) -> AppResult<Vec<Account>> {
        self.guard.require(ctx.role, Capability::ListAccounts)?;
        self.accounts
            .find_by_roles(&[Role::Employee, Role::Admin])
            .await
    }

    /// One account. Callers may read their own account; staff may read any.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Account> {
        if !ctx.is_account(id)
            && self.guard.decide(ctx.role, Capability::ListAccounts) == Decision::Deny
        {
            return Err(AppError::ownership("You can only view your own account"));
        }
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")))
    }
}
