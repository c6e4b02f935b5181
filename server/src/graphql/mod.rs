use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};
use chrono::Local;
use entity::{EmployeeId, SessionUser};
use platform_api::ApiError;
use platform_authn::{AuthnError, IdentityStore, validate_login, validate_signup};
use products_hr::{DEPARTMENTS, DirectoryService, EmployeeForm};
use tracing::instrument;

mod employees;
mod me;

pub use employees::{DashboardNode, EmployeeInput, EmployeeNode};
pub use me::{AuthPayload, SessionNode};

pub type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(Clone)]
pub struct GraphqlData {
    pub directory: Arc<DirectoryService>,
    pub identity: Arc<IdentityStore>,
}

pub fn build_schema(data: GraphqlData) -> SchemaType {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data.directory)
        .data(data.identity)
        .finish()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.version", skip_all)]
    async fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    #[instrument(name = "graphql.me", skip_all)]
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<SessionNode>> {
        Ok(identity(ctx)?.current().await.map(SessionNode::from))
    }

    /// Choices offered by the add/edit form.
    async fn departments(&self) -> Vec<String> {
        DEPARTMENTS.iter().map(|d| (*d).to_string()).collect()
    }

    #[instrument(name = "graphql.employees", skip(self, ctx))]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
    ) -> async_graphql::Result<Vec<EmployeeNode>> {
        require_session(ctx).await?;
        let directory = directory(ctx)?;
        let rows = match q.as_deref() {
            Some(term) => directory.search(term).await,
            None => directory.list().await,
        };
        Ok(rows.into_iter().map(EmployeeNode::from).collect())
    }

    #[instrument(name = "graphql.employee", skip(self, ctx))]
    async fn employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<EmployeeNode>> {
        require_session(ctx).await?;
        let id = parse_id(&id)?;
        Ok(directory(ctx)?.get(id).await.map(EmployeeNode::from))
    }

    #[instrument(name = "graphql.dashboard", skip_all)]
    async fn dashboard(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardNode> {
        require_session(ctx).await?;
        let today = Local::now().date_naive();
        Ok(directory(ctx)?.dashboard(today).await.into())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[instrument(name = "graphql.login", skip(self, ctx, password))]
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<AuthPayload> {
        if let Err(err) = validate_login(&username, &password) {
            return Ok(AuthPayload::rejected(err.to_string()));
        }
        auth_outcome(identity(ctx)?.login(&username, &password).await)
    }

    #[instrument(name = "graphql.register", skip(self, ctx, password, confirm_password))]
    async fn register(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
        confirm_password: String,
    ) -> async_graphql::Result<AuthPayload> {
        if let Err(err) = validate_signup(&username, &password, &confirm_password) {
            return Ok(AuthPayload::rejected(err.to_string()));
        }
        auth_outcome(identity(ctx)?.register(&username, &password).await)
    }

    #[instrument(name = "graphql.logout", skip_all)]
    async fn logout(&self, ctx: &Context<'_>) -> async_graphql::Result<bool> {
        identity(ctx)?
            .logout()
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        Ok(true)
    }

    #[instrument(name = "graphql.create_employee", skip_all)]
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeeNode> {
        require_session(ctx).await?;
        let draft = EmployeeForm::from(input).validate().map_err(|e| e.extend())?;
        Ok(directory(ctx)?.create(draft).await.into())
    }

    #[instrument(name = "graphql.update_employee", skip(self, ctx, input))]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeeNode> {
        require_session(ctx).await?;
        let id = parse_id(&id)?;
        let draft = EmployeeForm::from(input).validate().map_err(|e| e.extend())?;
        let stored = directory(ctx)?
            .update(draft.with_id(id))
            .await
            .map_err(|e| e.extend())?;
        Ok(stored.into())
    }

    #[instrument(name = "graphql.delete_employee", skip(self, ctx))]
    async fn delete_employee(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        require_session(ctx).await?;
        let id = parse_id(&id)?;
        directory(ctx)?.delete(id).await.map_err(|e| e.extend())?;
        Ok(true)
    }
}

fn directory<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<DirectoryService>> {
    ctx.data::<Arc<DirectoryService>>()
}

fn identity<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<IdentityStore>> {
    ctx.data::<Arc<IdentityStore>>()
}

async fn require_session(ctx: &Context<'_>) -> async_graphql::Result<SessionUser> {
    identity(ctx)?
        .current()
        .await
        .ok_or_else(|| ApiError::Unauthorized.extend())
}

fn parse_id(id: &ID) -> async_graphql::Result<EmployeeId> {
    id.parse::<EmployeeId>()
        .map_err(|_| ApiError::invalid("Invalid ID").extend())
}

/// Credential failures become an `ok: false` payload; storage failures stay
/// errors.
fn auth_outcome(
    result: Result<SessionUser, AuthnError>,
) -> async_graphql::Result<AuthPayload> {
    match result {
        Ok(user) => Ok(AuthPayload::signed_in(user)),
        Err(AuthnError::InvalidCredentials) => {
            Ok(AuthPayload::rejected("Invalid username or password"))
        }
        Err(AuthnError::UsernameTaken(_)) => Ok(AuthPayload::rejected("Username already exists")),
        Err(err) => Err(ApiError::from(err).extend()),
    }
}
