//! API client for communicating with the CodeCampass REST API.
//!
//! One `ApiClient` is configured at startup and reused for the process
//! lifetime. Every request picks up the bearer token from durable
//! storage; every response is unwrapped to the body envelope. A 401 on
//! any endpoint clears the session and redirects to the login screen
//! before the error reaches the caller.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::Config;
use crate::models::{
    Answer, ApiResponse, AskProjectParams, AskProjectReply, CreateProjectParams, FileContent,
    FileNode, LoginParams, OpenAiKeyInfo, Project, ProjectListResponse, RegisterParams,
    UpdateProjectParams, User,
};

use super::ApiError;

/// Route the UI is forced to after an authorization failure
pub const LOGIN_PATH: &str = "/login";

/// Hook the API client uses to force the active view somewhere else.
/// The 401 handler calls `redirect(LOGIN_PATH)` after clearing the
/// session; whatever composes the UI decides what that means.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigator that goes nowhere. The 401 teardown still clears the
/// session; there is simply no view to move.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, _path: &str) {}
}

/// API client for the CodeCampass server.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    import_timeout: std::time::Duration,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a new API client. The default timeout applies to every
    /// request except the repository import, which carries its own.
    pub fn new(
        config: &Config,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            import_timeout: config.import_timeout,
            session,
            navigator,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token from durable storage, if one is present.
    /// A missing token never fails the request; it proceeds
    /// unauthenticated.
    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.stored_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Tear down the session after an authorization failure: durable
    /// entries and in-memory state are cleared, then the UI is sent to
    /// the login screen. Callers still receive the error afterwards.
    fn handle_unauthorized(&self) {
        warn!("Received 401, clearing session and redirecting to login");
        self.session.logout();
        self.navigator.redirect(LOGIN_PATH);
    }

    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized.into());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body).into())
    }

    /// Send a request and unwrap the body. Transport status and headers
    /// are not part of the returned value.
    async fn execute<T: DeserializeOwned>(&self, path: &str, req: RequestBuilder) -> Result<T> {
        let response = self
            .apply_auth(req)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", path))?;

        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", path))
    }

    // ===== User endpoints =====

    /// Authenticate. On success the envelope carries the token in its
    /// top-level `token` field and the user profile in `data`; the
    /// caller feeds both into `SessionStore::login`.
    pub async fn login(&self, params: &LoginParams) -> Result<ApiResponse<User>> {
        let path = "/user/userLogin";
        let req = self.client.post(self.url(path)).query(params);
        self.execute(path, req).await
    }

    /// Register a new account.
    pub async fn register(&self, params: &RegisterParams) -> Result<ApiResponse<User>> {
        let path = "/user/createUser";
        let req = self.client.post(self.url(path)).query(params);
        self.execute(path, req).await
    }

    /// Invalidate the server-side session. The local session is the
    /// caller's to clear via `SessionStore::logout`.
    pub async fn logout(&self) -> Result<ApiResponse> {
        let path = "/user/userLogout";
        let req = self.client.post(self.url(path));
        self.execute(path, req).await
    }

    /// Fetch the current user's profile.
    pub async fn get_user_info(&self) -> Result<ApiResponse<User>> {
        let path = "/user/getUserInfo";
        let req = self.client.get(self.url(path));
        self.execute(path, req).await
    }

    /// Fetch all users.
    pub async fn get_user_list(&self) -> Result<ApiResponse<Vec<User>>> {
        let path = "/user/getUserList";
        let req = self.client.get(self.url(path));
        self.execute(path, req).await
    }

    // ===== Project endpoints =====

    pub async fn create_project(&self, params: &CreateProjectParams) -> Result<ApiResponse<Project>> {
        let path = "/api/createProject";
        let req = self.client.post(self.url(path)).query(params);
        self.execute(path, req).await
    }

    /// Fetch all projects. This endpoint returns a bare `projects` array
    /// instead of the envelope, with records that may be missing fields;
    /// the result is normalized before it reaches the caller.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let path = "/api/listProjects";
        let req = self.client.get(self.url(path));
        let reply: ProjectListResponse = self.execute(path, req).await?;
        Ok(reply.projects.iter().map(|p| p.to_project()).collect())
    }

    pub async fn get_project_info(&self, name: &str) -> Result<ApiResponse<Project>> {
        let path = "/api/getProjectInfo";
        let req = self.client.get(self.url(path)).query(&[("name", name)]);
        self.execute(path, req).await
    }

    pub async fn update_project(&self, params: &UpdateProjectParams) -> Result<ApiResponse<Project>> {
        let path = "/api/updateProject";
        let req = self.client.put(self.url(path)).query(params);
        self.execute(path, req).await
    }

    pub async fn delete_project(&self, name: &str) -> Result<ApiResponse> {
        let path = "/api/deleteProject";
        let req = self.client.delete(self.url(path)).query(&[("name", name)]);
        self.execute(path, req).await
    }

    /// Clone and index the project's repository server-side. This can
    /// take many minutes, so the request overrides the default timeout.
    pub async fn import_project_repo(&self, name: &str) -> Result<ApiResponse> {
        let path = "/api/importProjectRepo";
        debug!(project = name, "Starting repository import");
        let req = self
            .client
            .post(self.url(path))
            .query(&[("name", name)])
            .timeout(self.import_timeout);
        self.execute(path, req).await
    }

    /// Ask the AI service a question about a project. The reply comes in
    /// a bespoke `{code, message, answer}` shape and is normalized into
    /// the standard envelope.
    pub async fn ask_project(&self, params: &AskProjectParams) -> Result<ApiResponse<Answer>> {
        let path = "/api/askProject";
        let req = self.client.post(self.url(path)).query(params);
        let reply: AskProjectReply = self.execute(path, req).await?;
        Ok(reply.into_envelope())
    }

    /// Fetch the project's file tree. An unsynced repository yields an
    /// empty tree, not an error.
    pub async fn get_project_files(&self, name: &str) -> Result<ApiResponse<Vec<FileNode>>> {
        let path = "/api/getProjectFiles";
        let req = self.client.get(self.url(path)).query(&[("name", name)]);
        self.execute(path, req).await
    }

    /// Fetch one file's contents. The reply carries the body under
    /// `content` rather than the usual `data` field.
    pub async fn get_file_content(&self, name: &str, file_path: &str) -> Result<FileContent> {
        let path = "/api/getFileContent";
        let req = self
            .client
            .get(self.url(path))
            .query(&[("name", name), ("path", file_path)]);
        self.execute(path, req).await
    }

    // ===== OpenAI key endpoints =====

    pub async fn get_openai_key(&self) -> Result<ApiResponse<OpenAiKeyInfo>> {
        let path = "/api/getOpenAIKey";
        let req = self.client.get(self.url(path));
        self.execute(path, req).await
    }

    pub async fn set_openai_key(&self, key: &str) -> Result<ApiResponse> {
        let path = "/api/setOpenAIKey";
        let req = self.client.post(self.url(path)).query(&[("key", key)]);
        self.execute(path, req).await
    }

    pub async fn delete_openai_key(&self) -> Result<ApiResponse> {
        let path = "/api/deleteOpenAIKey";
        let req = self.client.delete(self.url(path));
        self.execute(path, req).await
    }
}
