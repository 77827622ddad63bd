use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ApiResponse;

/// A project owned by a user, optionally linked to a git repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

/// Parameters for `/api/createProject`. Sent as URL query parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// Parameters for `/api/updateProject`. `pre_name` selects the project;
/// the remaining fields are applied when present.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectParams {
    pub pre_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// Parameters for `/api/askProject`.
#[derive(Debug, Clone, Serialize)]
pub struct AskProjectParams {
    pub name: String,
    pub question: String,
}

/// Normalized answer payload for `/api/askProject`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// One entry in a project's file tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileNodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNodeKind {
    File,
    Directory,
}

/// Reply from `/api/getFileContent`: another bespoke shape, with the
/// file body under `content` instead of `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub path: String,
}

/// Raw shape of `/api/listProjects`: a bare `projects` array instead of
/// the usual envelope, with records that may be missing fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListResponse {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// A possibly-incomplete project record as the list endpoint returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub owner_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

impl ProjectRecord {
    /// Fill missing fields with defaults: zero ids, empty name, and the
    /// current time for absent timestamps. Present fields pass through.
    pub fn to_project(&self) -> Project {
        let now = Utc::now().to_rfc3339();
        Project {
            id: self.id.unwrap_or(0),
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone(),
            repo_url: self.repo_url.clone(),
            owner_id: self.owner_id.unwrap_or(0),
            created_at: self.created_at.clone().unwrap_or_else(|| now.clone()),
            updated_at: self.updated_at.clone().unwrap_or(now),
            deleted_at: self.deleted_at.clone(),
        }
    }
}

/// Raw shape of `/api/askProject`: `{code, message, answer}` rather than
/// the envelope, with the answer sometimes only present in `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskProjectReply {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub answer: Option<String>,
}

impl AskProjectReply {
    /// Normalize into the standard envelope, falling back to `message`
    /// when the server omits `answer` or sends it empty.
    pub fn into_envelope(self) -> ApiResponse<Answer> {
        let answer = self
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.message.clone());
        ApiResponse {
            code: self.code,
            message: self.message,
            data: Some(Answer { answer }),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sparse_project_record() {
        let json = r#"{"projects":[{"name":"p1"}]}"#;
        let resp: ProjectListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.projects.len(), 1);

        let project = resp.projects[0].to_project();
        assert_eq!(project.id, 0);
        assert_eq!(project.name, "p1");
        assert_eq!(project.owner_id, 0);
        assert!(!project.created_at.is_empty());
        assert!(!project.updated_at.is_empty());
        // Filled timestamps must be valid RFC 3339
        assert!(chrono::DateTime::parse_from_rfc3339(&project.created_at).is_ok());
    }

    #[test]
    fn test_normalize_preserves_present_fields() {
        let json = r#"{"projects":[{"id":3,"name":"demo","owner_id":9,"created_at":"2025-02-01T00:00:00Z","updated_at":"2025-02-02T00:00:00Z","repo_url":"https://example.com/demo.git"}]}"#;
        let resp: ProjectListResponse = serde_json::from_str(json).unwrap();
        let project = resp.projects[0].to_project();
        assert_eq!(project.id, 3);
        assert_eq!(project.owner_id, 9);
        assert_eq!(project.created_at, "2025-02-01T00:00:00Z");
        assert_eq!(project.repo_url.as_deref(), Some("https://example.com/demo.git"));
    }

    #[test]
    fn test_empty_project_list() {
        let resp: ProjectListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.projects.is_empty());
    }

    #[test]
    fn test_ask_reply_with_answer() {
        let json = r#"{"code":0,"message":"ok","answer":"It uses Gin."}"#;
        let reply: AskProjectReply = serde_json::from_str(json).unwrap();
        let envelope = reply.into_envelope();
        assert!(envelope.is_ok());
        assert_eq!(envelope.data.unwrap().answer, "It uses Gin.");
    }

    #[test]
    fn test_ask_reply_falls_back_to_message() {
        let json = r#"{"code":0,"message":"no embeddings for project"}"#;
        let reply: AskProjectReply = serde_json::from_str(json).unwrap();
        let envelope = reply.into_envelope();
        assert_eq!(envelope.data.unwrap().answer, "no embeddings for project");
    }

    #[test]
    fn test_ask_reply_treats_empty_answer_as_absent() {
        let json = r#"{"code":0,"message":"no answer available","answer":""}"#;
        let reply: AskProjectReply = serde_json::from_str(json).unwrap();
        let envelope = reply.into_envelope();
        assert_eq!(envelope.data.unwrap().answer, "no answer available");
    }

    #[test]
    fn test_parse_file_content_reply() {
        let json = r#"{"code":0,"content":"package main\n","path":"main.go"}"#;
        let reply: FileContent = serde_json::from_str(json).unwrap();
        assert_eq!(reply.code, 0);
        assert_eq!(reply.content, "package main\n");
        assert_eq!(reply.path, "main.go");
    }

    #[test]
    fn test_parse_file_tree() {
        let json = r#"{"name":"src","path":"src","type":"directory","children":[{"name":"main.go","path":"src/main.go","type":"file"}]}"#;
        let node: FileNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, FileNodeKind::Directory);
        let children = node.children.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind, FileNodeKind::File);
        assert!(children[0].content.is_none());
    }
}
