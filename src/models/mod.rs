//! Data models for the CodeCampass API.
//!
//! This module contains the wire types exchanged with the server:
//!
//! - `ApiResponse`: the `{code, message, data?, token?}` envelope most
//!   endpoints return
//! - `User` and the login/registration parameter types
//! - `Project`, its CRUD parameter types, and the `FileNode` tree
//! - `OpenAiKeyInfo`: the stored-credential status record

pub mod apikey;
pub mod envelope;
pub mod project;
pub mod user;

pub use apikey::OpenAiKeyInfo;
pub use envelope::ApiResponse;
pub use project::{
    Answer, AskProjectParams, AskProjectReply, CreateProjectParams, FileContent, FileNode,
    FileNodeKind, Project, ProjectListResponse, ProjectRecord, UpdateProjectParams,
};
pub use user::{LoginParams, RegisterParams, User};
