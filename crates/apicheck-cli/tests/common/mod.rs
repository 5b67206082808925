use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMPLETE_DOCUMENT: &str = r#"openapi: 3.0.3
info:
  title: Blog API
  description: REST API for user registration, authentication and blog post management.
  version: 1.0.0
servers:
  - url: https://api.example.com/v1
tags:
  - name: users
  - name: posts
paths:
  /users/register:
    post: {}
  /users/login:
    post: {}
  /users/me:
    get: {}
  /posts:
    get: {}
  /posts/{id}:
    get: {}
  /health:
    get: {}
components:
  schemas:
    User: {}
    CreateUserDto: {}
    LoginDto: {}
    AuthResponse: {}
    Post: {}
    CreatePostDto: {}
    ApiResponse: {}
    ApiError: {}
  securitySchemes:
    bearerAuth:
      type: http
      scheme: bearer
"#;

/// Isolated working directory with no user configuration in reach
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        fs::create_dir_all(tmp.path().join("home")).expect("create isolated home");
        Self { tmp }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Write `content` to `relative` under the working directory
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write the conventional document location
    pub fn write_default_document(&self, content: &str) -> PathBuf {
        self.write("docs/openapi.yaml", content)
    }

    pub fn cmd(&self) -> Command {
        let home = self.root().join("home");
        let mut cmd = Command::cargo_bin("apicheck").expect("binary built");
        cmd.current_dir(self.root())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("APICHECK_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Stdout of a finished command as text
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}
