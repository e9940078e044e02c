//! Workspace-wide constants shared by the kernel, the features and the server.

/// OpenAPI tag for the system endpoints (`/health`, `/info`).
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for the person resource.
pub const PERSON_TAG: &str = "Person";
/// OpenAPI tag for the session resource.
pub const SESSION_TAG: &str = "Session";

/// Required caller-identification headers documented on every versioned operation.
pub const HEADER_APPLICATION_ID: &str = "X-Application-Id";
pub const HEADER_USER_ID: &str = "X-User-Id";
/// Value the docs UI pre-fills for the identification headers.
pub const DOCS_HEADER_DEFAULT: &str = "scalar-ui";

/// Name of the bearer security scheme declared in the documentation.
pub const BEARER_SCHEME: &str = "access-token";
/// Resource whose operations are documented as bearer-secured.
pub const SECURED_RESOURCE: &str = "session";

/// Mount point of the machine-readable documentation (group list and group JSON).
pub const API_DOCS_PATH: &str = "/api-docs";
/// Mount point of the interactive documentation UI.
pub const SCALAR_PATH: &str = "/docs";
