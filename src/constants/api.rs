//! Fixed REST path fragments of the storage service's API.

/// Scheme prepended to `HOST_IP` to form the base URL.
pub const SCHEME_PREFIX: &str = "http://";

/// Keystone token issuance.
pub const TOKEN_LOGIN_PATH: &str = "/identity/v3/auth/tokens";

/// Keystone credential listing. The user ID is appended directly after this.
pub const CREDENTIALS_PATH: &str = "/identity/v3/credentials?userId=";

/// Restricts credential listing to EC2-style access keys.
pub const CREDENTIALS_TYPE_QUERY: &str = "&type=ec2";

/// Storage backend types, relative to a tenant.
pub const TYPES_SEGMENT: &str = "/types";

/// Storage backends, relative to a tenant.
pub const BACKENDS_SEGMENT: &str = "/backends";

/// S3-style subresource selecting a bucket's lifecycle configuration.
pub const LIFECYCLE_QUERY: &str = "/?lifecycle";

/// The diagnostic line logged whenever the shared configuration is requested.
pub const SEPARATOR: &str =
    "**********************************************************************";
