//! Names of the environment variables the service address is read from.

/// Host (and optionally port) of the service, without a scheme.
pub const HOST_IP: &str = "HOST_IP";

/// Port segment for bucket-related (S3) endpoints, including the leading `:`.
pub const PORT: &str = "PORT";

/// Port segment for tenant-scoped endpoints, including the leading `:`.
pub const PORT_TENANT_ID: &str = "PORT_TENANT_ID";
