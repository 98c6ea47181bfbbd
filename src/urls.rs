//! Endpoint URLs for the storage service's REST API.
//!
//! Every formatter is plain concatenation over the configuration. Arguments
//! are inserted verbatim, with no encoding or validation, so callers must
//! pass values that are already URL-safe.
use crate::{config::Configuration, constants::api};

impl Configuration {
    /// Keystone token issuance.
    pub fn token_login_url(&self) -> String {
        format!("{}{}", self.base_url(), api::TOKEN_LOGIN_PATH)
    }

    /// EC2 access keys belonging to `user_id`.
    pub fn aks_list_url(&self, user_id: &str) -> String {
        format!(
            "{}{}{user_id}{}",
            self.base_url(),
            api::CREDENTIALS_PATH,
            api::CREDENTIALS_TYPE_QUERY
        )
    }

    /// Backend types available to `tenant_id`.
    pub fn types_url(&self, tenant_id: &str) -> String {
        format!("{}{}", self.tenant_url(tenant_id), api::TYPES_SEGMENT)
    }

    /// Backend collection of `tenant_id`, used to create backends.
    pub fn add_backend_url(&self, tenant_id: &str) -> String {
        format!("{}{}", self.tenant_url(tenant_id), api::BACKENDS_SEGMENT)
    }

    /// A single backend of `tenant_id`, for get, update and delete.
    pub fn backend_url(&self, tenant_id: &str, backend_id: &str) -> String {
        format!("{}/{backend_id}", self.add_backend_url(tenant_id))
    }

    /// The bucket `bucket_name`, used to create it.
    pub fn create_bucket_url(&self, bucket_name: &str) -> String {
        format!("{}{}/{bucket_name}", self.base_url(), self.port())
    }

    /// The bucket listing.
    pub fn list_bucket_url(&self) -> String {
        format!("{}{}/", self.base_url(), self.port())
    }

    /// An object inside a bucket.
    pub fn object_url(&self, bucket_name: &str, object_key: &str) -> String {
        format!("{}/{object_key}", self.create_bucket_url(bucket_name))
    }

    /// Lifecycle configuration of a bucket.
    pub fn bucket_lifecycle_url(&self, bucket_name: &str) -> String {
        format!("{}{}", self.create_bucket_url(bucket_name), api::LIFECYCLE_QUERY)
    }

    fn tenant_url(&self, tenant_id: &str) -> String {
        format!("{}{}/{tenant_id}", self.base_url(), self.tenant_port())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn config() -> Configuration {
        Configuration::new("example.com", ":8090", ":8089")
    }

    #[rstest]
    fn identity_endpoints_ignore_ports(config: Configuration) {
        assert_eq!(
            config.token_login_url(),
            "http://example.com/identity/v3/auth/tokens"
        );
        assert_eq!(
            config.aks_list_url("u1"),
            "http://example.com/identity/v3/credentials?userId=u1&type=ec2"
        );
    }

    #[rstest]
    fn tenant_endpoints_use_tenant_port(config: Configuration) {
        assert_eq!(config.types_url("t1"), "http://example.com:8089/t1/types");
        assert_eq!(
            config.add_backend_url("t1"),
            "http://example.com:8089/t1/backends"
        );
        assert_eq!(
            config.backend_url("t1", "b9"),
            "http://example.com:8089/t1/backends/b9"
        );
    }

    #[rstest]
    fn bucket_endpoints_use_port(config: Configuration) {
        assert_eq!(config.create_bucket_url("bkt"), "http://example.com:8090/bkt");
        assert_eq!(config.list_bucket_url(), "http://example.com:8090/");
        assert_eq!(
            config.object_url("bkt", "dir/file.txt"),
            "http://example.com:8090/bkt/dir/file.txt"
        );
        assert_eq!(
            config.bucket_lifecycle_url("bkt"),
            "http://example.com:8090/bkt/?lifecycle"
        );
    }

    #[test]
    fn missing_port_collapses_to_nothing() {
        let config = Configuration::new("example.com", "", ":8089");
        assert_eq!(config.list_bucket_url(), "http://example.com/");
        assert_eq!(config.create_bucket_url("bkt"), "http://example.com/bkt");
    }

    #[test]
    fn missing_host_yields_malformed_urls() {
        let config = Configuration::new("", "", "");
        assert_eq!(config.token_login_url(), "http:///identity/v3/auth/tokens");
        assert_eq!(config.types_url("t1"), "http:///t1/types");
    }

    #[rstest]
    #[case::spaces("a b")]
    #[case::query("u1&type=other")]
    #[case::empty("")]
    fn user_id_is_inserted_verbatim(config: Configuration, #[case] user_id: &str) {
        assert_eq!(
            config.aks_list_url(user_id),
            format!("http://example.com/identity/v3/credentials?userId={user_id}&type=ec2")
        );
    }

    #[rstest]
    fn formatters_are_repeatable(config: Configuration) {
        assert_eq!(config.types_url("t1"), config.types_url("t1"));
        assert_eq!(config.create_bucket_url("bkt"), config.create_bucket_url("bkt"));
        assert_eq!(config.list_bucket_url(), config.list_bucket_url());
    }
}
