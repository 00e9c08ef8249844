//! Routes the catalog payloads travel on
//!
//! Nothing here performs a request; an [`Endpoint`] only pairs a method with
//! a path so consumers can resolve it against an [`ApiConfig`].

use common::{ApiConfig, ContractError, ContractResult};
use std::fmt;
use url::Url;

/// HTTP method of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path template; `:id` marks the resource identifier segment
    pub path: &'static str,
}

const ID_PARAM: &str = ":id";

impl Endpoint {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Whether the path carries an `:id` segment
    pub fn has_id(&self) -> bool {
        self.path.split('/').any(|segment| segment == ID_PARAM)
    }

    /// Substitute `:id` with a concrete identifier
    pub fn path_with_id(&self, id: i64) -> ContractResult<String> {
        if !self.has_id() {
            return Err(ContractError::MissingPathParameter { path: self.path });
        }

        let id = id.to_string();
        let path = self
            .path
            .split('/')
            .map(|segment| if segment == ID_PARAM { id.as_str() } else { segment })
            .collect::<Vec<_>>()
            .join("/");

        Ok(path)
    }

    /// Full URL of a route without path parameters
    pub fn url(&self, config: &ApiConfig) -> ContractResult<Url> {
        if self.has_id() {
            return Err(ContractError::Configuration(format!(
                "{} {} needs an id; use resource_url",
                self.method, self.path
            )));
        }
        config.join(self.path)
    }

    /// Full URL of a route for one resource
    pub fn resource_url(&self, config: &ApiConfig, id: i64) -> ContractResult<Url> {
        config.join(&self.path_with_id(id)?)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// `LoginRequest` → `LoginResponse`
pub const LOGIN: Endpoint = Endpoint::new(HttpMethod::Post, "/auth/login");
/// `RegisterRequest`
pub const REGISTER: Endpoint = Endpoint::new(HttpMethod::Post, "/auth/register");
/// → `AuthStatus`
pub const AUTH_STATUS: Endpoint = Endpoint::new(HttpMethod::Get, "/auth/status");
/// `ChangePasswordRequest`
pub const CHANGE_PASSWORD: Endpoint = Endpoint::new(HttpMethod::Post, "/auth/change-password");
/// `UpdateProfileRequest`
pub const UPDATE_PROFILE: Endpoint = Endpoint::new(HttpMethod::Put, "/auth/profile");

/// `CreateCollectionRequest` → `MediaCollection`
pub const CREATE_COLLECTION: Endpoint = Endpoint::new(HttpMethod::Post, "/collections");
/// `UpdateCollectionRequest` → `MediaCollection`
pub const UPDATE_COLLECTION: Endpoint = Endpoint::new(HttpMethod::Put, "/collections/:id");

/// `MediaSearchRequest` as a JSON body → `MediaSearchResponse`
pub const SEARCH_MEDIA: Endpoint = Endpoint::new(HttpMethod::Post, "/media/search");

/// → `PaginatedResponse<MediaEntity>`
pub const LIST_ENTITIES: Endpoint = Endpoint::new(HttpMethod::Get, "/api/v1/entities");
/// → `MediaEntity`
pub const GET_ENTITY: Endpoint = Endpoint::new(HttpMethod::Get, "/api/v1/entities/:id");
/// → `EntityStats`
pub const ENTITY_STATS: Endpoint = Endpoint::new(HttpMethod::Get, "/api/v1/entities/stats");
/// → `Vec<DuplicateGroup>`
pub const ENTITY_DUPLICATES: Endpoint =
    Endpoint::new(HttpMethod::Get, "/api/v1/entities/duplicates");

/// Every route known to the catalog
pub const ALL: [Endpoint; 12] = [
    LOGIN,
    REGISTER,
    AUTH_STATUS,
    CHANGE_PASSWORD,
    UPDATE_PROFILE,
    CREATE_COLLECTION,
    UPDATE_COLLECTION,
    SEARCH_MEDIA,
    LIST_ENTITIES,
    GET_ENTITY,
    ENTITY_STATS,
    ENTITY_DUPLICATES,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_auth_routes() {
        assert_eq!(LOGIN.to_string(), "POST /auth/login");
        assert_eq!(AUTH_STATUS.method, HttpMethod::Get);
        assert_eq!(UPDATE_PROFILE.method, HttpMethod::Put);
        assert_eq!(CHANGE_PASSWORD.path, "/auth/change-password");
    }

    #[test]
    fn test_search_carries_json_body() {
        assert_eq!(SEARCH_MEDIA.method, HttpMethod::Post);
        assert_eq!(SEARCH_MEDIA.to_string(), "POST /media/search");
    }

    #[test]
    fn test_path_with_id() {
        assert_eq!(
            UPDATE_COLLECTION.path_with_id(7).unwrap(),
            "/collections/7"
        );
        assert_eq!(GET_ENTITY.path_with_id(100).unwrap(), "/api/v1/entities/100");
    }

    #[test]
    fn test_path_with_id_requires_parameter() {
        let err = CREATE_COLLECTION.path_with_id(7).unwrap_err();
        assert!(matches!(
            err,
            ContractError::MissingPathParameter { path: "/collections" }
        ));
    }

    #[test]
    fn test_url_resolves_against_base() {
        let config = ApiConfig::new("https://media.example.com").unwrap();

        assert_eq!(
            LOGIN.url(&config).unwrap().as_str(),
            "https://media.example.com/auth/login"
        );
        assert_eq!(
            GET_ENTITY.resource_url(&config, 42).unwrap().as_str(),
            "https://media.example.com/api/v1/entities/42"
        );
    }

    #[test]
    fn test_url_keeps_base_prefix() {
        let config = ApiConfig::new("https://media.example.com/catalog/").unwrap();

        assert_eq!(
            ENTITY_STATS.url(&config).unwrap().as_str(),
            "https://media.example.com/catalog/api/v1/entities/stats"
        );
    }

    #[test]
    fn test_url_rejects_templated_route() {
        let config = ApiConfig::new("https://media.example.com").unwrap();
        assert!(matches!(
            UPDATE_COLLECTION.url(&config),
            Err(ContractError::Configuration(_))
        ));
    }

    #[test]
    fn test_routes_are_unique() {
        let unique: HashSet<Endpoint> = ALL.iter().copied().collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn test_every_method_has_a_route() {
        let used: HashSet<HttpMethod> = ALL.iter().map(|e| e.method).collect();

        for method in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put] {
            let exhaustive = match method {
                HttpMethod::Get | HttpMethod::Post | HttpMethod::Put => method,
            };
            assert!(used.contains(&exhaustive), "{method} has no route");
        }
        assert_eq!(used.len(), 3);
    }
}
