//! Small value types shared by the catalog, the session guard and the client.
//!
//! [`Method`] and [`BodyShape`] describe an endpoint; [`Context`] tells the
//! session guard whether the caller is acting on the customer storefront or
//! the admin console; [`LoginView`] names the page a guard redirects to.

use serde::{Deserialize, Serialize};

/// HTTP method of a catalog endpoint.
///
/// Serialises as an upper-case string (e.g. `"PATCH"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The wire-format method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parses a [`Method`] case-insensitively.
impl std::str::FromStr for Method {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(format!(
                "unknown method {:?}; expected one of: GET, POST, PUT, PATCH, DELETE",
                s
            )),
        }
    }
}

/// What an endpoint expects alongside its path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    /// Nothing beyond the path.
    None,
    /// Flat key/value pairs appended as a query string.
    Query,
    /// A JSON object body.
    Json,
    /// A `multipart/form-data` body (file uploads).
    Multipart,
}

impl std::fmt::Display for BodyShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyShape::None => write!(f, "none"),
            BodyShape::Query => write!(f, "query"),
            BodyShape::Json => write!(f, "json"),
            BodyShape::Multipart => write!(f, "multipart"),
        }
    }
}

/// Which side of the shop a client acts for.
///
/// Decides how a `403` is interpreted and where an expired session is sent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Storefront pages: shop, cart, checkout, account.
    #[default]
    Customer,
    /// Admin console pages.
    Admin,
}

impl Context {
    /// The login page an expired session in this context is sent to.
    pub fn login_view(&self) -> LoginView {
        match self {
            Context::Customer => LoginView::Customer,
            Context::Admin => LoginView::Admin,
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Customer => write!(f, "customer"),
            Context::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Context {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Context::Customer),
            "admin" => Ok(Context::Admin),
            _ => Err(format!(
                "unknown context {:?}; expected one of: customer, admin",
                s
            )),
        }
    }
}

/// A login page the session guard can redirect to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoginView {
    Customer,
    Admin,
}

impl LoginView {
    /// Page the view lives at, relative to the site root.
    pub fn page(&self) -> &'static str {
        match self {
            LoginView::Customer => "login.html",
            LoginView::Admin => "admin-login.html",
        }
    }
}

impl std::fmt::Display for LoginView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.page())
    }
}
