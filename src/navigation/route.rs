use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route '{0}'")]
    Unknown(String),

    #[error("Route '{0}' is missing its product id")]
    MissingProductId(String),
}

/// Typed form of the route tokens `main`, `detail/{id}` and `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Main,
    Detail { product_id: String },
    Categories,
}

impl Route {
    pub const MAIN: &'static str = "main";
    pub const CATEGORIES: &'static str = "categories";
    const DETAIL_PREFIX: &'static str = "detail/";

    pub fn detail(product_id: impl Into<String>) -> Self {
        Route::Detail {
            product_id: product_id.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Route::Main)
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            Self::MAIN => Ok(Route::Main),
            Self::CATEGORIES => Ok(Route::Categories),
            _ => match token.strip_prefix(Self::DETAIL_PREFIX) {
                Some("") => Err(RouteError::MissingProductId(token.to_string())),
                Some(id) if id.contains('/') => Err(RouteError::Unknown(token.to_string())),
                Some(id) => Ok(Route::detail(id)),
                None => Err(RouteError::Unknown(token.to_string())),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Main => f.write_str(Self::MAIN),
            Route::Detail { product_id } => write!(f, "{}{}", Self::DETAIL_PREFIX, product_id),
            Route::Categories => f.write_str(Self::CATEGORIES),
        }
    }
}
