pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod session;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::SessionMiddleware;
pub use session::{AuthenticatedSession, OptionalSession, Session};
