mod errors;
mod member_service;

pub use errors::{DUPLICATE_MEMBER_MESSAGE, MemberApplicationError, Result};
pub use member_service::MemberService;
