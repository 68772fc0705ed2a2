pub mod json_body;
pub mod require_role;
