pub mod log_middleware;
pub mod random_headers;
pub mod user_agent_middleware;
