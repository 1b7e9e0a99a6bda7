pub mod api_service_data;
pub mod trace_context;
