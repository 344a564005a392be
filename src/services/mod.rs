pub mod activity_service;
pub mod chart_service;
pub mod developer_service;
pub mod metrics_service;
pub mod price_service;
