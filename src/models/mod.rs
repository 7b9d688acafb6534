pub mod app_state;
pub mod common_port;
pub mod diagnostic;
pub mod instance_info;
pub mod metric;
pub mod service;
pub mod tab;

pub use app_state::AppState;
pub use common_port::{CommonPort, COMMON_PORTS};
pub use diagnostic::DiagnosticOutput;
pub use instance_info::{FieldValue, InstanceInfo, UNKNOWN};
pub use metric::{MetricCard, Progress, ProgressLevel};
pub use service::{Service, ServiceList, ServiceStatus, StatusKind};
pub use tab::Tab;
