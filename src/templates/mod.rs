// Page template
pub mod dashboard_template;

// Fragment templates, one per container kind
pub mod system_overview_template;
pub mod instance_info_template;
pub mod services_template;
pub mod message_template;

// Re-export all templates
pub use dashboard_template::{DashboardTemplate, TabView};
pub use system_overview_template::{CardView, SystemOverviewTemplate};
pub use instance_info_template::{InfoRow, InfoSection, InstanceInfoTemplate};
pub use services_template::{ServiceRowView, ServicesTemplate};
pub use message_template::{MessageTemplate, PreformattedTemplate};
