pub mod charts;
pub mod layout;
pub mod section_card;
pub mod stat_card;
pub mod tab_header;

pub use charts::{BarChart, BarSeries, DonutChart, LineChart, NoData};
pub use layout::MainLayout;
pub use section_card::SectionCard;
pub use stat_card::StatCard;
pub use tab_header::TabHeader;
