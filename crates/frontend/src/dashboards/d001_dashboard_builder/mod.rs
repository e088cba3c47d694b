pub mod ui;

pub use ui::DashboardBuilderPage;
