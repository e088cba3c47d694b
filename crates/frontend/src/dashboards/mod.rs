pub mod d001_dashboard_builder;

pub use d001_dashboard_builder::DashboardBuilderPage;
