// Library exports for the binary and for integration tests
pub mod config;
pub mod form;
pub mod i18n;
pub mod metrics;
pub mod page;
pub mod router;
pub mod runtime;
pub mod timer;
pub mod ui;
pub mod widgets;
