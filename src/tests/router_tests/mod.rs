mod api_tests;
mod dashboard_tests;
mod export_tests;
