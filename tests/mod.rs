mod common;

mod dashboard_api_tests;
