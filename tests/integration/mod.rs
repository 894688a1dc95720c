mod auth_tests;
mod visit_tests;
